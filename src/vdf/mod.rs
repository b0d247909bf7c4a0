//! Binary KeyValues codec for Steam's `shortcuts.vdf`
//!
//! The file is a flat byte stream of typed key/value pairs inside an implicit
//! root object: `0x00` opens a nested object, `0x01` a null-terminated string
//! field, `0x02` a little-endian u32 field, and `0x08` closes the innermost
//! open object. A well-formed shortcuts database always ends with two `0x08`
//! bytes: one closing the `shortcuts` object, one closing the root.
//!
//! Steam itself is the other reader of these bytes, so the encoder emits
//! exactly the layout the client writes and the appender only ever splices a
//! complete entry in front of the two closing terminators.

pub mod decoder;
pub mod encoder;
pub mod value;

pub use decoder::decode;
pub use encoder::{EMPTY_DATABASE, append_entry, encode_entry, next_index};
pub use value::Value;

/// Type byte opening a nested object
pub(crate) const TYPE_OBJECT: u8 = 0x00;
/// Type byte introducing a null-terminated string field
pub(crate) const TYPE_STRING: u8 = 0x01;
/// Type byte introducing a little-endian u32 field
pub(crate) const TYPE_UINT32: u8 = 0x02;
/// Closes the innermost open object
pub(crate) const TYPE_END: u8 = 0x08;
