//! Decoder for the binary KeyValues grammar
//!
//! Parsing is strictly sequential and tracks object nesting; malformed or
//! truncated input fails with a distinct [`DecodeError`] instead of returning
//! partial data. Text is decoded as UTF-8 with lossy replacement, since
//! client-produced files are not guaranteed to be valid UTF-8.

use super::value::Value;
use super::{TYPE_END, TYPE_OBJECT, TYPE_STRING, TYPE_UINT32};
use crate::error::DecodeError;

/// Parse a whole buffer into the implicit root object
///
/// The root object's closing `0x08` must be the final byte of the buffer;
/// anything after it is reported as trailing data.
pub fn decode(buf: &[u8]) -> Result<Value, DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mut cursor = Cursor { buf, pos: 0 };
    let root = parse_object(&mut cursor)?;
    if cursor.pos < buf.len() {
        return Err(DecodeError::TrailingBytes { offset: cursor.pos });
    }
    Ok(root)
}

/// Sequential reader over the input buffer
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Read a null-terminated string, consuming the terminator
    fn read_cstring(&mut self) -> Result<String, DecodeError> {
        let start = self.pos;
        match self.buf[self.pos..].iter().position(|&b| b == 0) {
            Some(len) => {
                let text = String::from_utf8_lossy(&self.buf[start..start + len]).into_owned();
                self.pos = start + len + 1;
                Ok(text)
            }
            None => Err(DecodeError::UnterminatedString { offset: start }),
        }
    }

    /// Read exactly 4 bytes as a little-endian u32
    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let start = self.pos;
        if self.buf.len() - start < 4 {
            return Err(DecodeError::TruncatedInteger { offset: start });
        }
        let value = u32::from_le_bytes([
            self.buf[start],
            self.buf[start + 1],
            self.buf[start + 2],
            self.buf[start + 3],
        ]);
        self.pos = start + 4;
        Ok(value)
    }
}

/// Parse fields until the object's closing terminator
fn parse_object(cursor: &mut Cursor) -> Result<Value, DecodeError> {
    let mut fields = Vec::new();
    loop {
        let Some(tag) = cursor.next_byte() else {
            return Err(DecodeError::UnclosedObject { offset: cursor.pos });
        };
        match tag {
            TYPE_END => return Ok(Value::Obj(fields)),
            TYPE_OBJECT => {
                let key = cursor.read_cstring()?;
                let nested = parse_object(cursor)?;
                fields.push((key, nested));
            }
            TYPE_STRING => {
                let key = cursor.read_cstring()?;
                let text = cursor.read_cstring()?;
                fields.push((key, Value::Str(text)));
            }
            TYPE_UINT32 => {
                let key = cursor.read_cstring()?;
                let value = cursor.read_u32()?;
                fields.push((key, Value::U32(value)));
            }
            byte => {
                return Err(DecodeError::UnknownType {
                    byte,
                    offset: cursor.pos - 1,
                });
            }
        }
    }
}
