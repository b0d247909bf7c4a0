//! Encoder and append logic for shortcut entries
//!
//! The writer never re-serializes the whole database: existing bytes are kept
//! verbatim and exactly one encoded entry is spliced in front of the two
//! closing terminators. Index derivation, however, goes through a full
//! structural decode, so a digit sequence inside a string value can never be
//! mistaken for an entry index.

use super::value::Value;
use super::{TYPE_END, TYPE_OBJECT, TYPE_STRING, TYPE_UINT32, decode};
use crate::error::{Result, ShortcutsError};
use crate::shortcuts::ShortcutEntry;

/// Minimal valid shortcuts database: an empty `shortcuts` object inside the
/// implicit root
pub const EMPTY_DATABASE: &[u8] = b"\x00shortcuts\x00\x08\x08";

fn push_cstring(out: &mut Vec<u8>, text: &str) {
    out.extend_from_slice(text.as_bytes());
    out.push(0);
}

fn push_string_field(out: &mut Vec<u8>, key: &str, value: &str) {
    out.push(TYPE_STRING);
    push_cstring(out, key);
    push_cstring(out, value);
}

/// Serialize one shortcut entry under the given index
///
/// Field order matches what the Steam client writes: index token, `appid`,
/// `appname`, `exe`, `StartDir`, `icon`, then the entry's closing terminator.
pub fn encode_entry(index: u32, entry: &ShortcutEntry) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(TYPE_OBJECT);
    push_cstring(&mut out, &index.to_string());
    out.push(TYPE_UINT32);
    push_cstring(&mut out, "appid");
    out.extend_from_slice(&entry.app_id.to_le_bytes());
    push_string_field(&mut out, "appname", &entry.app_name);
    push_string_field(&mut out, "exe", &entry.exe);
    push_string_field(&mut out, "StartDir", &entry.start_dir);
    push_string_field(&mut out, "icon", &entry.icon);
    out.push(TYPE_END);
    out
}

/// Determine the index the next appended entry should receive
///
/// Decodes the buffer and takes the maximum numeric key of the `shortcuts`
/// object plus one; an empty database yields index 0. Indices are never
/// reused.
pub fn next_index(db: &[u8]) -> Result<u32> {
    let root = decode(db)?;
    let max = match root.get("shortcuts") {
        Some(Value::Obj(entries)) => entries
            .iter()
            .filter_map(|(key, _)| key.parse::<u32>().ok())
            .max(),
        _ => None,
    };
    Ok(max.map_or(0, |m| m + 1))
}

/// Splice one encoded entry into an existing database buffer
///
/// The buffer must end with the two closing terminators; the entry lands
/// immediately before them and they remain the suffix of the result. A buffer
/// without that suffix is rejected untouched.
pub fn append_entry(db: &[u8], index: u32, entry: &ShortcutEntry) -> Result<Vec<u8>> {
    let Some(body) = db.strip_suffix(&[TYPE_END, TYPE_END]) else {
        return Err(ShortcutsError::StructureNotRecognized);
    };
    let encoded = encode_entry(index, entry);
    let mut out = Vec::with_capacity(db.len() + encoded.len());
    out.extend_from_slice(body);
    out.extend_from_slice(&encoded);
    out.extend_from_slice(&[TYPE_END, TYPE_END]);
    Ok(out)
}
