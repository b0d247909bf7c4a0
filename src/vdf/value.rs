//! In-memory form of decoded KeyValues data

/// A decoded KeyValues value
///
/// Objects keep their fields as an ordered list of pairs rather than a map,
/// matching the byte order of the file; the reader relies on that ordering
/// when printing entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Null-terminated text field
    Str(String),
    /// Little-endian 32-bit unsigned integer field
    U32(u32),
    /// Nested object, field order preserved
    Obj(Vec<(String, Value)>),
}

impl Value {
    /// Look up a field by key, ignoring ASCII case
    ///
    /// Steam's own tooling has written `AppName` and `appname` across client
    /// versions, so every lookup is case-insensitive. Returns `None` for
    /// non-object values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Value::Obj(fields) = self {
            fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        } else {
            None
        }
    }

    /// The string payload, if this is a string field
    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(s) = self { Some(s) } else { None }
    }

    /// The integer payload, if this is a u32 field
    pub fn as_u32(&self) -> Option<u32> {
        if let Value::U32(n) = self { Some(*n) } else { None }
    }
}
