//! The shortcut record model

use crate::vdf::Value;

/// One non-Steam-game entry in a shortcuts database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    /// Identifier Steam uses to key artwork, playtime and per-app config.
    /// The high bit is always set for non-Steam applications.
    pub app_id: u32,
    /// Display name shown in the library
    pub app_name: String,
    /// Executable path or command line to launch
    pub exe: String,
    /// Working directory for launch
    pub start_dir: String,
    /// Icon image path, conventionally `<config>/grid/<appid>_icon.ico`
    pub icon: String,
    /// Extra launch arguments; most databases omit this field entirely
    pub launch_options: String,
}

impl ShortcutEntry {
    /// Build an entry from one decoded database object
    ///
    /// Returns `None` when the value is not an object. Field lookup is
    /// case-insensitive and missing fields decode to their defaults, since
    /// client versions differ in both casing and which fields they write.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Obj(_) = value else {
            return None;
        };
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Some(Self {
            app_id: value.get("appid").and_then(Value::as_u32).unwrap_or_default(),
            app_name: text("appname"),
            exe: text("exe"),
            start_dir: text("startdir"),
            icon: text("icon"),
            launch_options: text("launchoptions"),
        })
    }
}
