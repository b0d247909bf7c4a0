//! Configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for the shortcut the writer appends
///
/// Defaults describe the Minecraft splitscreen launcher this tool was built
/// around; a config file or command-line flags override them. Every field is
/// optional in the file, so a partial config falls back per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Display name shown in the Steam library
    pub app_name: String,
    /// Executable path or command line to launch
    pub exe: String,
    /// Working directory for launch
    pub start_dir: String,
    /// Artwork downloads, keyed by Steam's grid filename suffix:
    /// `""` grid, `"p"` portrait, `"_hero"`, `"_logo"`, `"_icon"`
    pub artwork: BTreeMap<String, String>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let artwork = [
            (
                "",
                "https://cdn2.steamgriddb.com/grid/e353b610e9ce20f963b4cca5da565605.jpg",
            ),
            (
                "p",
                "https://cdn2.steamgriddb.com/grid/a73027901f88055aaa0fd1a9e25d36c7.png",
            ),
            (
                "_hero",
                "https://cdn2.steamgriddb.com/hero/ecd812da02543c0269cfc2c56ab3c3c0.png",
            ),
            (
                "_logo",
                "https://cdn2.steamgriddb.com/logo/90915208c601cc8c86ad01250ee90c12.png",
            ),
            (
                "_icon",
                "https://cdn2.steamgriddb.com/icon/add7a048049671970976f3e18f21ade3.ico",
            ),
        ]
        .into_iter()
        .map(|(suffix, url)| (suffix.to_string(), url.to_string()))
        .collect();

        Self {
            app_name: "Minecraft Splitscreen".to_string(),
            exe: "/home/deck/.local/share/PollyMC/minecraft.sh".to_string(),
            start_dir: "/home/deck/.local/share/PollyMC".to_string(),
            artwork,
        }
    }
}
