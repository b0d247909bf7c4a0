//! Configuration manager for loading and saving the writer configuration
//!
//! Configuration lives at `~/.config/deckshortcuts/config.json`. A missing or
//! corrupt file at the default location falls back to defaults; an explicitly
//! requested path must exist and parse. Saves are atomic to prevent
//! corruption.

use crate::config::models::ShortcutConfig;
use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    ///
    /// Returns: `~/.config/deckshortcuts/config.json`
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("deckshortcuts").join("config.json")
    }

    /// Load configuration from the default location
    ///
    /// If the configuration file doesn't exist or is corrupt, returns the
    /// compiled-in defaults.
    pub fn load() -> Result<ShortcutConfig> {
        let config_path = Self::default_config_path();

        if !config_path.exists() {
            info!("configuration file not found, using defaults");
            return Ok(ShortcutConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;
        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("failed to parse configuration, using defaults: {e}");
                Ok(ShortcutConfig::default())
            }
        }
    }

    /// Load configuration from an explicitly requested path
    ///
    /// Unlike the default location, a missing or malformed file here is an
    /// error rather than a silent fallback.
    pub fn load_from(path: &Path) -> Result<ShortcutConfig> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        info!("configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location with an atomic write
    ///
    /// Creates the configuration directory if needed, then writes through a
    /// temp file and rename.
    pub fn save(config: &ShortcutConfig) -> Result<()> {
        let config_path = Self::default_config_path();
        Self::save_to(config, &config_path)
    }

    /// Save configuration to an explicit path with an atomic write
    pub fn save_to(config: &ShortcutConfig, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| crate::error::ShortcutsError::InvalidPath(path.to_path_buf()))?;
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;

        info!("configuration saved to {}", path.display());
        Ok(())
    }
}
