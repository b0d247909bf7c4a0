//! Locates Steam userdata directories across install layouts
//!
//! Three roots are probed: the `~/.steam/steam` symlink, the native
//! `~/.local/share/Steam` tree and the Flatpak sandbox under
//! `~/.var/app/com.valvesoftware.Steam`. The symlink normally resolves into
//! the native tree, so roots are deduplicated after canonicalization and a
//! user is reported once regardless of how many roots reach it.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// One Steam account's slice of a userdata tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamUser {
    /// Numeric account id, as named on disk
    pub user_id: String,
    /// The account's `config` directory
    pub config_dir: PathBuf,
}

impl SteamUser {
    /// Path of this user's shortcuts database
    pub fn shortcuts_path(&self) -> PathBuf {
        self.config_dir.join("shortcuts.vdf")
    }

    /// Artwork cache directory, files keyed by appid
    pub fn grid_dir(&self) -> PathBuf {
        self.config_dir.join("grid")
    }
}

/// Userdata roots for the install layouts found on a Steam Deck
pub fn default_roots() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    vec![
        home.join(".steam/steam/userdata"),
        home.join(".local/share/Steam/userdata"),
        home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam/userdata"),
    ]
}

/// Enumerate users under the default roots
pub fn discover_users() -> Vec<SteamUser> {
    discover_users_in(&default_roots())
}

/// Enumerate numeric user-id subdirectories of the given userdata roots
///
/// User ids within one root are sorted so results do not depend on directory
/// iteration order.
pub fn discover_users_in(roots: &[PathBuf]) -> Vec<SteamUser> {
    let mut seen_roots: Vec<PathBuf> = Vec::new();
    let mut users = Vec::new();

    for root in roots {
        let canonical = fs::canonicalize(root).unwrap_or_else(|_| root.clone());
        if seen_roots.contains(&canonical) {
            continue;
        }
        seen_roots.push(canonical.clone());

        let Ok(dir) = fs::read_dir(&canonical) else {
            debug!("userdata root {} not readable, skipping", root.display());
            continue;
        };

        let mut ids: Vec<String> = dir
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()))
            .collect();
        ids.sort();

        for user_id in ids {
            let config_dir = canonical.join(&user_id).join("config");
            users.push(SteamUser {
                user_id,
                config_dir,
            });
        }
    }

    users
}

/// Shortcuts databases that already exist under the default roots
pub fn find_shortcuts_files() -> Vec<PathBuf> {
    find_shortcuts_files_in(&default_roots())
}

/// Shortcuts databases that already exist under the given roots, one path
/// per discovered user
pub fn find_shortcuts_files_in(roots: &[PathBuf]) -> Vec<PathBuf> {
    discover_users_in(roots)
        .into_iter()
        .map(|user| user.shortcuts_path())
        .filter(|path| path.exists())
        .collect()
}
