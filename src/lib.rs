//! `deckshortcuts` - Non-Steam shortcut management for the Steam Deck
//!
//! Appends entries to Steam's binary shortcuts database (`shortcuts.vdf`) and
//! lists the entries already there. Ships two binaries: `add-shortcut`, which
//! writes one configured shortcut and fetches its SteamGridDB artwork, and
//! `list-shortcuts`, which prints existing entries from every known Steam
//! install layout.
//!
//! The database format is the binary KeyValues encoding Steam uses for
//! `shortcuts.vdf`; the [`vdf`] module owns both directions of that codec.
//!
//! # Requirements
//!
//! - A Steam install with at least one logged-in user (native or Flatpak)
//! - Steam must be restarted to pick up appended entries

// Module declarations
pub mod appid;
pub mod artwork;
pub mod config;
pub mod error;
pub mod shortcuts;
pub mod steam;
pub mod utils;
pub mod vdf;

// Re-export commonly used types
pub use error::{Result, ShortcutsError};
pub use shortcuts::{ShortcutEntry, ShortcutsDatabase};
