//! Writer configuration
//!
//! The entry `add-shortcut` appends is described by a [`ShortcutConfig`]
//! loaded from disk, with compiled-in defaults and command-line overrides on
//! top.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::ShortcutConfig;
