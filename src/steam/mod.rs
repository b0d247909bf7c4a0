//! Steam installation discovery
//!
//! Finds userdata directories and shortcuts databases across the install
//! layouts seen on a Steam Deck.

pub mod locator;

pub use locator::{SteamUser, discover_users, find_shortcuts_files};
