//! Utility modules
//!
//! Provides logging initialization for the command-line tools.

pub mod logging;

pub use logging::init_logging;
