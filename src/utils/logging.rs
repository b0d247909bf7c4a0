//! Logging system initialization
//!
//! Sets up tracing-based logging to stderr, keeping stdout reserved for the
//! tools' listing output. Level defaults to INFO but can be configured via
//! the `RUST_LOG` environment variable.

use crate::error::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
