//! `list-shortcuts` - print entries from Steam shortcuts databases
//!
//! With no argument every known Steam userdata location is searched and each
//! database found is printed; an explicit path bypasses discovery.

use anyhow::{Context, Result};
use clap::Parser;
use deckshortcuts::error::ShortcutsError;
use deckshortcuts::shortcuts::ShortcutsDatabase;
use deckshortcuts::{steam, utils};
use std::path::{Path, PathBuf};

/// List non-Steam shortcuts from one or all Steam users
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Explicit path to a shortcuts.vdf; all known Steam locations are
    /// searched when omitted
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    utils::init_logging().context("failed to initialize logging")?;
    let args = Args::parse();

    let paths = match args.path {
        Some(path) => vec![path],
        None => {
            let found = steam::find_shortcuts_files();
            if found.is_empty() {
                return Err(ShortcutsError::NoDatabasesFound.into());
            }
            found
        }
    };

    for path in paths {
        print_database(&path)?;
    }
    Ok(())
}

/// Print every entry of one database to stdout
fn print_database(path: &Path) -> Result<()> {
    println!("Reading: {}", path.display());

    let db = ShortcutsDatabase::new(path);
    let entries = db
        .load()
        .with_context(|| format!("failed to read {}", path.display()))?;

    if entries.is_empty() {
        println!("  (no shortcuts)");
        return Ok(());
    }

    for (index, entry) in entries {
        let name = if entry.app_name.is_empty() {
            "Unnamed"
        } else {
            entry.app_name.as_str()
        };
        let exe = if entry.exe.is_empty() {
            "???"
        } else {
            entry.exe.as_str()
        };
        println!("[{index}] {name}");
        println!("    exe:  {exe}");
        println!("    opts: {}", entry.launch_options);
    }
    Ok(())
}
