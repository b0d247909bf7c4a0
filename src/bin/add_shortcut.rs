//! `add-shortcut` - append one configured non-Steam shortcut
//!
//! Locates the current Steam user, appends the configured entry to that
//! user's `shortcuts.vdf` and best-effort downloads its SteamGridDB artwork
//! into `config/grid/`. Steam must be restarted afterwards to pick up the
//! new entry.

use anyhow::{Context, Result};
use clap::Parser;
use deckshortcuts::appid;
use deckshortcuts::artwork::ArtworkDownloader;
use deckshortcuts::config::ConfigManager;
use deckshortcuts::error::ShortcutsError;
use deckshortcuts::shortcuts::{ShortcutEntry, ShortcutsDatabase};
use deckshortcuts::{steam, utils};
use std::path::PathBuf;
use tracing::{info, warn};

/// Append a configured non-Steam shortcut to the Steam library
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured display name
    #[arg(long)]
    name: Option<String>,

    /// Override the configured executable path
    #[arg(long)]
    exe: Option<String>,

    /// Override the configured start directory
    #[arg(long)]
    start_dir: Option<String>,

    /// Skip artwork downloads
    #[arg(long)]
    no_artwork: bool,

    /// Write the effective configuration to the default config path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    utils::init_logging().context("failed to initialize logging")?;
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigManager::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ConfigManager::load().context("failed to load configuration")?,
    };
    if let Some(name) = args.name {
        config.app_name = name;
    }
    if let Some(exe) = args.exe {
        config.exe = exe;
    }
    if let Some(start_dir) = args.start_dir {
        config.start_dir = start_dir;
    }

    if args.write_config {
        ConfigManager::save(&config).context("failed to write configuration")?;
        println!(
            "Wrote configuration to {}",
            ConfigManager::default_config_path().display()
        );
        return Ok(());
    }

    let user = steam::discover_users()
        .into_iter()
        .next()
        .ok_or(ShortcutsError::NoSteamUser)?;
    info!(
        "using Steam user {} ({})",
        user.user_id,
        user.config_dir.display()
    );

    let app_id = appid::app_id(&config.app_name, &config.exe);
    let entry = ShortcutEntry {
        app_id,
        app_name: config.app_name.clone(),
        exe: config.exe.clone(),
        start_dir: config.start_dir.clone(),
        icon: user
            .grid_dir()
            .join(format!("{app_id}_icon.ico"))
            .to_string_lossy()
            .into_owned(),
        launch_options: String::new(),
    };

    let db = ShortcutsDatabase::new(user.shortcuts_path());
    let index = db.append(&entry).context("failed to append shortcut")?;
    println!(
        "Added shortcut {:?} with index {index} and appid {app_id}",
        config.app_name
    );

    if args.no_artwork {
        info!("artwork downloads disabled");
    } else {
        // Artwork is best effort: any failure here is logged and the run
        // still succeeds, since the shortcut itself is already written.
        match ArtworkDownloader::new() {
            Ok(downloader) => {
                let images = config
                    .artwork
                    .iter()
                    .map(|(suffix, url)| (suffix.as_str(), url.as_str()));
                match downloader.download_all(&user.grid_dir(), app_id, images) {
                    Ok(fetched) => info!("downloaded {fetched} artwork file(s)"),
                    Err(e) => warn!("artwork downloads failed: {e}"),
                }
            }
            Err(e) => warn!("could not create HTTP client, skipping artwork: {e}"),
        }
    }

    println!("Done. Restart Steam to see the new entry in your library.");
    Ok(())
}
