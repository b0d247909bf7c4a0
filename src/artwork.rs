//! SteamGridDB artwork fetching
//!
//! Downloads a shortcut's artwork set into the user's `config/grid`
//! directory. Downloads are best effort: an existing file is treated as an
//! already-satisfied cache entry, and a failed item is logged and skipped
//! without affecting the rest of the batch or the overall exit status.

use crate::error::{Result, ShortcutsError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Identifying header sent with artwork requests; the CDN serves plain GETs
/// but expects a browser-like agent
const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking downloader for a shortcut's artwork set
pub struct ArtworkDownloader {
    client: reqwest::blocking::Client,
}

impl ArtworkDownloader {
    /// Create a downloader with the fixed timeout and user agent
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Artwork file path for one image
    ///
    /// Steam looks for `<appid><suffix>.png` under the grid directory; icon
    /// URLs keep their `.ico` extension instead.
    pub fn artwork_path(grid_dir: &Path, app_id: u32, suffix: &str, url: &str) -> PathBuf {
        let ext = if url.ends_with(".ico") { "ico" } else { "png" };
        grid_dir.join(format!("{app_id}{suffix}.{ext}"))
    }

    /// Fetch every image in the set into `grid_dir`
    ///
    /// Creates the grid directory if needed and skips files already present.
    /// Returns the number of files actually downloaded; individual failures
    /// are logged with the offending item and do not abort the batch.
    pub fn download_all<'a>(
        &self,
        grid_dir: &Path,
        app_id: u32,
        images: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<usize> {
        fs::create_dir_all(grid_dir)?;

        let mut fetched = 0;
        for (suffix, url) in images {
            let path = Self::artwork_path(grid_dir, app_id, suffix, url);
            if path.exists() {
                info!("artwork {} already exists, skipping", path.display());
                continue;
            }
            debug!("downloading {url}");
            match self.download_one(url, &path) {
                Ok(()) => {
                    info!("saved artwork {}", path.display());
                    fetched += 1;
                }
                Err(e) => warn!("failed to download {suffix:?} image from {url}: {e}"),
            }
        }
        Ok(fetched)
    }

    /// GET one URL and write the response body verbatim
    fn download_one(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(ShortcutsError::DownloadStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }
        let bytes = response.bytes()?;

        let dir = path
            .parent()
            .ok_or_else(|| ShortcutsError::InvalidPath(path.to_path_buf()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
