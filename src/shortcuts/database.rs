//! Load and append operations on a shortcuts database file
//!
//! The file is mutated only by appending one entry per invocation; it is
//! never rewritten wholesale or compacted. Writes go through a temp file in
//! the same directory followed by a rename, so a crash mid-write leaves the
//! previous contents intact.

use crate::error::{Result, ShortcutsError};
use crate::shortcuts::ShortcutEntry;
use crate::vdf::{self, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Handle on one user's `shortcuts.vdf`
#[derive(Debug, Clone)]
pub struct ShortcutsDatabase {
    path: PathBuf,
}

impl ShortcutsDatabase {
    /// Wrap a database path; the file itself may not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode every entry, in stored order
    ///
    /// Non-numeric keys under the `shortcuts` object are skipped; a missing
    /// `shortcuts` object decodes to an empty list rather than an error.
    pub fn load(&self) -> Result<Vec<(u32, ShortcutEntry)>> {
        let data = fs::read(&self.path)?;
        let root = vdf::decode(&data)?;
        let mut out = Vec::new();
        if let Some(Value::Obj(entries)) = root.get("shortcuts") {
            for (key, value) in entries {
                let Ok(index) = key.parse::<u32>() else {
                    debug!("skipping non-numeric entry key {key:?}");
                    continue;
                };
                if let Some(entry) = ShortcutEntry::from_value(value) {
                    out.push((index, entry));
                } else {
                    debug!("skipping entry {index}: not an object");
                }
            }
        }
        Ok(out)
    }

    /// Append one entry, assigning the next free index
    ///
    /// Writes the minimal empty skeleton first when the file is absent. On
    /// any structural error the on-disk file is left byte-for-byte unchanged.
    /// Returns the index the entry received.
    pub fn append(&self, entry: &ShortcutEntry) -> Result<u32> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "no shortcuts database at {}, creating empty skeleton",
                    self.path.display()
                );
                self.write_atomic(vdf::EMPTY_DATABASE)?;
                vdf::EMPTY_DATABASE.to_vec()
            }
            Err(e) => return Err(e.into()),
        };

        // Precondition before any decoding: a database that lost its two
        // closing terminators is rejected as unrecognized, not as a decode
        // failure.
        if !data.ends_with(&[0x08, 0x08]) {
            return Err(ShortcutsError::StructureNotRecognized);
        }

        let index = vdf::next_index(&data)?;
        let updated = vdf::append_entry(&data, index, entry)?;
        self.write_atomic(&updated)?;
        info!(
            "appended shortcut {:?} with index {index} and appid {}",
            entry.app_name, entry.app_id
        );
        Ok(index)
    }

    /// Whole-file replace via temp file + rename in the same directory
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| ShortcutsError::InvalidPath(self.path.clone()))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}
