//! Error types for `deckshortcuts`
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Decode failures carry the byte offset of the offending input so a corrupt
//! `shortcuts.vdf` can be inspected with a hex dump.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding the binary shortcuts format
///
/// Each malformed-input condition is a distinct variant; the decoder never
/// coerces bad input into partial data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input buffer contained no bytes at all
    #[error("empty input buffer")]
    EmptyInput,

    /// A string field ran past the end of the buffer without a null terminator
    #[error("unterminated string at offset {offset}")]
    UnterminatedString {
        /// Byte offset where the string began
        offset: usize,
    },

    /// An integer field had fewer than 4 bytes remaining
    #[error("truncated integer field at offset {offset}")]
    TruncatedInteger {
        /// Byte offset where the integer payload began
        offset: usize,
    },

    /// A type byte outside the known set was encountered
    #[error("unknown field type 0x{byte:02x} at offset {offset}")]
    UnknownType {
        /// The unrecognized type byte
        byte: u8,
        /// Byte offset of the type byte
        offset: usize,
    },

    /// The buffer ended while at least one object was still open
    #[error("unexpected end of buffer inside an open object at offset {offset}")]
    UnclosedObject {
        /// Byte offset where input ran out
        offset: usize,
    },

    /// Bytes remained after the root object's terminator
    #[error("trailing bytes after the root terminator at offset {offset}")]
    TrailingBytes {
        /// Byte offset of the first trailing byte
        offset: usize,
    },
}

/// Main error type for `deckshortcuts` operations
#[derive(Debug, Error)]
pub enum ShortcutsError {
    /// No numeric user directory exists under any known Steam userdata root
    #[error("no Steam user directory found")]
    NoSteamUser,

    /// Discovery found no existing shortcuts database in any known location
    #[error("no shortcuts.vdf found in any known Steam userdata location")]
    NoDatabasesFound,

    /// The database buffer does not end with the two closing terminators;
    /// the on-disk file is never mutated when this is raised
    #[error("shortcuts database structure not recognized, no changes made")]
    StructureNotRecognized,

    /// The database bytes did not parse against the binary grammar
    #[error("failed to decode shortcuts database: {0}")]
    Decode(#[from] DecodeError),

    /// A path was missing a required component (e.g. a parent directory)
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// An artwork fetch came back with a non-success HTTP status
    #[error("download of {url} failed with status {status}")]
    DownloadStatus {
        /// The requested artwork URL
        url: String,
        /// The status the server answered with
        status: reqwest::StatusCode,
    },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to install the global tracing subscriber
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `deckshortcuts` operations
pub type Result<T> = std::result::Result<T, ShortcutsError>;
