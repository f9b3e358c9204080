//! Error taxonomy for the plugin-statistics pipeline.
//!
//! Errors fall into two classes:
//!
//! - Fatal: the run cannot produce a meaningful report (`Setup`, `Config`,
//!   `Io`). These abort before any output artifact is written.
//! - Per-file recoverable: one project could not be staged, decoded, or
//!   parsed (`Staging`, `Decode`, `Parse`). The orchestrator records these
//!   as warnings and continues; the affected file simply contributes no
//!   plugin occurrences.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlugstatsError {
    /// The scratch working directory could not be created.
    #[error("failed to set up working directory {path}: {source}")]
    Setup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file exists but could not be read or parsed.
    #[error("failed to load configuration from {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A source project could not be copied into the scratch directory.
    #[error("failed to stage project {path}: {source}")]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A staged project is not valid compressed data.
    #[error("failed to decode project container {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// A decoded document is not well-formed XML.
    #[error("failed to parse decoded document {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Other I/O failures (report write, directory listing).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PlugstatsError {
    /// Whether this error aborts the whole run rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlugstatsError::Setup { .. } | PlugstatsError::Config { .. } | PlugstatsError::Io(_)
        )
    }

    /// The file the error is about, when it concerns a single file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PlugstatsError::Setup { path, .. }
            | PlugstatsError::Config { path, .. }
            | PlugstatsError::Staging { path, .. }
            | PlugstatsError::Decode { path, .. }
            | PlugstatsError::Parse { path, .. } => Some(path),
            PlugstatsError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlugstatsError>;
