//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the file path                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (front desk) ← logged, then a generic message                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming the snapshot file failed.
    ///
    /// ## When This Occurs
    /// - Data directory is not writable
    /// - Disk full
    /// - File removed between the temp write and the rename
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the record layout.
    #[error("Corrupt snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot written by a newer format.
    #[error("Unsupported snapshot version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl StoreError {
    /// Creates an Io error tagged with the file it concerns.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
