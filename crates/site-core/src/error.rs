//! Error types for site-core

use std::path::PathBuf;

/// Result type for site-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in site-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Domain presentation config not found at the expected path
    #[error("Domains config not found at {path}")]
    ConfigMissing { path: PathBuf },

    /// Ranking feed not found at the expected path
    #[error("Ranking feed not found at {path}")]
    FeedMissing { path: PathBuf },

    /// Homepage document not found at the expected path
    #[error("Document not found at {path}")]
    DocumentMissing { path: PathBuf },

    /// Document is implausibly small, likely truncated or corrupt
    #[error("Document is {len} bytes, below the {floor}-byte corruption floor")]
    SizeAnomaly { len: usize, floor: usize },

    /// Patched output is byte-identical to the input
    #[error("Patched document is identical to the original; nothing to write")]
    NoOpDetected,

    /// The pre-write snapshot could not be completed
    #[error("Backup write failed for {path}: {message}")]
    BackupWriteFailed { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Region location error from site-region
    #[error(transparent)]
    Region(#[from] site_region::Error),

    /// Filesystem error from site-fs
    #[error(transparent)]
    Fs(#[from] site_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
