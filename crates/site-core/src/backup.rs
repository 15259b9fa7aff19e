//! Pre-write document snapshots.

use chrono::{DateTime, Local};
use site_fs::{NormalizedPath, io};

use crate::error::{Error, Result};

/// Writes a timestamped copy of the document before every rewrite.
///
/// Snapshots are named `{stem}_backup_{YYYYmmdd_HHMM}.{ext}` and are
/// never rotated; pruning old ones is left to the operator.
pub struct BackupManager {
    backup_dir: NormalizedPath,
}

impl BackupManager {
    pub fn new(backup_dir: NormalizedPath) -> Self {
        Self { backup_dir }
    }

    /// Copy `document` into the backup directory, stamped with the
    /// current local time.
    pub fn snapshot(&self, document: &NormalizedPath) -> Result<NormalizedPath> {
        self.snapshot_at(document, Local::now())
    }

    /// Like [`snapshot`](Self::snapshot) with an explicit timestamp.
    ///
    /// # Errors
    /// Any failure to read the document or write the snapshot maps to
    /// [`Error::BackupWriteFailed`]. Callers must leave the document
    /// untouched when that happens.
    pub fn snapshot_at(
        &self,
        document: &NormalizedPath,
        timestamp: DateTime<Local>,
    ) -> Result<NormalizedPath> {
        let bytes = io::read_bytes(document).map_err(|e| Error::BackupWriteFailed {
            path: document.to_native(),
            message: e.to_string(),
        })?;

        let name = Self::snapshot_name(document, timestamp);
        let dest = self.backup_dir.join(&name);
        io::write_atomic(&dest, &bytes).map_err(|e| Error::BackupWriteFailed {
            path: dest.to_native(),
            message: e.to_string(),
        })?;

        tracing::info!("backed up {document} to {dest}");
        Ok(dest)
    }

    /// Snapshot file name for `document` at `timestamp`.
    ///
    /// Minute granularity matches the update cadence; two runs in the
    /// same minute overwrite one snapshot rather than piling up.
    fn snapshot_name(document: &NormalizedPath, timestamp: DateTime<Local>) -> String {
        let stem = document.file_stem().unwrap_or("document");
        let stamp = timestamp.format("%Y%m%d_%H%M");
        match document.extension() {
            Some(ext) => format!("{stem}_backup_{stamp}.{ext}"),
            None => format!("{stem}_backup_{stamp}"),
        }
    }
}
