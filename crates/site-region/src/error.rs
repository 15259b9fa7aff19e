//! Error types for site-region

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Anchor marker not found in document: {marker}")]
    AnchorMissing { marker: String },

    #[error("Anchor marker occurs {count} times, expected exactly one: {marker}")]
    AnchorAmbiguous { marker: String, count: usize },

    #[error("Region is never closed: depth {depth} remains for {open:?} at end of document")]
    RegionUnbalanced { open: String, depth: usize },
}
