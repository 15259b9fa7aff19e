//! Filesystem layer for sitekeeper
//!
//! Forward-slash path handling, atomic writes with locking, and
//! extension-detected config loading shared by the higher layers.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
