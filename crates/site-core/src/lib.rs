//! Core update pipeline for sitekeeper.
//!
//! Everything between the CLI and the filesystem lives here: the feed
//! and domain models, card rendering, document patching, pre-write
//! backups, the best-effort publisher, the blog collector, and the
//! engine that sequences them.
//!
//! The pipeline keeps a strict effect ordering: every transformation
//! happens in memory first, and the only durable effects of an update
//! are the backup write followed by the document write. Publishing runs
//! after both and is the only step allowed to fail without failing the
//! run.

pub mod backup;
pub mod blog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod patch;
pub mod publish;
pub mod render;

pub use backup::BackupManager;
pub use blog::{BlogArticle, BlogCollector, BlogData};
pub use config::{BlogsConfig, PatchConfig, PathsConfig, PublishConfig, SiteConfig};
pub use engine::{CheckStatus, DocumentCheck, UpdateEngine, UpdateOptions, UpdateReport};
pub use error::{Error, Result};
pub use model::{DomainEntry, DomainsConfig, RankingEntry, RankingFeed};
pub use patch::{PatchOutcome, patch_document};
pub use publish::{PublishOutcome, Publisher};
pub use render::{render_card, render_cards};
