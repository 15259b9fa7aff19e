//! Runtime settings for the update pipeline.

use serde::{Deserialize, Serialize};
use site_fs::{ConfigStore, NormalizedPath};
use site_region::TagPair;

use crate::error::Result;

/// Top-level settings, usually loaded from `site.toml`.
///
/// Every section and field has a default matching the production
/// deployment, so a missing file and a partial file both work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub paths: PathsConfig,
    pub patch: PatchConfig,
    pub publish: PublishConfig,
    pub blogs: BlogsConfig,
}

/// Input and output locations, absolute or relative to the working
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// The homepage document to patch.
    pub document: String,
    /// The ranking feed JSON.
    pub feed: String,
    /// The domain presentation config JSON.
    pub domains: String,
    /// Directory that receives pre-write snapshots.
    pub backup_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            document: "index.html".to_string(),
            feed: "webclick/latest_top7.json".to_string(),
            domains: "domains_config.json".to_string(),
            backup_dir: "backup".to_string(),
        }
    }
}

/// Settings for locating and validating the card region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Anchor open tag that introduces the card region.
    pub anchor: String,
    /// Element name tracked for nesting depth.
    pub nested_tag: String,
    /// Documents shorter than this are treated as corrupt.
    pub min_document_len: usize,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            anchor: r#"<div class="projects-grid">"#.to_string(),
            nested_tag: "div".to_string(),
            min_document_len: 1000,
        }
    }
}

impl PatchConfig {
    /// The open/close tokens for [`nested_tag`](Self::nested_tag).
    pub fn tag_pair(&self) -> TagPair {
        TagPair::element(&self.nested_tag)
    }
}

/// Settings for the best-effort remote publish step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// External upload tool, looked up on PATH.
    pub tool: String,
    /// Destination argument passed to the tool.
    pub destination: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            tool: "s3cmd".to_string(),
            destination: "s3://www/index.html".to_string(),
        }
    }
}

/// Settings for the blog article collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogsConfig {
    /// Root of the site tree scanned for article pages.
    pub www_root: String,
    /// Output JSON consumed by the blog index page.
    pub output: String,
}

impl Default for BlogsConfig {
    fn default() -> Self {
        Self {
            www_root: ".".to_string(),
            output: "blog_data.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Conventional settings file name.
    pub const DEFAULT_FILE: &'static str = "site.toml";

    /// Load settings from an explicit file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let config = ConfigStore::new().load(path)?;
        tracing::debug!("loaded settings from {path}");
        Ok(config)
    }

    /// Load settings from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no settings file at {path}, using defaults");
            Ok(Self::default())
        }
    }

    pub fn document_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.paths.document)
    }

    pub fn feed_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.paths.feed)
    }

    pub fn domains_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.paths.domains)
    }

    pub fn backup_dir(&self) -> NormalizedPath {
        NormalizedPath::new(&self.paths.backup_dir)
    }
}
