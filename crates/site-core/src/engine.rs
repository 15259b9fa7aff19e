//! The update engine: sequencing loads, patching, backup, write, and
//! publish.

use similar::TextDiff;

use site_fs::{ConfigStore, NormalizedPath, io};
use site_region::count_occurrences;

use crate::backup::BackupManager;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::model::{DomainsConfig, RankingFeed};
use crate::patch::{PatchOutcome, patch_document};
use crate::publish::{PublishOutcome, Publisher};

/// Options for an update run.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Simulate the update without durable effects. Actions are
    /// prefixed with "[dry-run] Would ...".
    pub dry_run: bool,
    /// Skip the remote publish step after writing.
    pub skip_publish: bool,
}

/// Report from an update run.
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    /// Actions taken, in order.
    pub actions: Vec<String>,
    /// Non-fatal problems; publishing is the only source today.
    pub warnings: Vec<String>,
    /// Where the pre-write snapshot landed, when one was written.
    pub backup: Option<NormalizedPath>,
    /// Unified diff of the card region, present on dry runs.
    pub diff: Option<String>,
}

impl UpdateReport {
    /// Add an action to the report.
    pub fn with_action(mut self, action: String) -> Self {
        self.actions.push(action);
        self
    }

    /// Add a warning to the report.
    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }
}

/// Health status of the homepage document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Healthy,
    Broken,
}

/// Result of a non-mutating document inspection.
#[derive(Debug, Clone)]
pub struct DocumentCheck {
    pub status: CheckStatus,
    pub document_len: usize,
    pub anchor_count: usize,
    /// Everything wrong with the document, empty when healthy.
    pub issues: Vec<String>,
}

/// Coordinates one homepage update end to end.
///
/// All mutation happens in memory first. The only durable effects are
/// the backup write followed by the document write, in that order; a
/// failed backup blocks the write. Publishing runs last and never fails
/// the run.
pub struct UpdateEngine {
    config: SiteConfig,
}

impl UpdateEngine {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Load the domain presentation config.
    pub fn load_domains(&self) -> Result<DomainsConfig> {
        let path = self.config.domains_path();
        if !path.exists() {
            return Err(Error::ConfigMissing {
                path: path.to_native(),
            });
        }
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Load the ranking feed.
    pub fn load_feed(&self) -> Result<RankingFeed> {
        let path = self.config.feed_path();
        if !path.exists() {
            return Err(Error::FeedMissing {
                path: path.to_native(),
            });
        }
        Ok(ConfigStore::new().load(&path)?)
    }

    /// Read the homepage document.
    pub fn read_document(&self) -> Result<String> {
        let path = self.config.document_path();
        if !path.exists() {
            return Err(Error::DocumentMissing {
                path: path.to_native(),
            });
        }
        Ok(io::read_text(&path)?)
    }

    /// Run a full update.
    ///
    /// Loads inputs, patches in memory, then applies durable effects in
    /// order: snapshot, document write, optional publish. Any error
    /// before the document write leaves the document untouched.
    pub fn update(&self, options: &UpdateOptions) -> Result<UpdateReport> {
        let domains = self.load_domains()?;
        let feed = self.load_feed()?;
        let document = self.read_document()?;
        let document_path = self.config.document_path();

        tracing::debug!("feed updated {}, {} entries", feed.last_update, feed.entries.len());

        let outcome = patch_document(&document, &feed.entries, &domains, &self.config.patch)?;

        let mut report = UpdateReport::default();

        if options.dry_run {
            report = report
                .with_action(format!(
                    "[dry-run] Would back up {document_path} to {}",
                    self.config.backup_dir()
                ))
                .with_action(format!(
                    "[dry-run] Would update {} cards in {document_path}",
                    feed.entries.len()
                ));
            if !options.skip_publish {
                report = report.with_action(format!(
                    "[dry-run] Would publish {document_path} to {}",
                    self.config.publish.destination
                ));
            }
            report.diff = Some(region_diff(&outcome));
            return Ok(report);
        }

        let backup =
            BackupManager::new(self.config.backup_dir()).snapshot(&document_path)?;
        report = report.with_action(format!("Backed up {document_path} to {backup}"));
        report.backup = Some(backup);

        io::write_text(&document_path, &outcome.document)?;
        report = report.with_action(format!(
            "Updated {} cards in {document_path}",
            feed.entries.len()
        ));

        if options.skip_publish {
            report = report.with_action("Publish skipped".to_string());
        } else {
            match Publisher::new(&self.config.publish).publish(&document_path) {
                PublishOutcome::Published => {
                    report = report.with_action(format!(
                        "Published {document_path} to {}",
                        self.config.publish.destination
                    ));
                }
                PublishOutcome::ToolUnavailable => {
                    report = report.with_warning(format!(
                        "{} not found, skipping publish",
                        self.config.publish.tool
                    ));
                }
                PublishOutcome::Failed { message } => {
                    report = report.with_warning(format!("Publish failed: {message}"));
                }
            }
        }

        Ok(report)
    }

    /// Inspect the document without mutating anything.
    ///
    /// Structural problems land in `issues` rather than failing, so the
    /// caller can present all of them at once. Only a missing or
    /// unreadable document is an error.
    pub fn check(&self) -> Result<DocumentCheck> {
        let document = self.read_document()?;
        let patch = &self.config.patch;

        let mut issues = Vec::new();

        if document.len() < patch.min_document_len {
            issues.push(format!(
                "document is {} bytes, below the {}-byte floor",
                document.len(),
                patch.min_document_len
            ));
        }

        let anchor_count = count_occurrences(&document, &patch.anchor);
        match anchor_count {
            1 => {
                if let Err(e) =
                    site_region::locate_region(&document, &patch.anchor, &patch.tag_pair())
                {
                    issues.push(e.to_string());
                }
            }
            0 => issues.push(format!("anchor marker not found: {}", patch.anchor)),
            n => issues.push(format!("anchor marker occurs {n} times, expected exactly one")),
        }

        let status = if issues.is_empty() {
            CheckStatus::Healthy
        } else {
            CheckStatus::Broken
        };

        Ok(DocumentCheck {
            status,
            document_len: document.len(),
            anchor_count,
            issues,
        })
    }
}

/// Unified diff between the old and new card regions.
fn region_diff(outcome: &PatchOutcome) -> String {
    TextDiff::from_lines(&outcome.old_region, &outcome.new_region)
        .unified_diff()
        .header("current", "updated")
        .to_string()
}
