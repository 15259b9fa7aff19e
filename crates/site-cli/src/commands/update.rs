//! The update command: the full card refresh pipeline.

use colored::Colorize;

use site_core::render::group_thousands;
use site_core::{Error, SiteConfig, UpdateEngine, UpdateOptions};

use crate::commands::load_site_config;
use crate::error::Result;

/// Path overrides from the command line, applied over the settings file.
#[derive(Debug, Default)]
pub struct PathOverrides {
    pub document: Option<String>,
    pub feed: Option<String>,
    pub domains: Option<String>,
    pub backup_dir: Option<String>,
}

impl PathOverrides {
    fn apply(&self, config: &mut SiteConfig) {
        if let Some(document) = &self.document {
            config.paths.document = document.clone();
        }
        if let Some(feed) = &self.feed {
            config.paths.feed = feed.clone();
        }
        if let Some(domains) = &self.domains {
            config.paths.domains = domains.clone();
        }
        if let Some(backup_dir) = &self.backup_dir {
            config.paths.backup_dir = backup_dir.clone();
        }
    }
}

/// Run the update command
///
/// Prints the current ranking, then lets the engine do the work. A
/// document that already matches the ranking is reported as success
/// with nothing written.
pub fn run_update(
    config_path: Option<&str>,
    overrides: &PathOverrides,
    dry_run: bool,
    skip_publish: bool,
) -> Result<()> {
    println!("{} Updating homepage cards...", "=>".blue().bold());

    let mut config = load_site_config(config_path)?;
    overrides.apply(&mut config);
    let engine = UpdateEngine::new(config);

    let domains = engine.load_domains()?;
    let feed = engine.load_feed()?;
    println!("   Ranking from {}:", feed.last_update.cyan());
    for entry in &feed.entries {
        let title = domains
            .lookup(&entry.domain)
            .map(|info| info.title.as_str())
            .unwrap_or(entry.display_name.as_str());
        println!(
            "   {}. {} - {} visits ({})",
            entry.rank,
            title,
            group_thousands(entry.visits_7d),
            entry.domain.dimmed()
        );
    }

    let report = match engine.update(&UpdateOptions {
        dry_run,
        skip_publish,
    }) {
        Ok(report) => report,
        Err(Error::NoOpDetected) => {
            println!(
                "{} Cards already match the ranking. No changes needed.",
                "OK".green().bold()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    for action in &report.actions {
        println!("   {} {}", "+".green(), action);
    }
    for warning in &report.warnings {
        println!("   {} {}", "!".yellow(), warning);
    }
    if let Some(diff) = &report.diff {
        println!();
        print!("{diff}");
    }

    if dry_run {
        println!("{} Dry run complete. No changes were made.", "OK".green().bold());
    } else {
        println!("{} Homepage update complete.", "OK".green().bold());
    }
    Ok(())
}
