//! The check command: document diagnostics without mutation.

use colored::Colorize;

use site_core::{CheckStatus, UpdateEngine};

use crate::commands::load_site_config;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Prints every structural problem found. A broken document fails the
/// process so cron and CI can alert on the exit code.
pub fn run_check(config_path: Option<&str>, document: Option<&str>) -> Result<()> {
    println!("{} Checking homepage document...", "=>".blue().bold());

    let mut config = load_site_config(config_path)?;
    if let Some(document) = document {
        config.paths.document = document.to_string();
    }
    let engine = UpdateEngine::new(config);

    let check = engine.check()?;
    println!(
        "   {} bytes, {} anchor occurrence(s)",
        check.document_len, check.anchor_count
    );

    match check.status {
        CheckStatus::Healthy => {
            println!("{} Document is healthy.", "OK".green().bold());
            Ok(())
        }
        CheckStatus::Broken => {
            println!("{} Document has problems:", "BROKEN".red().bold());
            for issue in &check.issues {
                println!("   {} {}", "!".red(), issue);
            }
            Err(CliError::user("Document check failed"))
        }
    }
}
