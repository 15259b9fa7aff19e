//! Domain config queries, shaped for consumption by shell scripts.
//!
//! Output is a single bare line with no colour so `$(...)` capture
//! stays clean. A missing or unreadable domains file degrades to the
//! fallback answers instead of failing the process.

use site_core::DomainsConfig;
use site_fs::{ConfigStore, NormalizedPath};

use crate::commands::load_site_config;
use crate::error::Result;

/// Read the domains config leniently.
fn load_domains_lenient(config_path: Option<&str>) -> Result<DomainsConfig> {
    let config = load_site_config(config_path)?;
    let path: NormalizedPath = config.domains_path();
    if !path.exists() {
        return Ok(DomainsConfig::default());
    }
    match ConfigStore::new().load(&path) {
        Ok(domains) => Ok(domains),
        Err(e) => {
            eprintln!("Error reading config: {e}");
            Ok(DomainsConfig::default())
        }
    }
}

/// Run the domain display-name query
pub fn run_display_name(config_path: Option<&str>, domain: &str) -> Result<()> {
    let domains = load_domains_lenient(config_path)?;
    println!("{}", domains.display_label(domain));
    Ok(())
}

/// Run the domain enabled query
pub fn run_enabled(config_path: Option<&str>, domain: &str) -> Result<()> {
    let domains = load_domains_lenient(config_path)?;
    println!("{}", if domains.is_enabled(domain) { "true" } else { "false" });
    Ok(())
}
