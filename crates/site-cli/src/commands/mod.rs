//! Command implementations for site-cli

pub mod blogs;
pub mod check;
pub mod domain;
pub mod update;

pub use blogs::run_collect_blogs;
pub use check::run_check;
pub use domain::{run_display_name, run_enabled};
pub use update::{PathOverrides, run_update};

use site_core::SiteConfig;
use site_fs::NormalizedPath;

use crate::error::{CliError, Result};

/// Load settings from an explicit file, or from `site.toml` when present.
///
/// An explicit path that does not exist is a user error; the implicit
/// default silently falls back to built-in settings.
pub fn load_site_config(explicit: Option<&str>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => {
            let path = NormalizedPath::new(path);
            if !path.exists() {
                return Err(CliError::user(format!("settings file not found: {path}")));
            }
            Ok(SiteConfig::load(&path)?)
        }
        None => Ok(SiteConfig::load_or_default(&NormalizedPath::new(
            SiteConfig::DEFAULT_FILE,
        ))?),
    }
}
