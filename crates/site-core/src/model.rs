//! Feed and domain configuration models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ranking feed produced by the traffic statistics job.
///
/// The on-disk key for the entry list is `top7` for compatibility with
/// the producer, but any number of entries is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingFeed {
    /// When the producer last refreshed the ranking.
    pub last_update: String,
    #[serde(rename = "top7")]
    pub entries: Vec<RankingEntry>,
}

/// One ranked site in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub domain: String,
    pub short_name: String,
    pub display_name: String,
    pub url: String,
    pub visits_7d: u64,
}

/// Presentation config for the domains that may appear in the feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainsConfig {
    #[serde(default)]
    pub domains: HashMap<String, DomainEntry>,
}

/// Card presentation for a single domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DomainsConfig {
    /// Look up the presentation entry for a domain.
    ///
    /// Disabled entries behave exactly like missing ones, so callers
    /// fall back to the generic card content for them.
    pub fn lookup(&self, domain: &str) -> Option<&DomainEntry> {
        self.domains.get(domain).filter(|entry| entry.enabled)
    }

    /// Look up a domain entry regardless of its enabled flag.
    pub fn entry(&self, domain: &str) -> Option<&DomainEntry> {
        self.domains.get(domain)
    }

    /// Shell-facing label for a domain.
    ///
    /// Enabled entries answer with their display name, disabled ones
    /// with the literal `DISABLED`, and everything else with a wrench
    /// and the domain's first label. Entries without a display name use
    /// the fallback too.
    pub fn display_label(&self, domain: &str) -> String {
        match self.entry(domain) {
            Some(entry) if entry.enabled => entry
                .display_name
                .clone()
                .unwrap_or_else(|| fallback_label(domain)),
            Some(_) => "DISABLED".to_string(),
            None => fallback_label(domain),
        }
    }

    /// Whether a domain may appear on the homepage. Unknown domains
    /// count as enabled.
    pub fn is_enabled(&self, domain: &str) -> bool {
        self.entry(domain).is_none_or(|entry| entry.enabled)
    }
}

fn fallback_label(domain: &str) -> String {
    let label = domain.split('.').next().unwrap_or(domain);
    format!("🔧 {label}")
}
