//! Card rendering: pure feed-plus-config to HTML fragments.

use crate::model::{DomainsConfig, RankingEntry};

/// Description used when a domain has no configured entry.
pub const FALLBACK_DESCRIPTION: &str = "Professional online tools and services";
/// Icon used when a domain has no configured entry.
pub const FALLBACK_ICON: &str = "🔧";
/// Card background used when a domain has no configured entry.
pub const FALLBACK_COLOR: &str = "linear-gradient(45deg, #607D8B, #455A64)";

/// Render the card fragment for one feed entry.
///
/// Indentation matches the homepage markup: the `project-card` anchor
/// sits at twelve spaces with its fields nested at sixteen. The
/// fragment carries no trailing newline; the patcher controls the
/// joins. Unconfigured and disabled domains get the fallback
/// presentation with the feed's display name as the title.
pub fn render_card(entry: &RankingEntry, domains: &DomainsConfig) -> String {
    let (title, description, icon, color) = match domains.lookup(&entry.domain) {
        Some(info) => (
            info.title.as_str(),
            info.description.as_str(),
            info.icon.as_str(),
            info.color.as_str(),
        ),
        None => (
            entry.display_name.as_str(),
            FALLBACK_DESCRIPTION,
            FALLBACK_ICON,
            FALLBACK_COLOR,
        ),
    };
    let visits = group_thousands(entry.visits_7d);

    format!(
        r#"            <a href="{url}" class="project-card">
                <div class="project-icon" style="background: {color};">{icon}</div>
                <div class="project-title">{title}</div>
                <div class="project-desc">{description}</div>
                <div class="project-url">{domain}</div>
                <div class="visit-count" style="font-size: 0.8rem; color: #999; margin-top: 0.5rem;">📊 Past 7 days: {visits} visits</div>
            </a>"#,
        url = entry.url,
        domain = entry.domain,
    )
}

/// Render all cards in feed order, joined by one blank line.
///
/// An empty feed renders to an empty string.
pub fn render_cards(entries: &[RankingEntry], domains: &DomainsConfig) -> String {
    entries
        .iter()
        .map(|entry| render_card(entry, domains))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
