//! Document patching: validate, locate, render, splice.

use site_region::{Region, locate_region};

use crate::config::PatchConfig;
use crate::error::{Error, Result};
use crate::model::{DomainsConfig, RankingEntry};
use crate::render::render_cards;

/// Result of a successful in-memory patch.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// The full patched document.
    pub document: String,
    /// The card region as located in the input document.
    pub region: Region,
    /// Region text before the patch, tags included.
    pub old_region: String,
    /// Region text after the patch, tags included.
    pub new_region: String,
}

/// Apply the card update to `document`, entirely in memory.
///
/// 1. Documents shorter than the configured floor are rejected as
///    corrupt rather than patched.
/// 2. The anchor must occur exactly once; the region is then bounded by
///    balanced-tag scanning. Anything else aborts, there is no repair
///    heuristic.
/// 3. Cards are rendered in feed order and joined with one blank line.
/// 4. The region's inner content is replaced. The anchor, the close
///    tag, and the indentation that preceded the close tag all survive,
///    so the result parses the same way on the next run.
/// 5. A result byte-identical to the input reports
///    [`Error::NoOpDetected`] instead of pretending to have changed
///    something.
pub fn patch_document(
    document: &str,
    entries: &[RankingEntry],
    domains: &DomainsConfig,
    patch: &PatchConfig,
) -> Result<PatchOutcome> {
    if document.len() < patch.min_document_len {
        return Err(Error::SizeAnomaly {
            len: document.len(),
            floor: patch.min_document_len,
        });
    }

    let tags = patch.tag_pair();
    let region = locate_region(document, &patch.anchor, &tags)?;

    let cards = render_cards(entries, domains);
    let indent = closing_indent(&document[region.inner_range()]);

    let mut new_region = String::with_capacity(
        patch.anchor.len() + cards.len() + indent.len() + tags.close().len() + 2,
    );
    new_region.push_str(&patch.anchor);
    new_region.push('\n');
    new_region.push_str(&cards);
    new_region.push('\n');
    new_region.push_str(indent);
    new_region.push_str(tags.close());

    let mut patched = String::with_capacity(document.len() + new_region.len());
    patched.push_str(&document[..region.start]);
    patched.push_str(&new_region);
    patched.push_str(&document[region.end..]);

    if patched == document {
        return Err(Error::NoOpDetected);
    }

    Ok(PatchOutcome {
        document: patched,
        old_region: document[region.as_range()].to_string(),
        new_region,
        region,
    })
}

/// The run of spaces and tabs immediately preceding the close tag.
fn closing_indent(inner: &str) -> &str {
    let trimmed_len = inner.trim_end_matches([' ', '\t']).len();
    &inner[trimmed_len..]
}
