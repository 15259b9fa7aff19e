//! Region location: anchor uniqueness plus balanced scanning.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::scanner::{TagPair, count_occurrences, scan_balanced};

/// A located region: the anchor open tag and everything through its
/// matching close tag, as byte offsets into the host document.
///
/// Offsets always satisfy
/// `start < content_start <= close_start < end`, so slicing with any of
/// the ranges below is safe on the document the region was located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Offset of the first byte of the anchor open tag.
    pub start: usize,
    /// Offset just past the anchor open tag, where inner content begins.
    pub content_start: usize,
    /// Offset of the first byte of the matching close tag.
    pub close_start: usize,
    /// Offset just past the matching close tag.
    pub end: usize,
}

impl Region {
    /// Length in bytes of the whole region, tags included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole region as a half-open byte range over the document.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The inner content as a half-open byte range, tags excluded.
    pub fn inner_range(&self) -> Range<usize> {
        self.content_start..self.close_start
    }
}

/// Locate the single region introduced by `anchor`.
///
/// The anchor must occur exactly once in the document; zero occurrences
/// or more than one abort the operation rather than guessing which
/// region was meant. Scanning starts just past the anchor at depth 1
/// and ends at the close token that balances it.
///
/// # Errors
/// - [`Error::AnchorMissing`] when the anchor does not occur.
/// - [`Error::AnchorAmbiguous`] when it occurs more than once.
/// - [`Error::RegionUnbalanced`] when no balancing close token exists.
///
/// # Example
/// ```
/// use site_region::{TagPair, locate_region};
///
/// let doc = r#"<body><div class="grid"><div>a</div></div></body>"#;
/// let region = locate_region(doc, r#"<div class="grid">"#, &TagPair::element("div")).unwrap();
/// assert_eq!(&doc[region.as_range()], r#"<div class="grid"><div>a</div></div>"#);
/// ```
pub fn locate_region(document: &str, anchor: &str, tags: &TagPair) -> Result<Region> {
    let start = match document.find(anchor) {
        Some(offset) => offset,
        None => {
            return Err(Error::AnchorMissing {
                marker: anchor.to_string(),
            });
        }
    };

    let count = count_occurrences(document, anchor);
    if count > 1 {
        return Err(Error::AnchorAmbiguous {
            marker: anchor.to_string(),
            count,
        });
    }

    let content_start = start + anchor.len();
    let end = scan_balanced(document, content_start, tags)?;
    let close_start = end - tags.close().len();

    tracing::debug!(
        "region located at {start}..{end} ({} inner bytes)",
        close_start - content_start
    );

    Ok(Region {
        start,
        content_start,
        close_start,
        end,
    })
}
