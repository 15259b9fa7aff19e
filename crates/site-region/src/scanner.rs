//! Balanced-tag scanning over raw markup text.
//!
//! The scanner tracks nesting depth with plain substring searches, so
//! it never needs to parse the surrounding document. Depth starts at 1
//! (the tag the caller has already entered) and the scan ends at the
//! close token that brings it back to 0.

use crate::error::{Error, Result};

/// An open/close token pair describing one level of nesting.
///
/// Tokens are matched as raw substrings. The open token is a prefix
/// form (`<div`), so it matches the element regardless of attributes.
/// Substring matching also means a token inside a comment or a string
/// literal counts; the documents this targets do not contain those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    open: String,
    close: String,
}

impl TagPair {
    /// Create a pair from explicit open and close tokens.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Create the pair for an HTML element name.
    ///
    /// # Example
    /// ```
    /// use site_region::TagPair;
    ///
    /// let tags = TagPair::element("div");
    /// assert_eq!(tags.open(), "<div");
    /// assert_eq!(tags.close(), "</div>");
    /// ```
    pub fn element(name: &str) -> Self {
        Self {
            open: format!("<{name}"),
            close: format!("</{name}>"),
        }
    }

    /// The token that raises nesting depth.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The token that lowers nesting depth.
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// Count non-overlapping occurrences of `needle` in `text`.
///
/// # Example
/// ```
/// use site_region::count_occurrences;
///
/// assert_eq!(count_occurrences("<div><div></div>", "<div"), 2);
/// assert_eq!(count_occurrences("plain text", "<div"), 0);
/// ```
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(offset) = text[pos..].find(needle) {
        count += 1;
        pos += offset + needle.len();
    }
    count
}

/// Scan forward from `from`, tracking nesting depth.
///
/// Depth starts at 1. From the current position the scanner finds the
/// next open token and the next close token; whichever occurs first
/// wins. An open token raises depth, a close token lowers it, and the
/// scan position advances past the consumed token. The scan ends at the
/// close token that brings depth to 0.
///
/// `from` must lie on a char boundary of `text`; offsets past the end
/// are treated as the end.
///
/// # Returns
/// The byte offset immediately after the balancing close token.
///
/// # Errors
/// Returns [`Error::RegionUnbalanced`] when the text runs out before
/// depth returns to 0. Depth never goes below 0; extra close tokens
/// after the balancing one are simply not scanned.
///
/// # Example
/// ```
/// use site_region::{TagPair, scan_balanced};
///
/// let tags = TagPair::element("div");
/// let text = "<a>x</a></div> tail";
/// let end = scan_balanced(text, 0, &tags).unwrap();
/// assert_eq!(&text[..end], "<a>x</a></div>");
/// ```
pub fn scan_balanced(text: &str, from: usize, tags: &TagPair) -> Result<usize> {
    let mut pos = from.min(text.len());
    let mut depth: usize = 1;

    while depth > 0 {
        let rest = &text[pos..];
        let next_close = match rest.find(tags.close()) {
            Some(offset) => pos + offset,
            None => {
                return Err(Error::RegionUnbalanced {
                    open: tags.open().to_string(),
                    depth,
                });
            }
        };
        let next_open = rest.find(tags.open()).map(|offset| pos + offset);

        match next_open {
            Some(open_at) if open_at < next_close => {
                depth += 1;
                pos = open_at + tags.open().len();
            }
            _ => {
                depth -= 1;
                pos = next_close + tags.close().len();
            }
        }
    }

    Ok(pos)
}
