//! Balanced-tag region location for sitekeeper.
//!
//! Finds the managed card region in a homepage document without an HTML
//! parser. The anchor open tag is matched as a raw substring and must
//! occur exactly once; the matching close tag is then found by counting
//! nested open/close tokens:
//!
//! ```text
//! <div class="projects-grid">   <- anchor, depth 1
//!     <a href="...">
//!         <div class="icon">    <- depth 2
//!         </div>                <- back to depth 1
//!     </a>
//! </div>                        <- depth 0, region ends here
//! ```
//!
//! Only the configured tag pair participates in depth tracking. All
//! other markup passes through untouched, so the scan is robust against
//! anchors, links, and inline styles inside the region.

pub mod error;
pub mod locator;
pub mod scanner;

pub use error::{Error, Result};
pub use locator::{Region, locate_region};
pub use scanner::{TagPair, count_occurrences, scan_balanced};
