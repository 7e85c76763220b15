//! Selector Catalogue
//!
//! Static data that drives clutter removal and content location:
//!
//! - [`exact`]: CSS selectors for known boilerplate (ads, navigation, share
//!   widgets, cookie banners). Every match is removed.
//! - [`partial`]: regex fragments tested against the concatenated
//!   class/id/test attributes of a node, plus the attribute set to inspect.
//! - [`entry`]: ranked entry-point selectors, block elements scanned by the
//!   fallback, and container types considered by score-driven removal.
//! - [`keywords`]: content and navigation indicators used by the scorer.

use dom_query::Matcher;

use crate::error::{Error, Result};

pub mod entry;
pub mod exact;
pub mod keywords;
pub mod partial;

/// Compile a list of CSS selectors into one matcher (a selector group).
///
/// Matching a group visits every node once and yields matches in document
/// order, which is cheaper than one query per selector.
pub fn compile_group(selectors: &[&str]) -> Result<Matcher> {
    let group = selectors.join(", ");
    Matcher::new(&group).map_err(|e| Error::InvalidSelector(format!("{group}: {e:?}")))
}

/// Compile a single CSS selector.
pub fn compile(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|e| Error::InvalidSelector(format!("{selector}: {e:?}")))
}
