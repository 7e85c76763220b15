//! Main content locator.
//!
//! Picks the single element most likely to hold the primary content:
//!
//! 1. Entry-point scan: every match of a ranked entry-point selector is
//!    scored as `(entry_count - rank) * entry_point + score_element`. A node
//!    matched by several selectors keeps its best (earliest) rank.
//! 2. Block scan: when no entry point matched, every block element scoring
//!    above zero competes.
//! 3. Table layout: when `<body>` is the only entry-point candidate and the
//!    page uses a layout table, the best table cell wins instead.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom::{self, Document};
use crate::error::Result;
use crate::options::Options;
use crate::patterns::INLINE_PIXEL_WIDTH;
use crate::scoring::{find_best_element, score_candidates, score_element, ContentScore};
use crate::selector::{self, entry::BLOCK_ELEMENTS, entry::ENTRY_POINT_ELEMENTS};

/// Locate the main content element of `doc`.
///
/// Returns `Ok(None)` when nothing qualifies; callers fall back to the raw
/// body content.
pub fn find_main_content<'a>(doc: &'a Document, options: &Options) -> Result<Option<Selection<'a>>> {
    let candidates = entry_point_candidates(doc, options)?;

    if candidates.is_empty() {
        if options.debug {
            tracing::debug!("no entry point matched, scoring block elements");
        }
        return find_content_by_scoring(doc, options);
    }

    if options.debug {
        for candidate in &candidates {
            tracing::debug!(
                element = %describe(&candidate.element),
                score = candidate.score,
                "content candidate"
            );
        }
    }

    if candidates.len() == 1 && dom::tag_name(&candidates[0].element).as_deref() == Some("body") {
        if let Some(cell) = find_table_based_content(doc, options) {
            if options.debug {
                tracing::debug!(element = %describe(&cell), "using table layout cell");
            }
            return Ok(Some(cell));
        }
    }

    Ok(find_best_element(&candidates).map(|best| best.element.clone()))
}

fn entry_point_candidates<'a>(doc: &'a Document, options: &Options) -> Result<Vec<ContentScore<'a>>> {
    let entry_count = ENTRY_POINT_ELEMENTS.len();
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut candidates = Vec::new();

    for (rank, entry) in ENTRY_POINT_ELEMENTS.iter().enumerate() {
        let matcher = selector::compile(entry)?;
        for node in doc.select_matcher(&matcher).nodes() {
            // Ranks are visited in order, so the first sighting is the best rank
            if !seen.insert(node.id) {
                continue;
            }
            let element = Selection::from(*node);
            let positional = (entry_count - rank) as f64 * options.scoring.entry_point;
            let score = positional + score_element(&element, &options.scoring);
            candidates.push(ContentScore { element, score });
        }
    }

    Ok(candidates)
}

fn find_content_by_scoring<'a>(doc: &'a Document, options: &Options) -> Result<Option<Selection<'a>>> {
    let matcher = selector::compile_group(BLOCK_ELEMENTS)?;
    let blocks: Vec<Selection> = doc.select_matcher(&matcher).iter().collect();

    let candidates: Vec<ContentScore> = score_candidates(blocks, &options.scoring)
        .into_iter()
        .filter(|candidate| candidate.score > 0.0)
        .collect();

    Ok(find_best_element(&candidates).map(|best| best.element.clone()))
}

/// Best-scoring `<td>` when the document uses a table layout.
fn find_table_based_content<'a>(doc: &'a Document, options: &Options) -> Option<Selection<'a>> {
    let threshold = options.table_width_threshold;
    let has_table_layout = doc
        .select("table")
        .iter()
        .any(|table| is_layout_table(&table, threshold));
    if !has_table_layout {
        return None;
    }

    let cells = score_candidates(doc.select("td").iter(), &options.scoring);
    find_best_element(&cells).map(|best| best.element.clone())
}

fn is_layout_table(table: &Selection, threshold: u32) -> bool {
    let width = dom::get_attribute(table, "width")
        .and_then(|w| leading_number(&w))
        .unwrap_or(0);
    if width > threshold {
        return true;
    }

    let inline_width = dom::get_attribute(table, "style")
        .and_then(|style| {
            INLINE_PIXEL_WIDTH
                .captures(&style)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
        })
        .unwrap_or(0);
    if inline_width > threshold {
        return true;
    }

    if dom::get_attribute(table, "align").is_some_and(|a| a.trim().eq_ignore_ascii_case("center")) {
        return true;
    }

    let class = dom::class_name(table).unwrap_or_default().to_lowercase();
    class.contains("content") || class.contains("article")
}

/// Leading decimal digits of an attribute value (`"600px"` -> 600).
fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Short `tag#id.class` label for debug output.
fn describe(element: &Selection) -> String {
    let mut label = dom::tag_name(element).unwrap_or_default();
    if let Some(id) = dom::id(element).filter(|id| !id.is_empty()) {
        label.push('#');
        label.push_str(&id);
    } else if let Some(class) = dom::class_name(element) {
        for token in class.split_whitespace() {
            label.push('.');
            label.push_str(token);
        }
    }
    label
}
