//! HTML Processing
//!
//! Selector-driven clutter removal and optional media removal.
//!
//! Clutter removal runs in two phases that share one removal set:
//!
//! 1. **Exact**: every node matching the exact-selector group.
//! 2. **Partial**: every node whose inspected attributes, joined with spaces
//!    and lower-cased, match the combined partial pattern. One regex test per
//!    node.
//!
//! Nodes are only detached once both phases have finished, so phase B sees
//! the same tree as phase A.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef, Selection};

use crate::dom::{self, Document};
use crate::error::Result;
use crate::options::Options;
use crate::patterns::PARTIAL_SELECTOR_PATTERN;
use crate::selector::{self, exact::EXACT_SELECTORS, partial::TEST_ATTRIBUTES};

/// Elements that are never entered into the removal set.
const PROTECTED_TAGS: &[&str] = &["html", "head", "body"];

/// Minimum caption length (chars) that keeps an otherwise image-only figure.
const MIN_FIGCAPTION_LEN: usize = 20;

/// Nodes marked for deletion, in document order, without duplicates.
#[derive(Default)]
struct RemovalSet<'a> {
    seen: HashSet<NodeId>,
    nodes: Vec<NodeRef<'a>>,
}

impl<'a> RemovalSet<'a> {
    fn contains(&self, id: &NodeId) -> bool {
        self.seen.contains(id)
    }

    fn insert(&mut self, node: NodeRef<'a>) -> bool {
        if is_protected(&node) || !self.seen.insert(node.id) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn detach_all(self) {
        for node in self.nodes {
            dom::remove(&Selection::from(node));
        }
    }
}

fn is_protected(node: &NodeRef) -> bool {
    node.node_name()
        .is_some_and(|name| PROTECTED_TAGS.contains(&name.to_ascii_lowercase().as_str()))
}

/// Remove boilerplate from `doc` using the exact and partial selector phases.
///
/// Either phase is skipped when its `Options` toggle is off. Returns the
/// number of detached subtrees.
pub fn remove_clutter(doc: &Document, options: &Options) -> Result<usize> {
    let mut removal = RemovalSet::default();

    if options.remove_exact_selectors {
        let matcher = selector::compile_group(EXACT_SELECTORS)?;
        let before = removal.len();
        for node in doc.select_matcher(&matcher).nodes() {
            removal.insert(*node);
        }
        if options.debug {
            tracing::debug!(matched = removal.len() - before, "exact selector phase");
        }
    }

    if options.remove_partial_selectors {
        let attribute_selectors: Vec<String> =
            TEST_ATTRIBUTES.iter().map(|attr| format!("[{attr}]")).collect();
        let attribute_refs: Vec<&str> = attribute_selectors.iter().map(String::as_str).collect();
        let matcher = selector::compile_group(&attribute_refs)?;

        let before = removal.len();
        for node in doc.select_matcher(&matcher).nodes() {
            if removal.contains(&node.id) {
                continue;
            }
            let sel = Selection::from(*node);
            let haystack = inspected_attributes(&sel);
            if !haystack.is_empty() && PARTIAL_SELECTOR_PATTERN.is_match(&haystack) {
                if options.debug {
                    tracing::debug!(attributes = %haystack, "partial selector match");
                }
                removal.insert(*node);
            }
        }
        if options.debug {
            tracing::debug!(matched = removal.len() - before, "partial selector phase");
        }
    }

    let removed = removal.len();
    removal.detach_all();
    Ok(removed)
}

/// Values of the inspected attributes joined by spaces, lower-cased.
fn inspected_attributes(sel: &Selection) -> String {
    TEST_ATTRIBUTES
        .iter()
        .filter_map(|attr| dom::get_attribute(sel, attr))
        .filter(|value| !value.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove images, pictures, videos and figures that carry nothing else of
/// value.
///
/// A figure survives when it holds a table, code, math markup, or a caption
/// longer than 20 characters; its media children are still removed.
pub fn remove_images(doc: &Document, options: &Options) -> usize {
    let mut removed = 0;

    for figure in doc.select("figure").iter() {
        if !figure_has_value(&figure) {
            dom::remove(&figure);
            removed += 1;
        }
    }

    let media = doc.select("img, picture, video, source");
    removed += media.length();
    media.remove();

    if options.debug {
        tracing::debug!(removed, "image removal");
    }
    removed
}

fn figure_has_value(figure: &Selection) -> bool {
    if figure.select("table, pre, code, math, .MathJax, .katex").exists() {
        return true;
    }
    figure
        .select("figcaption")
        .iter()
        .any(|caption| dom::normalized_text(&caption).chars().count() > MIN_FIGCAPTION_LEN)
}
