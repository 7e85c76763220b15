//! Content normalization.
//!
//! Final cleanup of the located content root before serialization: drops
//! leftover non-content markup, strips presentational attributes, removes a
//! leading heading that repeats the page title and prunes empty wrappers.

use dom_query::Selection;

use crate::dom;
use crate::options::Options;
use crate::result::Metadata;

/// Markup removed wherever it survives inside the content root.
const NON_CONTENT_TAGS: &str =
    "script, style, noscript, template, iframe, button, input, select, textarea, option, label";

/// Attributes kept on content elements. Everything else is presentational.
const ALLOWED_ATTRIBUTES: &[&str] = &[
    "href", "src", "srcset", "alt", "title", "colspan", "rowspan", "datetime", "lang", "dir",
];

/// Wrappers removed when they hold neither text nor media.
const EMPTY_TAGS_TO_REMOVE: &str = "article, b, blockquote, dd, div, dt, em, h1, h2, h3, h4, h5, h6, \
     i, li, main, ol, p, q, section, span, strong, ul";

/// Elements that give an otherwise textless wrapper a reason to exist.
const MEDIA_TAGS: &str = "img, picture, video, audio, svg, canvas, math, table, hr, br, iframe";

/// Normalize the subtree rooted at `root` in place.
pub fn normalize_content(root: &Selection, metadata: &Metadata, options: &Options) {
    let stripped = root.select(NON_CONTENT_TAGS);
    let non_content = stripped.length();
    stripped.remove();

    let heading_removed = remove_title_heading(root, &metadata.title);
    let empty_removed = remove_empty_elements(root);
    strip_attributes(root);

    if options.debug {
        tracing::debug!(
            non_content,
            heading_removed,
            empty_removed,
            "normalized content"
        );
    }
}

/// Remove the first `h1`/`h2` when it repeats the page title.
fn remove_title_heading(root: &Selection, title: &str) -> bool {
    let title = dom::collapse_whitespace(title);
    if title.is_empty() {
        return false;
    }

    let Some(first) = root.select("h1, h2").iter().next() else {
        return false;
    };
    if dom::normalized_text(&first).to_lowercase() == title.to_lowercase() {
        dom::remove(&first);
        return true;
    }
    false
}

/// Remove empty wrappers, innermost first so that nested empties collapse
/// in one pass. The root itself is kept.
fn remove_empty_elements(root: &Selection) -> usize {
    let root_id = dom::node_id(root);
    let candidates = root.select(EMPTY_TAGS_TO_REMOVE).nodes().to_vec();

    let mut removed = 0;
    for node in candidates.into_iter().rev() {
        if Some(node.id) == root_id {
            continue;
        }
        let element = Selection::from(node);
        if dom::text_content(&element).trim().is_empty() && !element.select(MEDIA_TAGS).exists() {
            dom::remove(&element);
            removed += 1;
        }
    }
    removed
}

/// Drop every attribute outside of [`ALLOWED_ATTRIBUTES`], root included.
fn strip_attributes(root: &Selection) {
    let mut elements: Vec<Selection> = vec![root.clone()];
    elements.extend(root.select("*").iter());

    for element in &elements {
        for (name, _) in dom::get_all_attributes(element) {
            if !ALLOWED_ATTRIBUTES.contains(&name.as_str()) {
                dom::remove_attribute(element, &name);
            }
        }
    }
}
