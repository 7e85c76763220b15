//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. `dom_query` stores the tree in an
//! arena and hands out `NodeId` handles, so node identity is stable for the
//! lifetime of a `Document` and "removal" is a detach from the parent.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Arena handle of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}

/// Elements whose boundaries separate words even without whitespace in the
/// markup (`<p>a</p><p>b</p>` reads as two words).
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Text of the nodes in `sel`, with a space at every block boundary and
/// whitespace runs collapsed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    block_text(sel.nodes().iter().copied())
}

/// Walk the subtrees iteratively so deep nesting cannot exhaust the stack.
fn block_text<'a>(roots: impl Iterator<Item = NodeRef<'a>>) -> String {
    enum Step<'a> {
        Visit(NodeRef<'a>),
        Break,
    }

    let mut text = String::new();
    for root in roots {
        let mut stack = vec![Step::Visit(root)];
        while let Some(step) = stack.pop() {
            let node = match step {
                Step::Break => {
                    text.push(' ');
                    continue;
                }
                Step::Visit(node) => node,
            };
            if node.is_text() {
                text.push_str(&node.text());
                continue;
            }

            let is_block = node
                .node_name()
                .is_some_and(|name| BLOCK_TAGS.contains(&name.to_ascii_lowercase().as_str()));
            if is_block {
                text.push(' ');
                stack.push(Step::Break);
            }

            let mut children = Vec::new();
            let mut child = node.first_child();
            while let Some(current) = child {
                child = current.next_sibling();
                children.push(current);
            }
            stack.extend(children.into_iter().rev().map(Step::Visit));
        }
        text.push(' ');
    }
    collapse_whitespace(&text)
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-separated words.
#[inline]
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Text content of an HTML fragment, whitespace collapsed.
#[must_use]
pub fn text_of_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let doc = Document::fragment(html);
    block_text(std::iter::once(doc.root()))
}

/// Count the words of the text content of an HTML fragment.
#[must_use]
pub fn count_words_in_html(html: &str) -> usize {
    count_words(&text_of_html(html))
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

// === Tree Manipulation ===

/// Remove elements from tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Clone document
///
/// The copy is produced by re-parsing the serialized tree, so it shares no
/// nodes with `doc` and can be mutated freely.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
