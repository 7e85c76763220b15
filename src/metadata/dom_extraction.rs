//! DOM-based Metadata Fallbacks
//!
//! Values read from the markup itself when meta tags and structured data are
//! silent: `<title>`, the first `<h1>`, `<link>` relations, author bylines and
//! `<time datetime>`.

use dom_query::Document;

use crate::dom;

/// Longest byline text accepted as an author name.
const MAX_AUTHOR_LEN: usize = 100;

const AUTHOR_SELECTORS: &[&str] = &[
    r#"[itemprop="author"]"#,
    r#"[rel="author"]"#,
    ".author",
    ".byline",
];

/// Text of `<title>`.
#[must_use]
pub fn title_element(doc: &Document) -> Option<String> {
    non_empty(dom::normalized_text(&doc.select("head title")))
        .or_else(|| non_empty(dom::normalized_text(&doc.select("title").first())))
}

/// Text of the first `<h1>`.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    non_empty(dom::normalized_text(&doc.select("h1").first()))
}

/// `href` of `<link rel="canonical">`.
#[must_use]
pub fn canonical_url(doc: &Document) -> Option<String> {
    link_href(doc, r#"link[rel="canonical"]"#)
}

/// `href` of the first icon link (`rel="icon"`, `rel="shortcut icon"`).
#[must_use]
pub fn favicon_href(doc: &Document) -> Option<String> {
    link_href(doc, r#"link[rel~="icon"]"#)
}

/// `datetime` of the first `<time>` element that has one.
#[must_use]
pub fn time_datetime(doc: &Document) -> Option<String> {
    doc.select("time[datetime]")
        .iter()
        .find_map(|time| dom::get_attribute(&time, "datetime").and_then(non_empty))
}

/// Author name from bylines and author markup.
#[must_use]
pub fn byline_author(doc: &Document) -> Option<String> {
    for selector in AUTHOR_SELECTORS {
        for element in doc.select(selector).iter() {
            let name_prop = element.select(r#"[itemprop="name"]"#);
            let text = if name_prop.exists() {
                dom::normalized_text(&name_prop.first())
            } else {
                dom::get_attribute(&element, "content")
                    .map(|c| dom::collapse_whitespace(&c))
                    .unwrap_or_else(|| dom::normalized_text(&element))
            };
            if let Some(author) = clean_byline(&text) {
                return Some(author);
            }
        }
    }
    None
}

fn clean_byline(text: &str) -> Option<String> {
    let text = text.trim();
    let text = ["By ", "by ", "BY "]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text)
        .trim();
    if text.is_empty() || text.chars().count() > MAX_AUTHOR_LEN {
        return None;
    }
    Some(text.to_string())
}

fn link_href(doc: &Document, selector: &str) -> Option<String> {
    doc.select(selector)
        .iter()
        .find_map(|link| dom::get_attribute(&link, "href").and_then(non_empty))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
