//! Markdown serialization.
//!
//! The cleaned content HTML is turned into Markdown with `htmd`. Relative
//! `href`/`src` values are first resolved against the page URL so links in
//! the output stay usable outside the page, and runs of blank lines are
//! collapsed afterwards.

use dom_query::Document;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::MULTIPLE_NEWLINES;
use crate::url_utils;

/// Tags whose content never reaches the Markdown output.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

/// Convert content HTML to Markdown.
///
/// # Examples
///
/// ```
/// use rs_declutter::markdown::to_markdown;
///
/// let md = to_markdown(r#"<p>Read <a href="/docs">the docs</a>.</p>"#, Some("https://example.com/a/b")).unwrap();
/// assert_eq!(md, "Read [the docs](https://example.com/docs).");
/// ```
pub fn to_markdown(html: &str, base_url: Option<&str>) -> Result<String> {
    let html = match base_url.and_then(url_utils::parse_absolute) {
        Some(base) => resolve_links(html, &base),
        None => html.to_string(),
    };

    let converter = htmd::HtmlToMarkdown::builder()
        .skip_tags(SKIPPED_TAGS.to_vec())
        .build();
    let markdown = converter
        .convert(&html)
        .map_err(|e| Error::Markdown(e.to_string()))?;

    Ok(MULTIPLE_NEWLINES.replace_all(&markdown, "\n\n").trim().to_string())
}

/// Rewrite relative `href` and `src` attributes to absolute URLs.
fn resolve_links(html: &str, base: &Url) -> String {
    let doc = Document::from(html);
    let body = doc.select("body");

    for element in body.select("[href], [src]").iter() {
        for attr in ["href", "src"] {
            if let Some(value) = element.attr(attr) {
                let resolved = url_utils::resolve(&value, base);
                element.set_attr(attr, &resolved);
            }
        }
    }

    body.inner_html().to_string()
}
