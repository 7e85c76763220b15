//! Metadata extraction module.
//!
//! Builds the [`Metadata`] of a page from three kinds of sources, tried in a
//! fixed order per field:
//!
//! 1. HTML meta tags (Open Graph, Twitter cards, plain `name=` tags)
//! 2. Schema.org JSON-LD items
//! 3. The markup itself (`<title>`, `<h1>`, `<link>`, bylines, `<time>`)
//!
//! All sources are read from the original document, before any clutter is
//! removed.

pub mod dom_extraction;
pub mod meta_tags;
pub mod schema_org;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dom_query::Document;
use serde_json::Value;
use url::Url;

use crate::dom;
use crate::patterns::TITLE_SEPARATOR;
use crate::result::{Metadata, MetaTagItem};
use crate::url_utils;

pub use meta_tags::{collect_meta_tags, first_meta_content, meta_content};
pub use schema_org::extract_schema_org_data;

use schema_org::{find_property, find_typed, image_url, value_text};

/// Extract page metadata.
///
/// `schema_org_data` and `meta_tags` are the already-collected structured
/// data and meta tags of `doc`; `url` is the page URL when known.
#[must_use]
pub fn extract_metadata(
    doc: &Document,
    schema_org_data: &Value,
    meta_tags: &[MetaTagItem],
    url: Option<&str>,
) -> Metadata {
    let site = extract_site(schema_org_data, meta_tags);

    let domain = url
        .and_then(url_utils::domain_of)
        .or_else(|| meta_content(meta_tags, "og:url").and_then(url_utils::domain_of))
        .or_else(|| dom_extraction::canonical_url(doc).and_then(|c| url_utils::domain_of(&c)))
        .unwrap_or_default();

    let base = url
        .and_then(url_utils::parse_absolute)
        .or_else(|| (!domain.is_empty()).then(|| format!("https://{domain}/")).and_then(|u| Url::parse(&u).ok()));

    let favicon = dom_extraction::favicon_href(doc)
        .map(|href| resolve_with(&href, base.as_ref()))
        .or_else(|| (!domain.is_empty()).then(|| format!("https://{domain}/favicon.ico")))
        .unwrap_or_default();

    let image = first_meta_content(meta_tags, &["og:image", "og:image:url", "twitter:image", "twitter:image:src"])
        .or_else(|| find_property(schema_org_data, "image").and_then(image_url))
        .map(|src| resolve_with(&src, base.as_ref()))
        .unwrap_or_default();

    let title = first_meta_content(meta_tags, &["og:title", "twitter:title"])
        .or_else(|| find_property(schema_org_data, "headline").and_then(value_text))
        .or_else(|| dom_extraction::title_element(doc))
        .or_else(|| dom_extraction::first_heading(doc))
        .map(|title| clean_title(&title, &site))
        .unwrap_or_default();

    let description = first_meta_content(meta_tags, &["description", "og:description", "twitter:description"])
        .or_else(|| find_property(schema_org_data, "description").and_then(value_text))
        .map(|d| dom::collapse_whitespace(&d))
        .unwrap_or_default();

    let published = find_property(schema_org_data, "datePublished")
        .and_then(value_text)
        .or_else(|| {
            first_meta_content(
                meta_tags,
                &[
                    "article:published_time",
                    "og:article:published_time",
                    "date",
                    "pubdate",
                    "publish_date",
                    "dc.date",
                    "dcterms.created",
                ],
            )
        })
        .or_else(|| dom_extraction::time_datetime(doc))
        .map(|date| normalize_date(&date))
        .unwrap_or_default();

    let author = first_meta_content(meta_tags, &["author", "parsely-author", "dc.creator"])
        .or_else(|| find_property(schema_org_data, "author").and_then(value_text))
        .or_else(|| dom_extraction::byline_author(doc))
        .unwrap_or_default();

    Metadata {
        title,
        description,
        domain,
        favicon,
        image,
        published,
        author,
        site,
        schema_org_data: schema_org_data.clone(),
    }
}

fn extract_site(schema_org_data: &Value, meta_tags: &[MetaTagItem]) -> String {
    find_property(schema_org_data, "publisher")
        .and_then(value_text)
        .or_else(|| find_typed(schema_org_data, "WebSite").and_then(|site| site.get("name")).and_then(value_text))
        .or_else(|| first_meta_content(meta_tags, &["og:site_name", "application-name"]))
        .unwrap_or_default()
}

fn resolve_with(href: &str, base: Option<&Url>) -> String {
    base.map_or_else(|| href.trim().to_string(), |base| url_utils::resolve(href, base))
}

/// Remove a leading or trailing site name (`"Title | Site"`, `"Site - Title"`).
#[must_use]
pub fn clean_title(title: &str, site: &str) -> String {
    let title = dom::collapse_whitespace(title);
    let site = site.trim().to_lowercase();
    if site.is_empty() {
        return title;
    }

    if let Some(sep) = TITLE_SEPARATOR.find_iter(&title).last() {
        let (head, tail) = (&title[..sep.start()], &title[sep.end()..]);
        if tail.trim().to_lowercase() == site && !head.trim().is_empty() {
            return head.trim().to_string();
        }
    }
    if let Some(sep) = TITLE_SEPARATOR.find(&title) {
        let (head, tail) = (&title[..sep.start()], &title[sep.end()..]);
        if head.trim().to_lowercase() == site && !tail.trim().is_empty() {
            return tail.trim().to_string();
        }
    }
    title
}

/// Normalize a date to RFC 3339. Unparseable values are kept verbatim.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.to_rfc3339();
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return date.to_rfc3339();
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, format) {
            return date.and_utc().to_rfc3339();
        }
    }
    if let Some(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return date.and_utc().to_rfc3339();
    }
    raw.to_string()
}

/// Decode HTML character references (`&amp;`, `&#39;`, `&eacute;`).
///
/// The text is parsed as the content of a `<textarea>`, where references are
/// decoded but tags are not.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') || text.to_ascii_lowercase().contains("</textarea") {
        return text.to_string();
    }
    let doc = Document::from(format!("<textarea>{text}</textarea>"));
    doc.select("textarea").text().to_string()
}
