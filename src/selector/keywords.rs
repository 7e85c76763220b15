//! Keyword lists for the content scorer.
//!
//! Keywords are matched as substrings of the lower-cased class, id, role and
//! tag name of an element. Each keyword counts at most once per element.

/// Tokens suggesting the element holds primary content.
pub static CONTENT_INDICATORS: &[&str] = &[
    "article",
    "content",
    "entry",
    "main",
    "post",
    "story",
    "body",
    "text",
    "blog",
    "prose",
    "markdown",
];

/// Tokens suggesting the element is navigation or page chrome.
pub static NAVIGATION_INDICATORS: &[&str] = &[
    "nav",
    "menu",
    "sidebar",
    "footer",
    "header",
    "breadcrumb",
    "comment",
    "share",
    "social",
    "related",
    "sponsor",
    "advert",
    "promo",
    "widget",
    "banner",
    "cookie",
    "newsletter",
    "subscribe",
    "login",
    "pagination",
    "tags",
];

/// Count how many keywords from `list` occur in `haystack`.
#[must_use]
pub fn count_hits(haystack: &str, list: &[&str]) -> usize {
    list.iter().filter(|keyword| haystack.contains(*keyword)).count()
}
