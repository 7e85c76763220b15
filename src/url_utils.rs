//! URL Utility Functions
//!
//! Resolution of relative links against the page URL and host extraction for
//! the `domain`/`favicon` metadata.

use url::Url;

/// Schemes and prefixes that are never rewritten.
const UNRESOLVABLE_PREFIXES: &[&str] = &["data:", "javascript:", "mailto:", "tel:", "#"];

/// Parse an absolute `http(s)` URL with a host.
#[must_use]
pub fn parse_absolute(url_str: &str) -> Option<Url> {
    let url = Url::parse(url_str.trim()).ok()?;
    let is_web = matches!(url.scheme(), "http" | "https");
    (is_web && url.host_str().is_some()).then_some(url)
}

/// Resolve `href` against `base`.
///
/// Absolute URLs, fragments and non-navigational schemes (`data:`,
/// `javascript:`, `mailto:`, `tel:`) come back unchanged, as does anything
/// that fails to resolve.
#[must_use]
pub fn resolve(href: &str, base: &Url) -> String {
    let href = href.trim();
    if href.is_empty() || UNRESOLVABLE_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return href.to_string();
    }
    if parse_absolute(href).is_some() {
        return href.to_string();
    }
    base.join(href).map_or_else(|_| href.to_string(), |url| url.to_string())
}

/// Host name of `url_str` without a leading `www.`.
#[must_use]
pub fn domain_of(url_str: &str) -> Option<String> {
    let url = parse_absolute(url_str)?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
