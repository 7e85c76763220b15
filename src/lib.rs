//! # rs-declutter
//!
//! Heuristic main-content extraction for HTML documents.
//!
//! This library takes a full web page, strips navigation, advertisements,
//! sidebars and other clutter, locates the main content, and returns it as
//! clean HTML and Markdown together with page metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_declutter::{parse, Options};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav><a href="/">Home</a></nav>
//! <article><p>Main content here.</p></article></body></html>"#;
//!
//! let response = parse(html, &Options::default());
//! println!("Title: {}", response.title);
//! println!("Content: {}", response.content);
//! assert!(response.content.contains("Main content here."));
//! ```
//!
//! ## Features
//!
//! - **Clutter Removal**: Exact and partial selector matching plus score-driven pruning
//! - **Content Location**: Ranked entry points, block scoring and table layouts
//! - **Metadata Extraction**: Meta tags, schema.org JSON-LD and markup fallbacks
//! - **Site Extractors**: Conversation pages rendered as ordered messages
//! - **Markdown Output**: Links and images resolved against the page URL
//!
//! Parsing never fails: when no main content can be located, or a pipeline
//! stage errors, the raw body is returned instead.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query` selections.
pub mod dom;

/// Selector tables for clutter removal and content entry points.
pub mod selector;

/// Content scoring and score-driven removal.
pub mod scoring;

/// Link density measurement.
pub mod link_density;

/// Selector-driven clutter and image removal.
pub mod html_processing;

/// Main content location and normalization.
pub mod extractor;

/// Site-specific extractors.
pub mod sites;

/// Metadata extraction (schema.org, meta tags, markup fallbacks).
pub mod metadata;

/// HTML to Markdown conversion.
pub mod markdown;

/// URL parsing and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use dom_query::Document;
pub use error::{Error, Result};
pub use options::{Options, ScoringWeights};
pub use result::{ConversationMessage, MetaTagItem, Metadata, Response};

/// Parses an HTML document and extracts its main content.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Configuration options for extraction behavior
///
/// # Returns
///
/// A [`Response`] with the content as Markdown and HTML, the page metadata
/// and timing. Malformed or empty input yields a response with empty fields.
///
/// # Example
///
/// ```rust
/// use rs_declutter::{parse, Options};
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     remove_images: true,
///     ..Options::default()
/// };
/// let response = parse(html, &options);
/// assert_eq!(response.domain, "example.com");
/// assert_eq!(response.word_count, 1);
/// ```
#[must_use]
pub fn parse(html: &str, options: &Options) -> Response {
    let doc = dom::parse(html);
    extract::parse_document(&doc, options)
}

/// Parses an already-built document.
///
/// The document is never mutated; all removal happens on private copies.
///
/// # Example
///
/// ```rust
/// use rs_declutter::{dom, parse_document, Options};
///
/// let doc = dom::parse("<body><aside class='sidebar'>Links</aside><main><p>Body text</p></main></body>");
/// let response = parse_document(&doc, &Options::default());
/// assert!(doc.select("aside").exists());
/// assert!(!response.content.contains("Links"));
/// ```
#[must_use]
pub fn parse_document(doc: &Document, options: &Options) -> Response {
    extract::parse_document(doc, options)
}

/// Parses HTML bytes with automatic encoding detection.
///
/// # Character Encoding
///
/// The function detects encoding from:
/// - A byte order mark
/// - `<meta charset="...">`
/// - `<meta http-equiv="Content-Type" content="...; charset=...">`
/// - Defaults to UTF-8 if no declaration found
///
/// Invalid characters are replaced with � (Unicode replacement character)
/// rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_declutter::{parse_bytes, Options};
///
/// // ISO-8859-1 encoded HTML with charset declaration
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><article><p>Caf\xE9</p></article></body></html>";
/// let response = parse_bytes(html, &Options::default());
/// assert!(response.content.contains("Café"));
/// ```
#[must_use]
pub fn parse_bytes(html: &[u8], options: &Options) -> Response {
    let html_str = encoding::decode_html(html);
    parse(&html_str, options)
}
