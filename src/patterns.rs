//! Compiled regex patterns used across the pipeline.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by their purpose in the extraction pipeline.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::selector::partial::PARTIAL_SELECTORS;

// =============================================================================
// Clutter Detection Patterns
// =============================================================================

/// All partial boilerplate fragments joined into one case-insensitive pattern.
///
/// Tested once per node against its concatenated inspected attributes.
pub static PARTIAL_SELECTOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", PARTIAL_SELECTORS.join("|")))
        .expect("PARTIAL_SELECTOR_PATTERN regex")
});

/// Matches an inline `width: NNNpx` declaration.
pub static INLINE_PIXEL_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*(\d+)px").expect("INLINE_PIXEL_WIDTH regex")
});

// =============================================================================
// Scoring Patterns
// =============================================================================

/// A run of sentence terminators (`...` counts once).
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("SENTENCE_END regex"));

// =============================================================================
// Metadata Patterns
// =============================================================================

/// Block and line comments inside JSON-LD scripts.
pub static JSON_COMMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)/\*[\s\S]*?\*/|^\s*//.*$").expect("JSON_COMMENTS regex")
});

/// A `<![CDATA[ ... ]]>` wrapper around a JSON-LD payload.
pub static CDATA_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<!\[CDATA\[([\s\S]*?)\]\]>\s*$").expect("CDATA_WRAPPER regex")
});

/// Stray comment delimiters left at either end of a JSON-LD payload.
pub static JSON_COMMENT_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\*/|/\*)\s*|\s*(\*/|/\*)\s*$").expect("JSON_COMMENT_DELIMITERS regex")
});

/// Separator between an article title and a trailing site name.
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[|\-–—·]\s+").expect("TITLE_SEPARATOR regex"));

// =============================================================================
// Encoding Patterns
// =============================================================================

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("CHARSET_META regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));
