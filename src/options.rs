//! Configuration options for content extraction.
//!
//! The `Options` struct controls the clutter-removal pipeline and carries the
//! tuned thresholds used by the scorer and locator. Every value is a plain
//! public field so callers can override just what they need.

use serde::Deserialize;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings. The struct also deserializes from JSON (camelCase
/// keys, missing keys take their defaults).
///
/// # Example
///
/// ```rust
/// use rs_declutter::Options;
///
/// let options = Options {
///     url: Some("https://example.com/post".to_string()),
///     remove_partial_selectors: false,
///     ..Options::default()
/// };
/// assert!(options.remove_exact_selectors);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// URL of the page being parsed.
    ///
    /// Used for the `domain`/`favicon` metadata, for resolving relative links
    /// in the Markdown output, and handed to site extractors.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Emit debug diagnostics through `tracing` at `debug` level.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Remove images, pictures, videos and image-only figures.
    ///
    /// Default: `false`
    pub remove_images: bool,

    /// Remove elements matching the exact selector catalogue (ads, share
    /// widgets, navigation, cookie banners).
    ///
    /// Default: `true`
    pub remove_exact_selectors: bool,

    /// Remove elements whose class/id/test attributes match a partial
    /// boilerplate pattern.
    ///
    /// Default: `true`
    pub remove_partial_selectors: bool,

    /// Word count below which a relaxed second pass (partial removal
    /// disabled) is attempted.
    ///
    /// Default: `200`
    pub min_word_count: usize,

    /// Pixel width above which a `<table>` is treated as a page layout table.
    ///
    /// Default: `400`
    pub table_width_threshold: u32,

    /// Weights used by the content scorer.
    pub scoring: ScoringWeights,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            debug: false,
            remove_images: false,
            remove_exact_selectors: true,
            remove_partial_selectors: true,
            min_word_count: 200,
            table_width_threshold: 400,
            scoring: ScoringWeights::default(),
        }
    }
}

/// Empirically tuned constants for `scoring::score_element` and the
/// score-driven removal pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Added per `<p>` element in the subtree.
    pub paragraph: f64,
    /// Added per comma outside of links.
    pub comma: f64,
    /// Added per sentence terminator run.
    pub sentence: f64,
    /// Multiplied by link density and subtracted.
    pub link_density_penalty: f64,
    /// Multiplied by images-per-word and subtracted.
    pub image_density_penalty: f64,
    /// Added per content indicator found in class/id/tag/role tokens.
    pub content_keyword: f64,
    /// Subtracted per navigation indicator found in class/id/tag/role tokens.
    pub navigation_keyword: f64,
    /// Added for `article`/`main` elements and their ARIA role equivalents.
    pub semantic_container: f64,
    /// Added when the element has at least two direct `<p>` children.
    pub paragraph_children: f64,
    /// Base weight per entry-point rank (earlier selector, larger weight).
    pub entry_point: f64,
    /// Removal candidates scoring below this are deleted when link-dense.
    pub removal_score_threshold: f64,
    /// Minimum link density for score-driven removal.
    pub removal_link_density: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            paragraph: 10.0,
            comma: 1.0,
            sentence: 2.0,
            link_density_penalty: 100.0,
            image_density_penalty: 3.0,
            content_keyword: 25.0,
            navigation_keyword: 25.0,
            semantic_container: 30.0,
            paragraph_children: 20.0,
            entry_point: 40.0,
            removal_score_threshold: 0.0,
            removal_link_density: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert!(!opts.debug);
        assert!(!opts.remove_images);
        assert!(opts.remove_exact_selectors);
        assert!(opts.remove_partial_selectors);
        assert_eq!(opts.min_word_count, 200);
        assert_eq!(opts.table_width_threshold, 400);
        assert!((opts.scoring.entry_point - 40.0).abs() < f64::EPSILON);
        assert!((opts.scoring.removal_link_density - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_partial_json_keeps_defaults() {
        let opts: Options = serde_json::from_str(
            r#"{"url": "https://example.com", "removePartialSelectors": false, "scoring": {"paragraph": 15.0}}"#,
        )
        .unwrap();

        assert_eq!(opts.url.as_deref(), Some("https://example.com"));
        assert!(!opts.remove_partial_selectors);
        assert!(opts.remove_exact_selectors);
        assert_eq!(opts.min_word_count, 200);
        assert!((opts.scoring.paragraph - 15.0).abs() < f64::EPSILON);
        assert!((opts.scoring.comma - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_word_count: 50,
            table_width_threshold: 800,
            ..Options::default()
        };

        assert_eq!(opts.min_word_count, 50);
        assert_eq!(opts.table_width_threshold, 800);
        assert!(opts.remove_exact_selectors);
    }
}
