//! Link Density
//!
//! Link density is the share of a subtree's text that sits inside anchors:
//! `anchor_text_chars / total_text_chars`. Navigation blocks and link farms
//! sit close to 1.0, article prose close to 0.0.

use dom_query::Selection;

use crate::dom;

/// Text measurements for a subtree, split into anchor and non-anchor parts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    /// Non-whitespace characters of text.
    pub text_len: usize,
    /// Non-whitespace characters of text inside `<a>` elements.
    pub link_text_len: usize,
    /// Words in the whole subtree.
    pub words: usize,
    /// Words inside `<a>` elements.
    pub link_words: usize,
    /// Commas in the whole subtree.
    pub commas: usize,
    /// Commas inside `<a>` elements.
    pub link_commas: usize,
}

impl TextStats {
    /// Words outside of anchors.
    #[must_use]
    pub fn plain_words(&self) -> usize {
        self.words.saturating_sub(self.link_words)
    }

    /// Commas outside of anchors.
    #[must_use]
    pub fn plain_commas(&self) -> usize {
        self.commas.saturating_sub(self.link_commas)
    }

    /// Anchor text share, in `[0.0, 1.0]`. Empty subtrees have density 0.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        (self.link_text_len.min(self.text_len) as f64) / (self.text_len as f64)
    }
}

/// Measure the text of `element` and of the anchors beneath it.
#[must_use]
pub fn text_stats(element: &Selection) -> TextStats {
    let text = dom::normalized_text(element);

    let mut stats = TextStats {
        text_len: visible_len(&text),
        words: dom::count_words(&text),
        commas: text.matches(',').count(),
        ..TextStats::default()
    };

    // select() only searches descendants
    if dom::tag_name(element).as_deref() == Some("a") {
        stats.link_text_len = stats.text_len;
        stats.link_words = stats.words;
        stats.link_commas = stats.commas;
        return stats;
    }

    for link in element.select("a").iter() {
        let link_text = dom::normalized_text(&link);
        if link_text.is_empty() {
            continue;
        }
        stats.link_text_len += visible_len(&link_text);
        stats.link_words += dom::count_words(&link_text);
        stats.link_commas += link_text.matches(',').count();
    }

    stats
}

fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Link density of `element`.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    text_stats(element).link_density()
}
