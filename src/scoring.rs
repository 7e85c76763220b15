//! Content scoring.
//!
//! `score_element` judges how much a subtree looks like primary content.
//! The score grows with prose outside of links (words, paragraphs,
//! sentences, commas) and with content-like class/id tokens, and shrinks with
//! link density, image density and navigation-like tokens.
//!
//! Adding genuine paragraph text never lowers a score: non-link counts only
//! grow and link density only falls. Adding link-only text never raises it:
//! non-link counts stay put and link density rises.
//!
//! `score_and_remove` uses the same score to delete link-dense lists and
//! navigation blocks before selector-based clutter removal runs.

use std::collections::HashSet;

use dom_query::{NodeId, Selection};

use crate::dom;
use crate::error::Result;
use crate::link_density::{text_stats, TextStats};
use crate::options::{Options, ScoringWeights};
use crate::patterns::SENTENCE_END;
use crate::selector::entry::{REMOVAL_CANDIDATES, SEMANTIC_CONTAINERS, SEMANTIC_ROLES};
use crate::selector::keywords::{count_hits, CONTENT_INDICATORS, NAVIGATION_INDICATORS};
use crate::selector;

/// A scored candidate for the content root.
#[derive(Debug, Clone)]
pub struct ContentScore<'a> {
    /// The candidate element.
    pub element: Selection<'a>,
    /// Its score.
    pub score: f64,
}

/// Score a subtree.
#[must_use]
pub fn score_element(element: &Selection, weights: &ScoringWeights) -> f64 {
    let stats = text_stats(element);
    score_with_stats(element, &stats, weights)
}

fn score_with_stats(element: &Selection, stats: &TextStats, weights: &ScoringWeights) -> f64 {
    let tag = dom::tag_name(element).unwrap_or_default();

    let plain_words = stats.plain_words() as f64;
    let mut score = plain_words;

    // Paragraph and sentence density; link-only paragraphs do not count
    let mut paragraphs = element.select("p").iter().filter(has_plain_text).count();
    if tag == "p" && stats.plain_words() > 0 {
        paragraphs += 1;
    }
    score += paragraphs as f64 * weights.paragraph;
    score += stats.plain_commas() as f64 * weights.comma;
    score += plain_sentences(element) as f64 * weights.sentence;

    score -= stats.link_density() * weights.link_density_penalty;

    let images = element.select("img").length();
    if images > 0 {
        score -= (images as f64 / plain_words.max(1.0)) * weights.image_density_penalty;
    }

    // Keyword hits on class/id/role/tag tokens
    let role = dom::get_attribute(element, "role").unwrap_or_default().to_lowercase();
    let tokens = format!(
        "{tag} {} {} {role}",
        dom::class_name(element).unwrap_or_default(),
        dom::id(element).unwrap_or_default(),
    )
    .to_lowercase();
    score += count_hits(&tokens, CONTENT_INDICATORS) as f64 * weights.content_keyword;
    score -= count_hits(&tokens, NAVIGATION_INDICATORS) as f64 * weights.navigation_keyword;

    // Structural bonuses
    if SEMANTIC_CONTAINERS.contains(&tag.as_str()) || SEMANTIC_ROLES.contains(&role.as_str()) {
        score += weights.semantic_container;
    }
    let paragraph_children = element
        .children()
        .iter()
        .filter(|child| dom::tag_name(child).as_deref() == Some("p") && has_plain_text(child))
        .count();
    if paragraph_children >= 2 {
        score += weights.paragraph_children;
    }

    score
}

fn has_plain_text(paragraph: &Selection) -> bool {
    text_stats(paragraph).plain_words() > 0
}

/// Sentence terminator runs outside of anchors.
fn plain_sentences(element: &Selection) -> usize {
    let total = SENTENCE_END.find_iter(&element.text()).count();
    if dom::tag_name(element).as_deref() == Some("a") {
        return 0;
    }
    let in_links: usize = element
        .select("a")
        .iter()
        .map(|link| SENTENCE_END.find_iter(&link.text()).count())
        .sum();
    total.saturating_sub(in_links)
}

/// Score each element, keeping document order.
#[must_use]
pub fn score_candidates<'a>(
    elements: impl IntoIterator<Item = Selection<'a>>,
    weights: &ScoringWeights,
) -> Vec<ContentScore<'a>> {
    elements
        .into_iter()
        .map(|element| {
            let score = score_element(&element, weights);
            ContentScore { element, score }
        })
        .collect()
}

/// The highest-scoring candidate; ties go to the earliest candidate.
#[must_use]
pub fn find_best_element<'a, 'b>(candidates: &'b [ContentScore<'a>]) -> Option<&'b ContentScore<'a>> {
    let mut best: Option<&ContentScore<'a>> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Delete link-dense lists and navigation blocks beneath `root`.
///
/// A candidate is removed when its score is below
/// `removal_score_threshold` and its link density is at least
/// `removal_link_density`. Candidates that hold substantial prose or
/// structured content (code, tables, figures, quotes) are kept.
///
/// Returns the number of removed subtrees.
pub fn score_and_remove(root: &Selection, options: &Options) -> Result<usize> {
    let weights = &options.scoring;
    let matcher = selector::compile_group(REMOVAL_CANDIDATES)?;

    let mut marked: HashSet<NodeId> = HashSet::new();
    let mut to_remove: Vec<Selection> = Vec::new();

    for candidate in root.select_matcher(&matcher).iter() {
        let Some(node_id) = dom::node_id(&candidate) else {
            continue;
        };
        if marked.contains(&node_id) || has_marked_ancestor(&candidate, &marked) {
            continue;
        }

        let stats = text_stats(&candidate);
        if is_likely_content(&candidate, &stats) {
            continue;
        }

        let score = score_with_stats(&candidate, &stats, weights);
        let density = stats.link_density();
        if score < weights.removal_score_threshold && density >= weights.removal_link_density {
            if options.debug {
                tracing::debug!(
                    tag = dom::tag_name(&candidate).unwrap_or_default(),
                    class = dom::class_name(&candidate).unwrap_or_default(),
                    score,
                    link_density = density,
                    "removing non-content block"
                );
            }
            marked.insert(node_id);
            to_remove.push(candidate);
        }
    }

    for element in &to_remove {
        dom::remove(element);
    }

    if options.debug {
        tracing::debug!(removed = to_remove.len(), "score-driven removal finished");
    }
    Ok(to_remove.len())
}

fn has_marked_ancestor(element: &Selection, marked: &HashSet<NodeId>) -> bool {
    let mut current = element.nodes().first().and_then(|node| node.parent());
    while let Some(node) = current {
        if marked.contains(&node.id) {
            return true;
        }
        current = node.parent();
    }
    false
}

fn is_likely_content(element: &Selection, stats: &TextStats) -> bool {
    stats.plain_words() >= 50 || element.select("pre, table, figure, blockquote").exists()
}
