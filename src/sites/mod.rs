//! Site-specific extraction strategies.
//!
//! Some pages have a layout the generic heuristics handle poorly, chat
//! transcripts in particular. A [`SiteExtractor`] recognizes such a page with
//! a cheap check on the original document and then produces the content on
//! its own, bypassing scoring and clutter removal entirely.
//!
//! Strategies live in a fixed, ordered registry. The first eligible one wins.

use dom_query::Document;
use serde_json::Value;

use crate::result::ConversationMessage;

pub mod chatgpt;
pub mod claude;
pub mod conversation;

pub use chatgpt::ChatGptExtractor;
pub use claude::ClaudeExtractor;

/// Output of a site extractor.
///
/// `None` fields fall back to the page metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedContent {
    /// Content markup handed to the Markdown serializer.
    pub content_html: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub published: Option<String>,
    pub site: Option<String>,
    pub description: Option<String>,
    /// Conversation turns in document order.
    pub messages: Vec<ConversationMessage>,
}

/// A site-specific extraction strategy.
pub trait SiteExtractor: Sync {
    /// Short lowercase name reported as `extractor_type`.
    fn name(&self) -> &'static str;

    /// Whether this strategy recognizes the page. Must not mutate `doc`.
    fn can_extract(&self, doc: &Document, url: Option<&str>, schema_org_data: &Value) -> bool;

    /// Extract the content. Only called after `can_extract` returned true.
    fn extract(&self, doc: &Document, url: Option<&str>) -> ExtractedContent;
}

/// Registered strategies in evaluation order.
static EXTRACTORS: &[&dyn SiteExtractor] = &[&ClaudeExtractor, &ChatGptExtractor];

/// The first registered strategy that recognizes the page.
#[must_use]
pub fn find_extractor(
    doc: &Document,
    url: Option<&str>,
    schema_org_data: &Value,
) -> Option<&'static dyn SiteExtractor> {
    EXTRACTORS
        .iter()
        .copied()
        .find(|extractor| extractor.can_extract(doc, url, schema_org_data))
}

/// Names of every registered strategy, in evaluation order.
#[must_use]
pub fn extractor_names() -> Vec<&'static str> {
    EXTRACTORS.iter().map(|extractor| extractor.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_registry_order() {
        assert_eq!(extractor_names(), vec!["claude", "chatgpt"]);
    }

    #[test]
    fn test_no_extractor_for_articles() {
        let doc = dom::parse("<body><article><p>Plain article</p></article></body>");
        assert!(find_extractor(&doc, None, &Value::Null).is_none());
    }

    #[test]
    fn test_first_eligible_wins() {
        let doc = dom::parse(
            r#"<body>
                <div data-testid="user-message">Hi</div>
                <article data-testid="conversation-turn-1"><div data-message-author-role="user">Hi</div></article>
            </body>"#,
        );

        let extractor = find_extractor(&doc, None, &Value::Null).unwrap();
        assert_eq!(extractor.name(), "claude");
    }

    #[test]
    fn test_chatgpt_dispatch() {
        let doc = dom::parse(
            r#"<body><article data-testid="conversation-turn-2"><div data-message-author-role="assistant">Hello</div></article></body>"#,
        );

        let extractor = find_extractor(&doc, Some("https://chatgpt.com/c/1"), &Value::Null).unwrap();
        assert_eq!(extractor.name(), "chatgpt");
    }
}
