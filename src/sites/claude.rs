//! Claude conversation pages.

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::dom;
use crate::result::ConversationMessage;
use crate::sites::conversation::{build_content, excerpt_title, page_title, strip_site_suffix};
use crate::sites::{ExtractedContent, SiteExtractor};

const MESSAGE_SELECTOR: &str =
    r#"div[data-testid="user-message"], div[data-testid="assistant-message"], div.font-claude-message"#;

const SITE: &str = "Claude";

/// Extracts the turns of a shared or exported Claude conversation.
///
/// User turns carry `data-testid="user-message"`; assistant turns are
/// `div.font-claude-message`. Other `data-testid` blocks are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeExtractor;

impl SiteExtractor for ClaudeExtractor {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn can_extract(&self, doc: &Document, _url: Option<&str>, _schema_org_data: &Value) -> bool {
        doc.select(MESSAGE_SELECTOR).exists()
    }

    fn extract(&self, doc: &Document, _url: Option<&str>) -> ExtractedContent {
        let blocks = doc.select(MESSAGE_SELECTOR);
        let messages: Vec<ConversationMessage> = blocks.iter().filter_map(|block| to_message(&block)).collect();
        let title = title(doc, &blocks);
        build_content(messages, title, SITE)
    }
}

fn to_message(block: &Selection) -> Option<ConversationMessage> {
    let (role, author) = match dom::get_attribute(block, "data-testid").as_deref() {
        Some("user-message") => ("you", "You"),
        Some(_) => return None,
        None if block.has_class("font-claude-message") => ("assistant", "Claude"),
        None => return None,
    };

    let content = dom::inner_html(block).trim().to_string();
    if content.is_empty() {
        return None;
    }
    Some(ConversationMessage {
        author: author.to_string(),
        role: role.to_string(),
        content,
    })
}

fn title(doc: &Document, blocks: &Selection) -> String {
    if let Some(page) = page_title(doc).filter(|t| t != SITE) {
        return strip_site_suffix(&page, SITE);
    }

    if let Some(first) = blocks.iter().next() {
        if dom::get_attribute(&first, "data-testid").as_deref() == Some("user-message") {
            let text = dom::normalized_text(&first);
            if !text.is_empty() {
                return excerpt_title(&text);
            }
        }
    }

    "Claude Conversation".to_string()
}
