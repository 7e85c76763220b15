//! ChatGPT conversation pages.

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::dom;
use crate::result::ConversationMessage;
use crate::sites::conversation::{build_content, excerpt_title, page_title, strip_site_suffix};
use crate::sites::{ExtractedContent, SiteExtractor};

const TURN_SELECTOR: &str = r#"article[data-testid^="conversation-turn-"]"#;
const ROLE_SELECTOR: &str = "[data-message-author-role]";

const SITE: &str = "ChatGPT";

/// Extracts the turns of a ChatGPT conversation.
///
/// Each turn is an `article[data-testid^="conversation-turn-"]`; the role
/// comes from the nested `data-message-author-role` attribute. Turns from
/// roles other than `user` and `assistant` (tools, system) are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatGptExtractor;

impl SiteExtractor for ChatGptExtractor {
    fn name(&self) -> &'static str {
        "chatgpt"
    }

    fn can_extract(&self, doc: &Document, _url: Option<&str>, _schema_org_data: &Value) -> bool {
        doc.select(TURN_SELECTOR).exists()
    }

    fn extract(&self, doc: &Document, _url: Option<&str>) -> ExtractedContent {
        let messages: Vec<ConversationMessage> = doc
            .select(TURN_SELECTOR)
            .iter()
            .filter_map(|turn| to_message(&turn))
            .collect();

        let title = page_title(doc)
            .filter(|t| t != SITE)
            .map(|t| strip_site_suffix(&t, SITE))
            .or_else(|| {
                messages
                    .iter()
                    .find(|m| m.role == "user")
                    .map(|m| excerpt_title(&dom::text_of_html(&m.content)))
                    .filter(|t| !t.is_empty())
            })
            .unwrap_or_else(|| "ChatGPT Conversation".to_string());

        build_content(messages, title, SITE)
    }
}

fn to_message(turn: &Selection) -> Option<ConversationMessage> {
    let body = turn.select(ROLE_SELECTOR).iter().next()?;
    let role = dom::get_attribute(&body, "data-message-author-role")?;
    let author = match role.as_str() {
        "user" => "You",
        "assistant" => "ChatGPT",
        _ => return None,
    };

    let content = dom::inner_html(&body).trim().to_string();
    if content.is_empty() {
        return None;
    }
    Some(ConversationMessage {
        author: author.to_string(),
        role,
        content,
    })
}
