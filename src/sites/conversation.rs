//! Shared pieces of the chat-transcript strategies.

use dom_query::Document;

use crate::dom;
use crate::result::ConversationMessage;
use crate::sites::ExtractedContent;

/// Longest first-message excerpt used as a fallback title.
pub const MAX_TITLE_CHARS: usize = 50;

/// Render messages as one HTML block per turn, separated by rules.
#[must_use]
pub fn render_messages(messages: &[ConversationMessage]) -> String {
    let turns: Vec<String> = messages
        .iter()
        .map(|message| {
            format!(
                "<div class=\"message message-{role}\">\
                 <div class=\"message-header\"><p class=\"message-author\"><strong>{author}</strong></p></div>\
                 <div class=\"message-content\">{content}</div>\
                 </div>",
                role = message.role,
                author = message.author,
                content = message.content,
            )
        })
        .collect();
    turns.join("<hr>")
}

/// Assemble the extractor output for a transcript.
#[must_use]
pub fn build_content(messages: Vec<ConversationMessage>, title: String, site: &str) -> ExtractedContent {
    ExtractedContent {
        content_html: render_messages(&messages),
        title: Some(title),
        site: Some(site.to_string()),
        description: Some(format!("{site} conversation with {} messages", messages.len())),
        messages,
        ..ExtractedContent::default()
    }
}

/// Trimmed text of `<title>`, if any.
#[must_use]
pub fn page_title(doc: &Document) -> Option<String> {
    let title = doc.select("head title");
    let title = if title.exists() { title } else { doc.select("title") };
    let text = dom::collapse_whitespace(&title.text());
    (!text.is_empty()).then_some(text)
}

/// Drop a trailing `- Site` or `| Site` from a page title.
#[must_use]
pub fn strip_site_suffix(title: &str, site: &str) -> String {
    let trimmed = title.trim();
    if let Some(rest) = trimmed.strip_suffix(site) {
        if let Some(rest) = rest.trim_end().strip_suffix(['-', '|']) {
            return rest.trim_end().to_string();
        }
    }
    trimmed.to_string()
}

/// First `MAX_TITLE_CHARS` characters of `text`, with an ellipsis when cut.
#[must_use]
pub fn excerpt_title(text: &str) -> String {
    let text = dom::collapse_whitespace(text);
    if text.chars().count() > MAX_TITLE_CHARS {
        let cut: String = text.chars().take(MAX_TITLE_CHARS).collect();
        format!("{cut}...")
    } else {
        text
    }
}
