//! Result types for extraction output.
//!
//! This module defines the structured output of a parse: the cleaned content
//! (Markdown and HTML), document metadata, the collected meta tags and, for
//! conversation pages, the ordered message list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `<meta>` tag that carried a non-empty `content` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTagItem {
    /// Value of the `name` attribute.
    pub name: Option<String>,

    /// Value of the `property` attribute.
    pub property: Option<String>,

    /// Entity-decoded value of the `content` attribute.
    pub content: String,
}

/// One turn of a chat transcript extracted by a conversation strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Display name of the speaker ("You", "Claude", "ChatGPT").
    pub author: String,

    /// Machine role of the speaker ("you", "user", "assistant").
    pub role: String,

    /// Inner HTML of the message body.
    pub content: String,
}

/// Document metadata gathered before content extraction.
///
/// Missing values are empty strings, matching the response shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Page title with the site-name suffix removed.
    pub title: String,

    /// Page description.
    pub description: String,

    /// Host name without `www.`.
    pub domain: String,

    /// Absolute favicon URL.
    pub favicon: String,

    /// Main image URL.
    pub image: String,

    /// Publication date (RFC 3339 when it could be parsed).
    pub published: String,

    /// Author name(s).
    pub author: String,

    /// Site name (e.g., "The Verge").
    pub site: String,

    /// Flattened schema.org items.
    pub schema_org_data: Value,
}

/// Result of parsing an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Main content as Markdown.
    pub content: String,

    /// Main content as cleaned HTML (the serializer input).
    pub content_html: String,

    /// Page title.
    pub title: String,

    /// Page description.
    pub description: String,

    /// Host name of the page.
    pub domain: String,

    /// Absolute favicon URL.
    pub favicon: String,

    /// Main image URL.
    pub image: String,

    /// Publication date.
    pub published: String,

    /// Author name(s).
    pub author: String,

    /// Site name.
    pub site: String,

    /// Flattened schema.org items (a JSON array).
    pub schema_org_data: Value,

    /// Number of whitespace-separated words in the content.
    pub word_count: usize,

    /// Wall-clock time of the pass that produced this response, in ms.
    pub parse_time: u64,

    /// Name of the site extractor that produced the content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor_type: Option<String>,

    /// Every meta tag with content, in document order.
    pub meta_tags: Vec<MetaTagItem>,

    /// Conversation turns in document order (conversation extractors only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ConversationMessage>,
}
