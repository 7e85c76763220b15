use rs_declutter::{parse, Options};

const CLAUDE_PAGE: &str = r#"<html><head><title>Borrow checker questions - Claude</title></head><body>
    <nav><a href="/new">New chat</a></nav>
    <div data-testid="user-message"><p>Why does the borrow checker reject this?</p></div>
    <div class="font-claude-message"><p>Because the reference outlives the value.</p></div>
    <div data-testid="user-message"><p>How do I fix it?</p></div>
    <div class="font-claude-message"><p>Move the value into a longer-lived scope.</p></div>
</body></html>"#;

const CHATGPT_PAGE: &str = r#"<html><head><title>Bread baking</title></head><body>
    <article data-testid="conversation-turn-1">
        <div data-message-author-role="user"><p>How long should dough proof?</p></div>
    </article>
    <article data-testid="conversation-turn-2">
        <div data-message-author-role="assistant"><p>Four to twelve hours, depending on temperature.</p></div>
    </article>
</body></html>"#;

#[test]
fn claude_transcript_keeps_message_order() {
    let response = parse(CLAUDE_PAGE, &Options::default());

    assert_eq!(response.extractor_type.as_deref(), Some("claude"));
    assert_eq!(response.title, "Borrow checker questions");
    assert_eq!(response.site, "Claude");

    let roles: Vec<&str> = response.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, ["you", "assistant", "you", "assistant"]);
    assert_eq!(response.messages[1].author, "Claude");

    let first = response.content.find("borrow checker reject").unwrap();
    let last = response.content.find("longer-lived scope").unwrap();
    assert!(first < last);
    assert!(!response.content.contains("New chat"));
}

#[test]
fn chatgpt_transcript_is_rendered_per_turn() {
    let response = parse(CHATGPT_PAGE, &Options::default());

    assert_eq!(response.extractor_type.as_deref(), Some("chatgpt"));
    assert_eq!(response.title, "Bread baking");
    assert_eq!(response.messages.len(), 2);
    assert_eq!(response.messages[0].author, "You");
    assert_eq!(response.messages[1].author, "ChatGPT");
    assert_eq!(response.description, "ChatGPT conversation with 2 messages");
    assert!(response.content_html.contains("message-content"));
    assert!(response.content.contains("Four to twelve hours"));
}

#[test]
fn extractor_results_are_not_retried() {
    // Short transcripts stay below the minimum word count but keep their extractor
    let response = parse(CHATGPT_PAGE, &Options::default());

    assert!(response.word_count < Options::default().min_word_count);
    assert!(response.extractor_type.is_some());
}

#[test]
fn ordinary_pages_have_no_extractor_type() {
    let response = parse(
        "<html><body><article><p>Just an article.</p></article></body></html>",
        &Options::default(),
    );

    assert_eq!(response.extractor_type, None);
    assert!(response.messages.is_empty());
}

#[test]
fn messages_serialize_only_for_transcripts() {
    let transcript = serde_json::to_value(parse(CLAUDE_PAGE, &Options::default())).unwrap();
    assert_eq!(transcript["extractorType"], "claude");
    assert_eq!(transcript["messages"].as_array().map(Vec::len), Some(4));

    let article = serde_json::to_value(parse("<article><p>Text</p></article>", &Options::default())).unwrap();
    assert!(article.get("extractorType").is_none());
    assert!(article.get("messages").is_none());
}
