use rs_declutter::{parse, Options, Response};

const NEWS_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
    <title>Rivers rising | Valley Post</title>
    <meta property="og:title" content="Rivers rising across the valley | Valley Post">
    <meta property="og:site_name" content="Valley Post">
    <meta name="description" content="Flood  warnings issued.">
    <meta property="og:image" content="/img/river.jpg">
    <meta name="author" content="Maya Lind">
    <link rel="icon" href="/static/icon.png">
    <script type="application/ld+json">
    {"@context": "https://schema.org", "@graph": [
        {"@type": "WebSite", "name": "Valley Post"},
        {"@type": "NewsArticle", "headline": "Rivers rising", "datePublished": "2024-04-02T08:30:00Z"}
    ]}
    </script>
</head><body>
    <header><a href="/">Valley Post</a></header>
    <article>
        <h1>Rivers rising across the valley</h1>
        <p>Heavy rain, which began on Sunday, pushed the river above its banks. Officials opened shelters.</p>
        <p>Residents were asked to avoid low roads until the water recedes.</p>
    </article>
</body></html>"#;

fn parse_news() -> Response {
    let options = Options {
        url: Some("https://www.valleypost.example/news/rivers".to_string()),
        ..Options::default()
    };
    parse(NEWS_PAGE, &options)
}

#[test]
fn metadata_fields_are_populated() {
    let response = parse_news();

    assert_eq!(response.title, "Rivers rising across the valley");
    assert_eq!(response.site, "Valley Post");
    assert_eq!(response.description, "Flood warnings issued.");
    assert_eq!(response.author, "Maya Lind");
    assert_eq!(response.domain, "valleypost.example");
    assert_eq!(response.image, "https://www.valleypost.example/img/river.jpg");
    assert_eq!(response.favicon, "https://www.valleypost.example/static/icon.png");
    assert_eq!(response.published, "2024-04-02T08:30:00+00:00");
    assert_eq!(response.schema_org_data.as_array().map(Vec::len), Some(2));
}

#[test]
fn meta_tags_are_listed() {
    let response = parse_news();

    let og_title = response
        .meta_tags
        .iter()
        .find(|tag| tag.property.as_deref() == Some("og:title"))
        .unwrap();
    assert_eq!(og_title.content, "Rivers rising across the valley | Valley Post");
    assert!(response.meta_tags.iter().any(|tag| tag.name.as_deref() == Some("author")));
}

#[test]
fn content_excludes_title_heading_and_page_header() {
    let response = parse_news();

    assert!(response.content.starts_with("Heavy rain"), "{}", response.content);
    assert!(response.content.contains("low roads"));
    assert!(!response.content.contains("Rivers rising"));
    assert_eq!(response.word_count, 26);
}

#[test]
fn response_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(parse_news()).unwrap();

    for key in [
        "content",
        "contentHtml",
        "title",
        "description",
        "domain",
        "favicon",
        "image",
        "published",
        "author",
        "site",
        "schemaOrgData",
        "wordCount",
        "parseTime",
        "metaTags",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["wordCount"], 26);
    assert!(json.get("word_count").is_none());
}

#[test]
fn response_round_trips_through_json() {
    let response = parse_news();
    let json = serde_json::to_string(&response).unwrap();
    let back: Response = serde_json::from_str(&json).unwrap();

    assert_eq!(back, response);
}
