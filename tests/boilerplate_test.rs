use rs_declutter::{parse, Options};

fn words(prefix: &str, n: usize) -> String {
    (0..n).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn ad_navigation_is_removed_and_article_kept() {
    let html = format!(
        r#"<html><body>
            <nav class="ad-sidebar"><a href="/">MenuHome</a> <a href="/deals">MenuDeals</a></nav>
            <article><p>{}.</p></article>
        </body></html>"#,
        words("story", 500)
    );

    let response = parse(&html, &Options::default());

    assert!(!response.content.contains("MenuHome"));
    assert!(response.content.contains("story0"));
    assert!(response.content.contains("story499"));
    assert!((495..=505).contains(&response.word_count), "{}", response.word_count);
}

#[test]
fn site_footer_is_excluded_but_article_footer_is_preserved() {
    let html = format!(
        r#"<html><body>
            <footer>SiteFooterText</footer>
            <article>
              <p>{}.</p>
              <footer>ArticleFooterText</footer>
            </article>
        </body></html>"#,
        words("body", 250)
    );

    let response = parse(&html, &Options::default());

    assert!(response.content.contains("ArticleFooterText"));
    assert!(!response.content.contains("SiteFooterText"));
}

#[test]
fn aside_is_excluded_even_inside_article() {
    let html = format!(
        r#"<html><body><article>
            <aside>RelatedSidebarText</aside>
            <p>{}.</p>
        </article></body></html>"#,
        words("body", 250)
    );

    let response = parse(&html, &Options::default());

    assert!(response.content.contains("body10"));
    assert!(!response.content.contains("RelatedSidebarText"));
}

#[test]
fn share_and_cookie_widgets_are_removed() {
    let html = format!(
        r#"<html><body>
            <div class="cookie-banner">We use cookies CookieText</div>
            <main>
              <p>{}.</p>
              <div class="social-share"><a href="https://x.example/share">ShareText</a></div>
            </main>
        </body></html>"#,
        words("main", 250)
    );

    let response = parse(&html, &Options::default());

    assert!(response.content.contains("main0"));
    assert!(!response.content.contains("CookieText"));
    assert!(!response.content.contains("ShareText"));
}

#[test]
fn link_heavy_lists_are_pruned_from_content() {
    let html = format!(
        r#"<html><body><article>
            <p>{}.</p>
            <ul><li><a href="/1">RelatedOne</a></li><li><a href="/2">RelatedTwo</a></li></ul>
            <ul><li>Prose item with plenty of words that explains the topic in detail and keeps going</li></ul>
        </article></body></html>"#,
        words("text", 250)
    );

    let response = parse(&html, &Options::default());

    assert!(!response.content.contains("RelatedOne"));
    assert!(response.content.contains("Prose item"));
}

#[test]
fn scripts_styles_and_attributes_never_reach_the_output() {
    let html = format!(
        r#"<html><body><article class="story" style="color:red" onclick="evil()">
            <script>var ScriptText = 1;</script>
            <style>.x {{ color: blue }}</style>
            <p data-track="1">{}.</p>
        </article></body></html>"#,
        words("text", 250)
    );

    let response = parse(&html, &Options::default());

    assert!(!response.content.contains("ScriptText"));
    assert!(!response.content_html.contains("<script"));
    assert!(!response.content_html.contains("style="));
    assert!(!response.content_html.contains("onclick"));
    assert!(!response.content_html.contains("data-track"));
    assert!(!response.content_html.contains("class="));
}

#[test]
fn duplicate_title_heading_is_removed() {
    let html = format!(
        r#"<html><head><title>Quiet Harbors</title></head><body><article>
            <h1>Quiet Harbors</h1>
            <h2>Where boats rest</h2>
            <p>{}.</p>
        </article></body></html>"#,
        words("text", 250)
    );

    let response = parse(&html, &Options::default());

    assert_eq!(response.title, "Quiet Harbors");
    assert!(!response.content.contains("Quiet Harbors"));
    assert!(response.content.contains("Where boats rest"));
}
