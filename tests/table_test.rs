use rs_declutter::{parse, Options};

fn words(prefix: &str, n: usize) -> String {
    (0..n).map(|i| format!("{prefix}{i}")).collect::<Vec<_>>().join(" ")
}

fn layout_page(table_attrs: &str) -> String {
    format!(
        r#"<html><body><table {table_attrs}><tr>
            <td><a href="/a">Home</a> <a href="/b">Archive</a> <a href="/c">Links</a></td>
            <td><p>{}, and commas.</p><p>{}.</p></td>
        </tr></table></body></html>"#,
        words("cell", 150),
        words("more", 80)
    )
}

#[test]
fn wide_layout_table_selects_content_cell() {
    let response = parse(&layout_page(r#"width="800""#), &Options::default());

    assert!(response.content_html.starts_with("<td>"), "{}", response.content_html);
    assert!(response.content.contains("cell0"));
    assert!(!response.content.contains("Archive"));
}

#[test]
fn inline_width_and_centered_tables_count_as_layout() {
    for attrs in [r#"style="width: 760px""#, r#"align="center""#, r#"class="main-content""#] {
        let response = parse(&layout_page(attrs), &Options::default());
        assert!(response.content_html.starts_with("<td>"), "{attrs}: {}", response.content_html);
    }
}

#[test]
fn narrow_tables_keep_body() {
    let response = parse(&layout_page(r#"width="300""#), &Options::default());

    assert!(response.content_html.starts_with("<body>"), "{}", response.content_html);
    assert!(response.content.contains("Archive"));
}

#[test]
fn table_width_threshold_is_configurable() {
    let options = Options {
        table_width_threshold: 200,
        ..Options::default()
    };
    let response = parse(&layout_page(r#"width="300""#), &options);

    assert!(response.content_html.starts_with("<td>"), "{}", response.content_html);
}

#[test]
fn data_tables_inside_articles_are_preserved() {
    let html = format!(
        r#"<html><body><article>
            <p>{}.</p>
            <table>
                <tr><th>Metric</th><th>Value</th></tr>
                <tr><td>Latency</td><td>12ms</td></tr>
            </table>
        </article></body></html>"#,
        words("intro", 220)
    );

    let response = parse(&html, &Options::default());

    assert!(response.content_html.contains("<table>"));
    assert!(response.content_html.contains("<th>Metric</th>"));
    assert!(response.content.contains("Latency"));
    assert!(response.content.contains("12ms"));
}
