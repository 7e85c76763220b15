//! Schema.org JSON-LD Extraction
//!
//! Every `<script type="application/ld+json">` block is cleaned of comments
//! and CDATA wrappers, parsed, and flattened into one list of items: a block
//! holding an `@graph` array contributes the graph's members, any other block
//! contributes itself. String values are entity-decoded.
//!
//! A block that fails to parse is logged and skipped; the others still count.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;
use crate::error::Result;
use crate::metadata::decode_entities;
use crate::options::Options;
use crate::patterns::{CDATA_WRAPPER, JSON_COMMENTS, JSON_COMMENT_DELIMITERS};

/// Extract the flattened schema.org items of `doc` as a JSON array.
#[must_use]
pub fn extract_schema_org_data(doc: &Document, options: &Options) -> Value {
    let mut items: Vec<Value> = Vec::new();

    for node in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let raw = dom::text_content(&Selection::from(*node));
        match parse_block(&raw) {
            Ok(Some(Value::Object(mut block))) => match block.remove("@graph") {
                Some(Value::Array(graph)) => items.extend(graph),
                Some(other) => {
                    block.insert("@graph".to_string(), other);
                    items.push(Value::Object(block));
                }
                None => items.push(Value::Object(block)),
            },
            Ok(Some(value)) => items.push(value),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed schema.org block");
                if options.debug {
                    tracing::debug!(content = %clean_block(&raw), "malformed schema.org content");
                }
            }
        }
    }

    Value::Array(items.into_iter().map(decode_strings).collect())
}

/// Parse one block. Blank blocks yield `None`.
fn parse_block(raw: &str) -> Result<Option<Value>> {
    let cleaned = clean_block(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&cleaned)?))
}

fn clean_block(raw: &str) -> String {
    let without_comments = JSON_COMMENTS.replace_all(raw, "");
    let unwrapped = CDATA_WRAPPER.replace(&without_comments, "$1");
    JSON_COMMENT_DELIMITERS.replace_all(&unwrapped, "").trim().to_string()
}

fn decode_strings(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(decode_entities(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(decode_strings).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, decode_strings(value)))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

/// First value stored under `key`, searching every item depth-first.
#[must_use]
pub fn find_property<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data {
        Value::Object(map) => map
            .get(key)
            .filter(|value| !value.is_null())
            .or_else(|| map.values().find_map(|value| find_property(value, key))),
        Value::Array(items) => items.iter().find_map(|item| find_property(item, key)),
        _ => None,
    }
}

/// First item whose `@type` is (or includes) `type_name`.
#[must_use]
pub fn find_typed<'a>(data: &'a Value, type_name: &str) -> Option<&'a Map<String, Value>> {
    let items = data.as_array()?;
    items.iter().filter_map(Value::as_object).find(|item| match item.get("@type") {
        Some(Value::String(t)) => t == type_name,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(type_name)),
        _ => false,
    })
}

/// Human-readable text of a schema value.
///
/// Strings are used directly, objects contribute their `name`, arrays are
/// joined with `", "`.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Object(map) => map.get("name").and_then(value_text)?,
        Value::Array(items) => items
            .iter()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// URL of a schema `image` value (string, object `url`, or first array item).
#[must_use]
pub fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(map) => map.get("url").and_then(image_url),
        Value::Array(items) => items.iter().find_map(image_url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(html: &str) -> Value {
        extract_schema_org_data(&dom::parse(html), &Options::default())
    }

    #[test]
    fn test_simple_article() {
        let data = schema(
            r#"<script type="application/ld+json">{"@type": "NewsArticle", "headline": "Tides &amp; Moons"}</script>"#,
        );

        assert_eq!(data, json!([{"@type": "NewsArticle", "headline": "Tides & Moons"}]));
    }

    #[test]
    fn test_graph_is_flattened() {
        let data = schema(
            r#"<script type="application/ld+json">
            {"@context": "https://schema.org", "@graph": [
                {"@type": "WebSite", "name": "Example"},
                {"@type": "Article", "headline": "Hello"}
            ]}
            </script>"#,
        );

        let items = data.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(find_typed(&data, "WebSite").unwrap()["name"], "Example");
    }

    #[test]
    fn test_comments_and_cdata_are_cleaned() {
        let data = schema(
            r#"<script type="application/ld+json">
            //<![CDATA[
            {"@type": "Article", /* inline */ "headline": "Clean"}
            //]]>
            </script>"#,
        );

        assert_eq!(find_property(&data, "headline"), Some(&json!("Clean")));
    }

    #[test]
    fn test_malformed_block_is_skipped() {
        let data = schema(
            r#"<script type="application/ld+json">{"@type": "Article", </script>
               <script type="application/ld+json">{"@type": "Person", "name": "Ada"}</script>
               <script type="application/ld+json">   </script>"#,
        );

        assert_eq!(data, json!([{"@type": "Person", "name": "Ada"}]));
    }

    #[test]
    fn test_value_helpers() {
        assert_eq!(value_text(&json!("  Ada ")).as_deref(), Some("Ada"));
        assert_eq!(value_text(&json!({"@type": "Person", "name": "Ada"})).as_deref(), Some("Ada"));
        assert_eq!(
            value_text(&json!([{"name": "Ada"}, "Grace"])).as_deref(),
            Some("Ada, Grace")
        );
        assert_eq!(value_text(&json!(3)), None);

        assert_eq!(image_url(&json!({"url": "/a.png"})).as_deref(), Some("/a.png"));
        assert_eq!(image_url(&json!(["/b.png", "/c.png"])).as_deref(), Some("/b.png"));
    }

    #[test]
    fn test_find_property_searches_nested_items() {
        let data = json!([{"@type": "WebPage", "mainEntity": {"@type": "Article", "datePublished": "2024-01-02"}}]);
        assert_eq!(find_property(&data, "datePublished"), Some(&json!("2024-01-02")));
        assert_eq!(find_property(&data, "missing"), None);
    }
}
