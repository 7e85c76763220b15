//! HTML Meta Tag Collection
//!
//! Every `<meta>` element with a non-empty `content` attribute is collected
//! in document order. Lookups match a key against either the `name` or the
//! `property` attribute, case-insensitively, so `og:title` is found whether a
//! page declares it with `property=` (the Open Graph way) or `name=`.

use dom_query::{Document, Selection};

use crate::dom;
use crate::metadata::decode_entities;
use crate::result::MetaTagItem;

/// Collect every meta tag that carries content.
#[must_use]
pub fn collect_meta_tags(doc: &Document) -> Vec<MetaTagItem> {
    doc.select("meta")
        .nodes()
        .iter()
        .filter_map(|node| {
            let meta = Selection::from(*node);
            let content = dom::get_attribute(&meta, "content")?;
            if content.trim().is_empty() {
                return None;
            }
            Some(MetaTagItem {
                name: dom::get_attribute(&meta, "name"),
                property: dom::get_attribute(&meta, "property"),
                content: decode_entities(content.trim()),
            })
        })
        .collect()
}

/// Content of the first tag whose `name` or `property` equals `key`.
#[must_use]
pub fn meta_content<'a>(tags: &'a [MetaTagItem], key: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| {
            let matches = |attr: &Option<String>| attr.as_deref().is_some_and(|v| v.trim().eq_ignore_ascii_case(key));
            matches(&tag.name) || matches(&tag.property)
        })
        .map(|tag| tag.content.as_str())
}

/// Content of the first key in `keys` that is present.
#[must_use]
pub fn first_meta_content(tags: &[MetaTagItem], keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| meta_content(tags, key))
        .map(str::to_string)
}
