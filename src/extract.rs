//! Parse orchestration.
//!
//! One pass runs: metadata collection on the original tree, optional image
//! removal on a private copy, site-extractor dispatch, and otherwise the
//! generic pipeline on a clone (score-driven removal, selector removal,
//! content location, normalization). A pass that yields too few words is
//! retried once with partial-selector removal disabled.

use std::time::Instant;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::extractor;
use crate::html_processing;
use crate::markdown;
use crate::metadata;
use crate::options::Options;
use crate::result::{ConversationMessage, MetaTagItem, Metadata, Response};
use crate::scoring;
use crate::sites::{self, ExtractedContent};

/// Parse `doc`, retrying once with relaxed clutter removal on low yield.
pub(crate) fn parse_document(doc: &Document, options: &Options) -> Response {
    let first = parse_once(doc, options);
    if !should_retry(&first, options) {
        return first;
    }

    if options.debug {
        tracing::debug!(
            word_count = first.word_count,
            min_word_count = options.min_word_count,
            "low word count, retrying without partial selectors"
        );
    }

    let relaxed_options = Options {
        remove_partial_selectors: false,
        ..options.clone()
    };
    let relaxed = parse_once(doc, &relaxed_options);

    if relaxed.word_count > first.word_count {
        if options.debug {
            tracing::debug!(
                first = first.word_count,
                relaxed = relaxed.word_count,
                "using relaxed pass"
            );
        }
        relaxed
    } else {
        first
    }
}

/// The relaxed pass can only differ when partial removal was on and the
/// generic pipeline produced the result.
fn should_retry(response: &Response, options: &Options) -> bool {
    response.word_count < options.min_word_count
        && options.remove_partial_selectors
        && response.extractor_type.is_none()
}

fn parse_once(doc: &Document, options: &Options) -> Response {
    let start = Instant::now();
    let url = options.url.as_deref();

    let schema_org_data = metadata::extract_schema_org_data(doc, options);
    let meta_tags = metadata::collect_meta_tags(doc);
    let mut page_metadata = metadata::extract_metadata(doc, &schema_org_data, &meta_tags, url);

    let without_images;
    let source = if options.remove_images {
        without_images = dom::clone_document(doc);
        html_processing::remove_images(&without_images, options);
        &without_images
    } else {
        doc
    };

    if let Some(site_extractor) = sites::find_extractor(source, url, &schema_org_data) {
        if options.debug {
            tracing::debug!(extractor = site_extractor.name(), "using site extractor");
        }
        let extracted = site_extractor.extract(source, url);
        let messages = apply_overrides(&mut page_metadata, &extracted);
        return finish(
            extracted.content_html,
            page_metadata,
            meta_tags,
            Some(site_extractor.name()),
            messages,
            options,
            start,
        );
    }

    let content_html = match extract_generic(source, &page_metadata, options) {
        Ok(html) => html,
        Err(Error::NoContent) => {
            if options.debug {
                tracing::debug!("no main content found, using raw body");
            }
            body_html(source)
        }
        Err(e) => {
            tracing::error!(error = %e, "content extraction failed, using raw body");
            body_html(source)
        }
    };

    finish(content_html, page_metadata, meta_tags, None, Vec::new(), options, start)
}

/// Run the generic pipeline on a clone of `doc` and return the cleaned
/// content markup.
fn extract_generic(doc: &Document, page_metadata: &Metadata, options: &Options) -> Result<String> {
    let clone = dom::clone_document(doc);

    let scored_out = scoring::score_and_remove(&clone.select("html"), options)?;
    let cleared = if options.remove_exact_selectors || options.remove_partial_selectors {
        html_processing::remove_clutter(&clone, options)?
    } else {
        0
    };
    if options.debug {
        tracing::debug!(scored_out, cleared, "clutter removal finished");
    }

    let main_content = extractor::find_main_content(&clone, options)?.ok_or(Error::NoContent)?;
    extractor::normalize_content(&main_content, page_metadata, options);

    Ok(dom::outer_html(&main_content))
}

fn body_html(doc: &Document) -> String {
    dom::inner_html(&doc.select("body"))
}

/// Fold extractor overrides into the page metadata and hand back the
/// conversation messages.
fn apply_overrides(page_metadata: &mut Metadata, extracted: &ExtractedContent) -> Vec<ConversationMessage> {
    let overrides = [
        (&mut page_metadata.title, &extracted.title),
        (&mut page_metadata.author, &extracted.author),
        (&mut page_metadata.published, &extracted.published),
        (&mut page_metadata.site, &extracted.site),
        (&mut page_metadata.description, &extracted.description),
    ];
    for (field, value) in overrides {
        if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
            *field = value.to_string();
        }
    }
    extracted.messages.clone()
}

fn finish(
    content_html: String,
    page_metadata: Metadata,
    meta_tags: Vec<MetaTagItem>,
    extractor_type: Option<&str>,
    messages: Vec<ConversationMessage>,
    options: &Options,
    start: Instant,
) -> Response {
    let content = markdown::to_markdown(&content_html, options.url.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "markdown conversion failed, returning HTML");
        content_html.clone()
    });
    let word_count = dom::count_words_in_html(&content_html);

    Response {
        content,
        content_html,
        title: page_metadata.title,
        description: page_metadata.description,
        domain: page_metadata.domain,
        favicon: page_metadata.favicon,
        image: page_metadata.image,
        published: page_metadata.published,
        author: page_metadata.author,
        site: page_metadata.site,
        schema_org_data: page_metadata.schema_org_data,
        word_count,
        parse_time: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        extractor_type: extractor_type.map(str::to_string),
        meta_tags,
        messages,
    }
}
