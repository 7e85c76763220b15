//! Error types for rs-declutter.
//!
//! These errors never escape the top-level `parse*` functions: the
//! orchestrator turns every one of them into a degraded response. They are
//! public so that the lower-level building blocks (locator, remover,
//! serializer) can be driven directly.

/// Error type for the extraction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A catalogue selector could not be compiled by the selector engine.
    #[error("invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// The locator found no content root.
    #[error("No extractable content found")]
    NoContent,

    /// An embedded JSON-LD block could not be parsed.
    #[error("schema.org block is not valid JSON: {0}")]
    SchemaOrg(#[from] serde_json::Error),

    /// HTML to Markdown conversion failed.
    #[error("Markdown conversion failed: {0}")]
    Markdown(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
