//! Entry points, block elements and removal candidates.

/// Selectors likely to wrap the main content, most specific first.
///
/// Rank is the position in this list; earlier selectors receive a larger
/// positional weight in the locator. `body` is last so that every document
/// yields at least one candidate.
pub static ENTRY_POINT_ELEMENTS: &[&str] = &[
    "#post",
    ".post-content",
    ".article-content",
    "#article-content",
    ".article_post",
    ".article-wrapper",
    ".entry-content",
    ".content-article",
    ".post",
    ".markdown-body",
    "article",
    "[role=\"article\"]",
    "main",
    "[role=\"main\"]",
    "body",
];

/// Elements scored by the block-scan fallback.
pub static BLOCK_ELEMENTS: &[&str] = &["div", "section", "article", "main", "td"];

/// Containers examined by score-driven removal.
pub static REMOVAL_CANDIDATES: &[&str] = &[
    "ul",
    "ol",
    "dl",
    "menu",
    "nav",
    "aside",
    "[role=\"navigation\"]",
    "[role=\"menu\"]",
];

/// Tags counted as semantic content containers.
pub static SEMANTIC_CONTAINERS: &[&str] = &["article", "main"];

/// ARIA roles counted as semantic content containers.
pub static SEMANTIC_ROLES: &[&str] = &["article", "main"];
