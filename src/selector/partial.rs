//! Partial boilerplate patterns.
//!
//! Each fragment is a regex snippet. The fragments are joined with `|` into a
//! single case-insensitive pattern (`patterns::PARTIAL_SELECTOR_PATTERN`) and
//! tested once per node against the space-joined values of
//! [`TEST_ATTRIBUTES`].
//!
//! Fragments deliberately avoid generic words that content wrappers use
//! (`content`, `article`, `post`, `entry`, `main`, `widget`, `hidden`).

/// Attributes whose values are concatenated and tested.
pub static TEST_ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "data-test",
    "data-testid",
    "data-test-id",
    "data-qa",
    "data-cy",
    "role",
];

pub static PARTIAL_SELECTORS: &[&str] = &[
    // Advertising
    r"(^|\s)ad-",
    "ad-slot",
    "ad-container",
    "ad-unit",
    "ad-wrapper",
    "ad-placement",
    "ad-banner",
    "adsense",
    "advert",
    "sponsor",
    "outbrain",
    "taboola",
    "promo",
    // Navigation
    "navbar",
    "navigation",
    "nav-links",
    "main-nav",
    "site-nav",
    "menu",
    "breadcrumb",
    "crumbs",
    "pagination",
    "pager",
    "next-post",
    "prev-post",
    "previous-post",
    "post-navigation",
    "toolbar",
    "dropdown",
    "tooltip",
    "skip-link",
    "skip-to",
    "back-to-top",
    "scroll-to-top",
    // Page chrome
    "header",
    "footer",
    "masthead",
    "banner",
    "contentinfo",
    "sidebar",
    "side-bar",
    "right-rail",
    "left-rail",
    "complementary",
    "widget-area",
    "widgets",
    // Social and sharing
    "share",
    "sharing",
    "social",
    "follow-us",
    "addtoany",
    "print-link",
    // Engagement
    "related",
    "recommend",
    "trending",
    "popular",
    "most-read",
    "more-stories",
    "read-more",
    "read-next",
    "keep-reading",
    "newsletter",
    "subscribe",
    "signup",
    "sign-up",
    "login",
    "log-in",
    "donate",
    "donation",
    "feedback",
    "reactions",
    r"cta-",
    r"-cta(\s|$)",
    // Comments
    "comment-",
    "comments",
    r"-comment(\s|$)",
    "disqus",
    r"(^|\s)respond(\s|$)",
    // Author boxes and meta rows
    "author-bio",
    "author-box",
    "about-author",
    "byline",
    "post-meta",
    "entry-meta",
    "article-meta",
    "post-tags",
    "tag-list",
    "tag-cloud",
    "category-list",
    // Consent and overlays
    "cookie",
    "consent",
    "gdpr",
    "modal",
    "popup",
    "dialog",
    "alert",
    "notification",
    "disclaimer",
    "copyright",
    // Screen-reader-only text
    "sr-only",
    "visually-hidden",
    "screen-reader-text",
];
