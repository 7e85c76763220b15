//! Exact boilerplate selectors.
//!
//! Any element matching one of these selectors is removed during phase A of
//! the clutter pass. Selectors are written in lowercase; class and id values
//! on real pages are overwhelmingly lowercase and the partial phase catches
//! the rest case-insensitively.
//!
//! `header` and `footer` are only matched as direct children of `<body>` so
//! that article headers and footers survive.

pub static EXACT_SELECTORS: &[&str] = &[
    // Non-content markup
    "script",
    "style",
    "noscript",
    "template",
    "link",
    "meta",
    // Hidden elements
    "[hidden]",
    "[style*=\"display:none\"]",
    "[style*=\"display: none\"]",
    // Advertising
    ".ad",
    ".ads",
    ".advert",
    ".advertisement",
    "[class^=\"ad-\"]",
    "[class$=\"-ad\"]",
    "[id^=\"ad-\"]",
    "[id$=\"-ad\"]",
    "[data-ad-slot]",
    "ins.adsbygoogle",
    ".promo",
    ".sponsored",
    // Navigation
    "nav",
    "[role=\"navigation\"]",
    ".navigation",
    "#navigation",
    ".breadcrumb",
    ".breadcrumbs",
    "[aria-label=\"breadcrumb\"]",
    "#menu",
    ".pagination",
    ".skip-link",
    // Page chrome
    "body > header",
    "body > footer",
    "#header",
    "#footer",
    ".site-header",
    ".site-footer",
    "[role=\"banner\"]",
    "[role=\"contentinfo\"]",
    // Sidebars
    "aside",
    "#sidebar",
    ".sidebar",
    "[role=\"complementary\"]",
    // Share and social widgets
    ".share",
    ".sharing",
    ".share-buttons",
    ".social",
    ".social-share",
    ".social-links",
    ".addtoany",
    // Cookie and consent banners
    ".cookie-banner",
    "#cookie-banner",
    ".cookie-notice",
    ".cookie-consent",
    "#cookie-consent",
    "#onetrust-consent-sdk",
    ".cc-window",
    // Dialogs and popups
    "[role=\"dialog\"]",
    "[aria-modal=\"true\"]",
    ".modal",
    ".popup",
    // Form controls
    "button",
    "input",
    "select",
    "textarea",
    // Comments, related links, newsletters
    "#comments",
    ".comments",
    "#disqus_thread",
    ".comment-list",
    ".related",
    ".related-posts",
    ".newsletter",
    ".newsletter-signup",
    ".subscribe",
];
