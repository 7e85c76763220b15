//! Generic content extraction.
//!
//! # Module Structure
//!
//! - `locator`: picks the main content element (entry points, block scan,
//!   table layouts)
//! - `normalize`: final cleanup of the located subtree
//!
//! # Usage
//!
//! ```rust
//! use rs_declutter::{dom, extractor, Options};
//!
//! let doc = dom::parse("<body><article><p>Hello, world.</p></article></body>");
//! let options = Options::default();
//! let root = extractor::find_main_content(&doc, &options).unwrap().unwrap();
//! assert_eq!(dom::tag_name(&root).as_deref(), Some("article"));
//! ```

pub mod locator;
pub mod normalize;

pub use locator::find_main_content;
pub use normalize::normalize_content;
