//! # linkscout
//!
//! Heuristic link extraction from JavaScript for web crawlers.
//!
//! This library widens crawl frontiers by recovering URLs that plain HTML
//! anchor parsing misses: links built from string literals in `.js`
//! resources, inline `<script>` blocks, `onclick="..."`-style event
//! handlers, and `javascript:` pseudo-URLs. Extraction is lexical — a
//! configurable pattern scanned under a wall-clock budget — never a
//! JavaScript parse, trading recall/precision purity for speed.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkscout::{JsLinkFilter, Options};
//!
//! // The outlink pattern's first capture group yields the candidate path.
//! let options = Options {
//!     outlink_pattern: Some(r#",\s*"([^"]+)""#.to_string()),
//!     ..Options::default()
//! };
//! let filter = JsLinkFilter::new(options)?;
//!
//! let links = filter.extract_links(
//!     r#"["A", "../x/y.js", "_blank"]"#,
//!     "",
//!     "http://h/p/q/tree.js",
//! );
//! assert_eq!(links[0].url, "http://h/p/x/y.js");
//! # Ok::<(), linkscout::Error>(())
//! ```
//!
//! ## Paths through the crate
//!
//! - **HTML pages**: [`JsLinkFilter::filter_html`] /
//!   [`JsLinkFilter::filter_document`] walk the document tree, scan every
//!   JavaScript-bearing node and attribute, and prepend what they find to
//!   the page's existing link set.
//! - **Standalone scripts**: [`JsLinkFilter::parse_js`] /
//!   [`JsLinkFilter::parse_js_bytes`] treat the whole resource as one
//!   script and also derive a title from its first line.
//! - **Raw text**: [`JsLinkFilter::extract_links`] scans any blob.
//!
//! All operations are synchronous, reentrant, and read-only over their
//! inputs; one `JsLinkFilter` can be shared freely across threads.

mod error;
mod extractor;
mod filter;
mod options;
mod patterns;
mod resolver;
mod result;
mod walker;

/// Character encoding handling for raw script resources.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use filter::JsLinkFilter;
pub use options::{Options, DEFAULT_ABSOLUTE_URL_PATTERN, DEFAULT_FILE_INCLUDE_PATTERN};
pub use patterns::PatternSet;
pub use result::{Outlink, ParseStatus, ScriptParse};

/// One-shot link extraction from a text blob.
///
/// Compiles the patterns, scans once, and throws the compiled set away —
/// convenient for tools and tests. Hosts scanning many documents should
/// build a [`JsLinkFilter`] once instead.
///
/// # Example
///
/// ```rust
/// use linkscout::{extract_links, Options};
///
/// let options = Options {
///     outlink_pattern: Some(r"'([^']+\.js)'".to_string()),
///     ..Options::default()
/// };
/// let links = extract_links("load('menu.js');", "", "http://h/app/main.js", &options)?;
/// assert_eq!(links[0].url, "http://h/app/menu.js");
/// # Ok::<(), linkscout::Error>(())
/// ```
pub fn extract_links(
    text: &str,
    anchor: &str,
    base_url: &str,
    options: &Options,
) -> Result<Vec<Outlink>> {
    let filter = JsLinkFilter::new(options.clone())?;
    Ok(filter.extract_links(text, anchor, base_url))
}
