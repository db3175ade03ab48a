//! Configuration options for link extraction.
//!
//! The `Options` struct carries the three pattern strings supplied by the
//! host crawler's configuration plus the scan and traversal limits. Compile
//! the patterns once with [`crate::PatternSet::compile`] (or construct a
//! [`crate::JsLinkFilter`], which does it for you) and share the result
//! across calls.

use serde::Deserialize;

use crate::error::Result;

/// Default eligibility pattern: base URLs naming a JavaScript resource.
pub const DEFAULT_FILE_INCLUDE_PATTERN: &str = r"\.js$";

/// Default absolute-URL pattern: a candidate beginning with an address
/// scheme (or a scheme-less `www.` host) is already absolute.
pub const DEFAULT_ABSOLUTE_URL_PATTERN: &str = r"^(?:[a-z][a-z0-9+.-]*://|www\.)";

/// Configuration options for link extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use linkscout::Options;
///
/// let options = Options {
///     outlink_pattern: Some(r#"["']([^"']+\.js)["']"#.to_string()),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Pattern deciding whether a page's base URL identifies it as a
    /// JavaScript resource worth filtering.
    ///
    /// Default: `\.js$`
    pub file_include_pattern: String,

    /// Pattern recognizing candidate paths that are already absolute URLs
    /// and must be kept unchanged by resolution.
    ///
    /// Default: `^(?:[a-z][a-z0-9+.-]*://|www\.)`
    pub absolute_url_pattern: String,

    /// Pattern whose first capturing group yields a candidate URL or path
    /// from raw script text.
    ///
    /// Extraction is disabled while this is `None` or blank: scans return
    /// empty results without error.
    ///
    /// Default: `None`
    pub outlink_pattern: Option<String>,

    /// Wall-clock budget for one scan of one text blob, in milliseconds.
    ///
    /// When exceeded the scan stops and returns whatever it has found so
    /// far; partial results are expected for adversarial input.
    ///
    /// Default: `60_000`
    pub budget_millis: u64,

    /// Maximum length, in characters, of the title derived from a
    /// standalone script's first line.
    ///
    /// Default: `80`
    pub max_title_len: usize,

    /// Maximum document-tree recursion depth for the walker.
    ///
    /// Deeper trees abort the walk with a tree-too-deep condition instead
    /// of overflowing the call stack.
    ///
    /// Default: `100`
    pub max_walk_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_include_pattern: DEFAULT_FILE_INCLUDE_PATTERN.to_string(),
            absolute_url_pattern: DEFAULT_ABSOLUTE_URL_PATTERN.to_string(),
            outlink_pattern: None,
            budget_millis: 60_000,
            max_title_len: 80,
            max_walk_depth: 100,
        }
    }
}

impl Options {
    /// Load options from a JSON configuration document.
    ///
    /// Missing fields take their defaults, so a host only has to carry the
    /// keys it overrides:
    ///
    /// ```rust
    /// use linkscout::Options;
    ///
    /// let options = Options::from_json(r#"{"outlink_pattern": "'([^']+)'"}"#)?;
    /// assert_eq!(options.budget_millis, 60_000);
    /// # Ok::<(), linkscout::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
