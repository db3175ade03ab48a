//! Result types for link extraction output.

use serde::{Deserialize, Serialize};
use url::Url;

/// A discovered hyperlink target plus its anchor/label text.
///
/// Constructed only through [`Outlink::new`], which validates the target
/// URL; a record with an unparsable URL is never created. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlink {
    /// Absolute, syntactically valid target URL (in `url::Url` normalized
    /// string form).
    pub url: String,

    /// Anchor/label text associated with the link; empty for links lifted
    /// out of script text.
    pub anchor: String,
}

impl Outlink {
    /// Validate `url` and build a link record.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `url` is not a valid absolute URL.
    pub fn new(url: &str, anchor: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url)?;
        Ok(Self {
            url: parsed.to_string(),
            anchor: anchor.to_string(),
        })
    }
}

/// Outcome of parsing one standalone JavaScript resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseStatus {
    /// The resource was eligible and was scanned.
    Success,

    /// The resource was not handled; `reason` is human-readable.
    Failed {
        /// Why the resource was rejected.
        reason: String,
    },
}

impl ParseStatus {
    /// True for [`ParseStatus::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of parsing a standalone JavaScript resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptParse {
    /// Title derived from the script's first line, truncated to the
    /// configured maximum length. Empty on failure.
    pub title: String,

    /// Outlinks discovered in the script text, in scan order. Empty on
    /// failure.
    pub outlinks: Vec<Outlink>,

    /// Success or failure of the parse.
    pub status: ParseStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlink_new_normalizes_valid_urls() {
        let link = Outlink::new("http://h/p/x/y.js", "menu").unwrap();
        assert_eq!(link.url, "http://h/p/x/y.js");
        assert_eq!(link.anchor, "menu");
    }

    #[test]
    fn outlink_new_rejects_relative_paths() {
        assert!(Outlink::new("../x/y.js", "").is_err());
        assert!(Outlink::new("foldera/fileb", "").is_err());
        assert!(Outlink::new("", "").is_err());
    }

    #[test]
    fn parse_status_success_check() {
        assert!(ParseStatus::Success.is_success());
        assert!(!ParseStatus::Failed {
            reason: "content not JavaScript".to_string()
        }
        .is_success());
    }
}
