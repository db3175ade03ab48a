//! Error types for linkscout.
//!
//! Configuration problems (bad patterns, bad config documents) are the only
//! fatal errors. Everything that can go wrong while scanning a single text
//! blob is recovered in place and never surfaces as an `Error`.

/// Error type for configuration and traversal operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured pattern string failed to compile.
    #[error("invalid {name} pattern: {source}")]
    Pattern {
        /// Which of the three configured patterns failed.
        name: &'static str,
        /// The underlying regex compilation error.
        source: regex::Error,
    },

    /// The outlink pattern has no capturing group to yield a candidate.
    #[error("outlink pattern must contain a capturing group for the candidate URL")]
    MissingCaptureGroup,

    /// A configuration document failed to deserialize.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Document tree recursion exceeded the configured depth bound.
    #[error("document tree exceeds maximum walk depth of {0}")]
    TreeTooDeep(usize),
}

/// Result type alias for linkscout operations.
pub type Result<T> = std::result::Result<T, Error>;
