//! Compiled pattern registry for link extraction.
//!
//! The three configured patterns are compiled exactly once from [`Options`]
//! and shared read-only across concurrent extraction calls; reconfiguration
//! means building a fresh `PatternSet`. Each pattern gets its own flags:
//! the eligibility pattern is case-sensitive with `.` matching newlines,
//! the absolute-URL pattern is case-insensitive, and the outlink pattern is
//! multi-line so `^`/`$` anchor per script line.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};
use crate::options::Options;

/// The compiled eligibility, absolute-URL, and outlink patterns.
///
/// Immutable and `Send + Sync`; one instance serves any number of threads.
#[derive(Debug)]
pub struct PatternSet {
    file_include: Regex,
    absolute_url: Regex,
    outlink: Option<Regex>,
}

impl PatternSet {
    /// Compile the configured patterns.
    ///
    /// A malformed pattern is a fatal configuration error: it is returned
    /// immediately rather than silently disabling extraction. The outlink
    /// pattern must carry at least one capturing group (group 1 yields the
    /// candidate); a blank or absent outlink pattern is valid and disables
    /// extraction.
    pub fn compile(options: &Options) -> Result<Self> {
        let file_include = RegexBuilder::new(&options.file_include_pattern)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| Error::Pattern {
                name: "file include",
                source,
            })?;

        let absolute_url = RegexBuilder::new(&options.absolute_url_pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| Error::Pattern {
                name: "absolute URL",
                source,
            })?;

        let outlink = match options.outlink_pattern.as_deref() {
            Some(pattern) if !pattern.trim().is_empty() => {
                let compiled = RegexBuilder::new(pattern)
                    .multi_line(true)
                    .build()
                    .map_err(|source| Error::Pattern {
                        name: "outlink",
                        source,
                    })?;
                // captures_len counts the implicit whole-match group 0.
                if compiled.captures_len() < 2 {
                    return Err(Error::MissingCaptureGroup);
                }
                Some(compiled)
            }
            _ => None,
        };

        Ok(Self {
            file_include,
            absolute_url,
            outlink,
        })
    }

    /// Does this base URL identify a page the filter should handle?
    #[must_use]
    pub fn handles(&self, base_url: &str) -> bool {
        self.file_include.is_match(base_url)
    }

    /// Is this candidate path already an absolute URL?
    #[must_use]
    pub fn is_absolute(&self, candidate: &str) -> bool {
        self.absolute_url.is_match(candidate)
    }

    /// The compiled outlink pattern, or `None` when extraction is disabled.
    #[must_use]
    pub(crate) fn outlink(&self) -> Option<&Regex> {
        self.outlink.as_ref()
    }

    /// True when an outlink pattern is configured.
    #[must_use]
    pub fn extraction_enabled(&self) -> bool {
        self.outlink.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(options: Options) -> PatternSet {
        PatternSet::compile(&options).unwrap()
    }

    #[test]
    fn default_file_include_matches_js_resources() {
        let patterns = compiled(Options::default());

        assert!(patterns.handles("http://localhost:8080/hello/f1/f2/tree_nodes.js"));
        assert!(patterns.handles("https://cdn.example.com/nav/menu.js"));
        assert!(!patterns.handles("http://example.com/index.html"));
        assert!(!patterns.handles("http://example.com/"));
    }

    #[test]
    fn default_absolute_pattern_recognizes_schemes_and_www() {
        let patterns = compiled(Options::default());

        assert!(patterns.is_absolute("http://example.com/a"));
        assert!(patterns.is_absolute("HTTPS://EXAMPLE.COM/a"));
        assert!(patterns.is_absolute("ftp://mirror.example.com/file"));
        assert!(patterns.is_absolute("www.example.com/a"));
        assert!(!patterns.is_absolute("../x/y.js"));
        assert!(!patterns.is_absolute("foldera/fileb.htm"));
    }

    #[test]
    fn blank_outlink_pattern_disables_extraction() {
        let patterns = compiled(Options::default());
        assert!(!patterns.extraction_enabled());

        let patterns = compiled(Options {
            outlink_pattern: Some("   ".to_string()),
            ..Options::default()
        });
        assert!(!patterns.extraction_enabled());
    }

    #[test]
    fn malformed_patterns_are_fatal() {
        let err = PatternSet::compile(&Options {
            file_include_pattern: "*.js".to_string(),
            ..Options::default()
        });
        assert!(matches!(err, Err(Error::Pattern { name: "file include", .. })));

        let err = PatternSet::compile(&Options {
            outlink_pattern: Some("([unclosed".to_string()),
            ..Options::default()
        });
        assert!(matches!(err, Err(Error::Pattern { name: "outlink", .. })));
    }

    #[test]
    fn outlink_pattern_without_group_is_rejected() {
        let err = PatternSet::compile(&Options {
            outlink_pattern: Some(r"https?://\S+".to_string()),
            ..Options::default()
        });
        assert!(matches!(err, Err(Error::MissingCaptureGroup)));
    }

    #[test]
    fn outlink_pattern_is_multi_line() {
        let patterns = compiled(Options {
            outlink_pattern: Some(r"^load\('([^']+)'\)$".to_string()),
            ..Options::default()
        });
        let outlink = patterns.outlink().unwrap();

        let text = "load('a.js')\nload('b.js')\n";
        assert_eq!(outlink.captures_iter(text).count(), 2);
    }

    #[test]
    fn pattern_set_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternSet>();
    }
}
