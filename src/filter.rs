//! Page-level entry points for the link filter.
//!
//! `JsLinkFilter` compiles the configured patterns once and then serves any
//! number of concurrent calls: the HTML filter path (walk a document tree
//! for embedded script), the standalone-JS path (the whole resource is the
//! script), and direct text scans.

use std::time::Duration;

use dom_query::Document;

use crate::encoding;
use crate::error::Result;
use crate::extractor::scan_text;
use crate::options::Options;
use crate::patterns::PatternSet;
use crate::result::{Outlink, ParseStatus, ScriptParse};
use crate::walker;

/// Heuristic JavaScript link filter.
///
/// Holds the configuration and the compiled [`PatternSet`]; both are
/// immutable after construction, so one instance can be shared across
/// worker threads.
#[derive(Debug)]
pub struct JsLinkFilter {
    options: Options,
    patterns: PatternSet,
}

impl JsLinkFilter {
    /// Compile `options` into a ready-to-use filter.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed pattern configuration — a broken pattern
    /// must not silently disable crawling.
    pub fn new(options: Options) -> Result<Self> {
        let patterns = PatternSet::compile(&options)?;
        Ok(Self { options, patterns })
    }

    /// The configuration this filter was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The compiled pattern registry.
    #[must_use]
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Does this base URL identify a page the filter should handle?
    #[must_use]
    pub fn handles(&self, base_url: &str) -> bool {
        self.patterns.handles(base_url)
    }

    /// Scan one text blob for outlinks, resolving candidates against the
    /// folder form of `base_url` and labeling each record with `anchor`.
    #[must_use]
    pub fn extract_links(&self, text: &str, anchor: &str, base_url: &str) -> Vec<Outlink> {
        scan_text(text, anchor, base_url, &self.patterns, self.budget())
    }

    /// Filter an HTML page given as a string.
    ///
    /// Parses the markup and delegates to [`JsLinkFilter::filter_document`].
    #[must_use]
    pub fn filter_html(&self, base_url: &str, html: &str, existing: &[Outlink]) -> Vec<Outlink> {
        if !self.handles(base_url) {
            return existing.to_vec();
        }
        let doc = Document::from(html);
        self.filter_document(base_url, &doc, existing)
    }

    /// Filter a parsed HTML document, prepending discovered links to
    /// `existing`.
    ///
    /// Ineligible pages and pages yielding nothing return `existing`
    /// unchanged. A failed walk (tree too deep) is logged and demoted to
    /// "no more links found": links gathered before the failure are kept.
    #[must_use]
    pub fn filter_document(
        &self,
        base_url: &str,
        doc: &Document,
        existing: &[Outlink],
    ) -> Vec<Outlink> {
        if !self.handles(base_url) {
            return existing.to_vec();
        }

        let mut found = Vec::new();
        let root = doc.select("html");
        if let Some(node) = root.nodes().first() {
            if let Err(err) = walker::walk(node, base_url, &self.patterns, &self.options, 0, &mut found)
            {
                log::error!("aborted walk of {base_url}: {err}");
            }
        }

        if found.is_empty() {
            return existing.to_vec();
        }
        found.extend(existing.iter().cloned());
        found
    }

    /// Parse a standalone JavaScript resource.
    ///
    /// An ineligible base URL yields a failed status and no links,
    /// independent of the text. Otherwise the whole resource is scanned as
    /// one script and the title is derived from its first line.
    #[must_use]
    pub fn parse_js(&self, base_url: &str, text: &str) -> ScriptParse {
        if !self.handles(base_url) {
            return ScriptParse {
                title: String::new(),
                outlinks: Vec::new(),
                status: ParseStatus::Failed {
                    reason: format!("content not JavaScript: '{base_url}'"),
                },
            };
        }

        let outlinks = self.extract_links(text, "", base_url);
        let title = first_line_title(text, self.options.max_title_len);
        ScriptParse {
            title,
            outlinks,
            status: ParseStatus::Success,
        }
    }

    /// Parse a standalone JavaScript resource from raw fetched bytes.
    ///
    /// Transcodes to UTF-8 first (BOM-aware, lossy), then behaves like
    /// [`JsLinkFilter::parse_js`].
    #[must_use]
    pub fn parse_js_bytes(&self, base_url: &str, bytes: &[u8]) -> ScriptParse {
        let text = encoding::transcode_to_utf8(bytes);
        self.parse_js(base_url, &text)
    }

    fn budget(&self) -> Duration {
        Duration::from_millis(self.options.budget_millis)
    }
}

/// Title of a script: its first line, truncated to `max_len` characters.
/// Falls back to the whole (truncated) text when there is no newline.
fn first_line_title(text: &str, max_len: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    line.chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_first_line() {
        assert_eq!(first_line_title("// tree menu\nvar x;", 80), "// tree menu");
        assert_eq!(first_line_title("single line only", 80), "single line only");
        assert_eq!(first_line_title("", 80), "");
        assert_eq!(first_line_title("\nsecond", 80), "");
    }

    #[test]
    fn title_truncation_is_char_boundary_safe() {
        let text = "é".repeat(100);
        let title = first_line_title(&text, 80);
        assert_eq!(title.chars().count(), 80);
        assert!(title.chars().all(|c| c == 'é'));
    }
}
