//! Document-tree walk locating JavaScript-bearing nodes and attributes.
//!
//! Depth-first, pre-order, read-only. `<script>` elements are consumed as
//! one concatenated blob; HTML event-handler attributes (`on*`) and
//! `javascript:` hrefs are scanned in place; everything else just recurses.
//! Link records accumulate in document order and are not deduplicated here.

use std::time::Duration;

use dom_query::NodeRef;
use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::extractor::scan_text;
use crate::options::Options;
use crate::patterns::PatternSet;
use crate::result::Outlink;

/// Walk `node` and its subtree, appending discovered links to `links`.
///
/// Recursion depth is bounded by `Options::max_walk_depth`; a deeper tree
/// aborts the walk with [`Error::TreeTooDeep`], leaving the links gathered
/// so far in `links`.
pub(crate) fn walk(
    node: &NodeRef,
    base: &str,
    patterns: &PatternSet,
    options: &Options,
    depth: usize,
    links: &mut Vec<Outlink>,
) -> Result<()> {
    if depth > options.max_walk_depth {
        return Err(Error::TreeTooDeep(options.max_walk_depth));
    }
    let budget = Duration::from_millis(options.budget_millis);

    if node.is_element() {
        if let Some(name) = node.node_name() {
            if name.eq_ignore_ascii_case("script") {
                let children = node.children();
                if !children.is_empty() {
                    let mut script = StrTendril::new();
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            script.push_char('\n');
                        }
                        script.push_tendril(&child.text());
                    }
                    links.extend(scan_text(&script, "", base, patterns, budget));
                    // The blob was consumed whole; descending again would
                    // double-extract.
                    return Ok(());
                }
            } else {
                for attr in node.attrs() {
                    let attr_name: &str = &attr.name.local;
                    let value: &str = &attr.value;
                    if attr_name.starts_with("on") {
                        links.extend(scan_text(value, "", base, patterns, budget));
                    } else if attr_name.eq_ignore_ascii_case("href")
                        && value.to_lowercase().contains("javascript:")
                    {
                        links.extend(scan_text(value, "", base, patterns, budget));
                    }
                }
            }
        }
    }

    for child in node.children() {
        walk(&child, base, patterns, options, depth + 1, links)?;
    }
    Ok(())
}
