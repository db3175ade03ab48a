//! Budgeted pattern scan over one text blob.
//!
//! The outlink pattern is applied repeatedly over the text, each match
//! resuming where the previous one ended. A wall-clock budget bounds the
//! whole scan: pathological pattern/input combinations stop early and
//! return whatever was found, never an error. A single malformed candidate
//! is skipped, never fatal.

use std::time::{Duration, Instant};

use crate::patterns::PatternSet;
use crate::resolver;
use crate::result::Outlink;

/// Extract URL-shaped literals from `text`, resolving each against the
/// folder form of `base`.
///
/// Returns links in match order. With no outlink pattern configured the
/// scan is a no-op. Identical `(text, base)` inputs yield identical output;
/// no state is carried between calls.
pub(crate) fn scan_text(
    text: &str,
    anchor: &str,
    base: &str,
    patterns: &PatternSet,
    budget: Duration,
) -> Vec<Outlink> {
    let Some(outlink) = patterns.outlink() else {
        return Vec::new();
    };

    let start = Instant::now();
    // The base always arrives as a file URL; links resolve against its folder.
    let base = resolver::folder_base(base);

    let mut links = Vec::new();
    let mut matches = outlink.captures_iter(text);
    loop {
        // Checked before every match attempt; cooperative, so the scan can
        // overshoot by at most one attempt's worst case.
        if start.elapsed() >= budget {
            log::warn!(
                "time limit exceeded scanning for outlinks; returning {} found so far",
                links.len()
            );
            break;
        }
        let Some(caps) = matches.next() else {
            break;
        };
        let Some(candidate) = caps.get(1) else {
            log::debug!("outlink pattern matched without capturing a candidate");
            continue;
        };

        let resolved = resolver::to_absolute(base, candidate.as_str(), patterns);
        // Unparsable candidates are dropped; the scan continues.
        match Outlink::new(&resolved, anchor) {
            Ok(link) => {
                log::trace!("extracted outlink {} against base {base}", link.url);
                links.push(link);
            }
            Err(err) => {
                log::debug!("skipping candidate {resolved:?}: {err}");
            }
        }
    }

    links
}
