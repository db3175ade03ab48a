//! Relative-to-absolute path resolution.
//!
//! A deliberately syntactic join tailored to the crawler's base-URL
//! conventions: the base is always a folder-equivalent URL, `../` markers
//! ascend one folder level each, and anything the absolute-URL pattern
//! recognizes passes through untouched. The resolver does not collapse
//! `//`, does not treat queries or fragments specially, and does not
//! validate the result; unparsable output is discarded by the extractor's
//! URL validation step.

use crate::patterns::PatternSet;

/// Resolve a possibly-relative candidate path against a folder base URL.
///
/// When ascension runs out of `/` separators in the base, the resolver
/// clamps: it stops ascending, logs a warning, and joins what remains. The
/// leftover `../` markers then fail URL validation downstream.
#[must_use]
pub(crate) fn to_absolute(base: &str, candidate: &str, patterns: &PatternSet) -> String {
    if patterns.is_absolute(candidate) {
        return candidate.to_string();
    }

    let mut base = base;
    let mut candidate = candidate;
    while let Some(rest) = candidate.strip_prefix("../") {
        let Some(idx) = base.rfind('/') else {
            log::warn!("cannot ascend above {base:?} while resolving {candidate:?}");
            break;
        };
        base = &base[..idx];
        candidate = rest;
    }

    format!("{base}/{candidate}")
}

/// Truncate a base URL after its last `/`, turning a file URL into its
/// containing folder (`http://h/a/b/tree.js` -> `http://h/a/b`).
///
/// A base with no `/` at all is already as short as it gets; it is used
/// unchanged.
#[must_use]
pub(crate) fn folder_base(base: &str) -> &str {
    match base.rfind('/') {
        Some(idx) => &base[..idx],
        None => {
            log::debug!("base URL {base:?} has no path to truncate");
            base
        }
    }
}
