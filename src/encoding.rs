//! Character encoding handling for raw script resources.
//!
//! Fetched `.js` content arrives as bytes. Unlike HTML there is no meta
//! charset declaration to consult, so detection is byte-order-mark only,
//! with UTF-8 as the web default. Invalid sequences are replaced with the
//! Unicode replacement character rather than causing errors.

use encoding_rs::{Encoding, UTF_8};

/// Transcode raw script bytes to a UTF-8 string.
///
/// A leading BOM selects the encoding (and is stripped); otherwise the
/// bytes are decoded as UTF-8 with lossy replacement.
///
/// # Examples
///
/// ```
/// use linkscout::encoding::transcode_to_utf8;
///
/// let script = b"var url = 'menu.js';";
/// assert_eq!(transcode_to_utf8(script), "var url = 'menu.js';");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, bom_len),
        None => (UTF_8, 0),
    };

    let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        log::debug!(
            "replaced malformed {} sequences while transcoding script content",
            encoding.name()
        );
    }
    decoded.into_owned()
}
