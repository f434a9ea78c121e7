//! Charset fallback decoding for fetched page bytes
//!
//! Response bodies are decoded by trying a list of candidate charsets in
//! order and keeping the first strict decode that succeeds. Replacement
//! characters are never substituted; a body that is invalid for every
//! candidate decodes to nothing.

use encoding_rs::Encoding;

/// Charsets tried when the caller does not supply its own list
pub const DEFAULT_CHARSETS: &[&str] = &["utf-8"];

/// Decodes raw page bytes using the first matching candidate charset
///
/// Candidates are tried strictly in the given order; the first successful
/// decode wins and later candidates are never attempted. A candidate that
/// fails (invalid byte sequence, or an unrecognized charset label) is
/// logged and skipped.
///
/// # Arguments
///
/// * `raw` - The response body bytes, if any were received
/// * `charsets` - Candidate charset labels, in preference order
///
/// # Returns
///
/// * `Some(String)` - The first successful decode
/// * `None` - No bytes, or every candidate failed
///
/// # Example
///
/// ```
/// use servu_versions::decode::{decode_page, DEFAULT_CHARSETS};
///
/// let text = decode_page(Some(b"Serv-U 15.1.6"), DEFAULT_CHARSETS);
/// assert_eq!(text.as_deref(), Some("Serv-U 15.1.6"));
/// ```
pub fn decode_page(raw: Option<&[u8]>, charsets: &[&str]) -> Option<String> {
    let raw = raw?;

    for charset in charsets {
        let Some(encoding) = Encoding::for_label(charset.as_bytes()) else {
            tracing::error!("unknown charset label {}!", charset);
            continue;
        };

        match encoding.decode_without_bom_handling_and_without_replacement(raw) {
            Some(text) => return Some(text.into_owned()),
            None => tracing::error!("content decode error by using {}!", charset),
        }
    }

    None
}
