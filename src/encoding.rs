//! Character encoding detection for raw page bytes.
//!
//! `parse_bytes` accepts undecoded HTML. The charset is taken from, in order:
//! a byte order mark, `<meta charset>`, or a `Content-Type` `http-equiv`
//! declaration within the first kilobyte. Everything else is read as UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// How far into the document charset declarations are looked for.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of raw HTML.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .iter()
        .filter_map(|pattern| pattern.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw HTML into a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use rs_declutter::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // decode() strips a matching BOM itself
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
