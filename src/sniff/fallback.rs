//! Generic content-type classification used when no signature matches.
//!
//! [`InferClassifier`] recognizes markup and byte order marks itself, hands
//! binary content to `infer`, and finally decides between plain text and
//! `application/octet-stream`.

use super::config::DEFAULT_SNIFF_LEN;
use crate::core::OCTET_STREAM;
use tracing::trace;

/// Plain text result, also used for UTF-8 BOMs.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

const HTML: &str = "text/html; charset=utf-8";
const XML: &str = "text/xml; charset=utf-8";

/// A total classifier: any buffer in, a MIME type out.
///
/// Implementations must never fail and should return
/// `application/octet-stream` when they cannot identify the content.
pub trait ContentClassifier: Send + Sync {
    fn classify(&self, data: &[u8]) -> String;
}

impl<F> ContentClassifier for F
where
    F: Fn(&[u8]) -> String + Send + Sync,
{
    fn classify(&self, data: &[u8]) -> String {
        self(data)
    }
}

/// Tags that mark a document as HTML, compared case-insensitively.
const HTML_TAGS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Byte order marks and the charset each implies.
const BOMS: &[(&[u8], &str)] = &[
    (b"\xEF\xBB\xBF", TEXT_PLAIN_UTF8),
    (b"\xFE\xFF", "text/plain; charset=utf-16be"),
    (b"\xFF\xFE", "text/plain; charset=utf-16le"),
];

fn is_ws(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0C | b'\r' | b' ')
}

/// Bytes that mark content as binary rather than text.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// HTML or XML, given input with leading whitespace already stripped.
fn markup(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(b"<?xml") {
        return Some(XML);
    }
    HTML_TAGS
        .iter()
        .any(|tag| {
            data.len() > tag.len()
                && data[..tag.len()].eq_ignore_ascii_case(tag)
                && matches!(data[tag.len()], b' ' | b'>')
        })
        .then_some(HTML)
}

fn byte_order_mark(data: &[u8]) -> Option<&'static str> {
    // A BOM needs at least one following byte to count
    BOMS.iter()
        .find(|(bom, _)| data.len() > bom.len() && data.starts_with(bom))
        .map(|&(_, mime)| mime)
}

/// `infer` for binary formats, with markup, BOM and plain-text checks
/// around it. Looks at the first 512 bytes only.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferClassifier;

impl InferClassifier {
    /// Classify without allocating.
    pub fn detect(data: &[u8]) -> &'static str {
        let data = &data[..data.len().min(DEFAULT_SNIFF_LEN)];
        let first_non_ws = data.iter().position(|&b| !is_ws(b)).unwrap_or(data.len());
        let trimmed = &data[first_non_ws..];

        if let Some(mime) = markup(trimmed).or_else(|| byte_order_mark(data)) {
            return mime;
        }

        if let Some(kind) = infer::get(data) {
            trace!(mime = kind.mime_type(), ext = kind.extension(), "infer classification");
            return kind.mime_type();
        }

        if trimmed.iter().any(|&b| is_binary_byte(b)) {
            OCTET_STREAM
        } else {
            TEXT_PLAIN_UTF8
        }
    }
}

impl ContentClassifier for InferClassifier {
    fn classify(&self, data: &[u8]) -> String {
        let mime = Self::detect(data);
        trace!(mime, "generic classification");
        mime.to_string()
    }
}
