//! Content-type classification for response bodies.

use reqwest::header::{CONTENT_TYPE, HeaderMap};

/// Semantic category of a response body, independent of the exact
/// media-type string that declared it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Text,
    Blob,
    ArrayBuffer,
    Bytes,
    FormData,
    /// Not produced by [`classify`] today; decoded as plain text.
    Xml,
    /// Not produced by [`classify`] today; decoded as plain text.
    Html,
}

/// Maps a response's declared media type to a [`ContentKind`].
///
/// Parameters after the first `;` (charset, boundary) are ignored. The
/// `type/subtype` pair must match the table exactly, case included; any
/// unmatched, absent, or malformed declaration falls back to
/// [`ContentKind::Text`]. This never fails.
pub fn classify(headers: &HeaderMap) -> ContentKind {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return ContentKind::Text;
    };
    let Ok(value) = value.to_str() else {
        return ContentKind::Text;
    };

    let essence = value.split(';').next().unwrap_or_default();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return ContentKind::Text;
    };
    if kind.is_empty() || subtype.is_empty() {
        return ContentKind::Text;
    }

    match (kind, subtype) {
        ("application", "json") => ContentKind::Json,
        ("application", "bytes") => ContentKind::Bytes,
        ("application", "form-data") => ContentKind::FormData,
        ("application", "arraybuffer") => ContentKind::ArrayBuffer,
        ("application", "blob") => ContentKind::Blob,
        _ => ContentKind::Text,
    }
}
