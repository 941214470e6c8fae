use encoding_rs::{SHIFT_JIS, UTF_8};

/// The exact content-type value the legacy pages declare in their
/// http-equiv meta tag.
pub const SHIFT_JIS_MARKER: &str = "text/html; charset=Shift_JIS";

/// Decode raw page bytes according to the declared content type.
///
/// Shift_JIS when the declared value carries the legacy marker, UTF-8
/// otherwise. Malformed sequences decode by substitution; this never fails.
pub fn decode(raw: &[u8], declared_content_type: &str) -> String {
    let encoding = if declared_content_type.contains(SHIFT_JIS_MARKER) {
        SHIFT_JIS
    } else {
        UTF_8
    };
    let (text, _, _) = encoding.decode(raw);
    text.into_owned()
}

/// Work out the declared content type for a fetched page.
///
/// The origin server sends a bare `text/html` header; the charset lives in
/// each page's own meta tag. A charset-bearing header wins, otherwise the
/// body is sniffed (lossily, as UTF-8) for the Shift_JIS marker.
pub fn declared_content_type(header: &str, raw: &[u8]) -> String {
    if header.contains("charset=") {
        return header.to_string();
    }
    if String::from_utf8_lossy(raw).contains(SHIFT_JIS_MARKER) {
        return SHIFT_JIS_MARKER.to_string();
    }
    if header.is_empty() {
        "text/html".to_string()
    } else {
        header.to_string()
    }
}
