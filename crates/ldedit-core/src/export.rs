//! Export formatting.
//!
//! Export reflects the current document as-is; it is never gated on validity.

use crate::document::Document;

/// MIME type of a downloaded `.jsonld` file.
pub const EXPORT_MIME_TYPE: &str = "application/ld+json";

/// Opening marker of an embedded JSON-LD block.
pub const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;

/// Closing marker of an embedded JSON-LD block.
pub const SCRIPT_CLOSE: &str = "</script>";

/// Filename stem used when the document has no usable `@type`.
pub const FALLBACK_STEM: &str = "schema";

/// Two-space indented JSON in the document's own key order.
pub fn to_pretty_json(document: &Document) -> String {
    serde_json::to_string_pretty(document).expect("a map of JSON values always serializes")
}

/// The pretty JSON wrapped in a `<script type="application/ld+json">` block.
///
/// `</` and `<!--` inside string values are escaped so no value can end the
/// block early. The escaped text is still JSON with the same values.
pub fn to_script_tag(document: &Document) -> String {
    let json = escape_for_script(&to_pretty_json(document));
    format!("{SCRIPT_OPEN}\n{json}\n{SCRIPT_CLOSE}")
}

// `<` only occurs inside JSON strings, where both escapes are legal.
fn escape_for_script(json: &str) -> String {
    json.replace("<!--", "\\u003c!--").replace("</", "<\\/")
}

/// `<type>.jsonld`, or `schema.jsonld` when `@type` is missing or not a string.
///
/// Path separators and control characters in the type are replaced with `_`.
pub fn suggested_filename(document: &Document) -> String {
    let stem = match document.type_name() {
        Some(t) if !t.is_empty() => sanitize_stem(t),
        _ => FALLBACK_STEM.to_string(),
    };
    format!("{stem}.jsonld")
}

fn sanitize_stem(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
