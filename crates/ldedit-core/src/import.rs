//! Import resolution.
//!
//! Imported files are either a bare JSON document or an HTML page carrying a
//! `<script type="application/ld+json">` block. Resolution never fails: the
//! outcome is a document, or a warning explaining why there is none.
//!
//! Resolution order:
//! 1. parse the whole text as a JSON object
//! 2. otherwise take the first embedded script block (non-greedy) and parse
//!    its contents
//! 3. otherwise report that nothing usable was found
//!
//! [`adopt_import`] then decides the effective type: the document's own
//! `@type` when the catalog knows it, or the fallback type with a fresh
//! minimal document.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::defaults;
use crate::document::{is_blank, Document};
use crate::export::{SCRIPT_CLOSE, SCRIPT_OPEN};
use crate::keys;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?s){}(.*?){}",
        regex::escape(SCRIPT_OPEN),
        regex::escape(SCRIPT_CLOSE)
    );
    Regex::new(&pattern).expect("script block pattern is valid")
});

/// Name reported for an imported document with no usable `@type`.
pub const MISSING_TYPE_NAME: &str = "Thing";

/// Why an import produced no document, or produced a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ImportWarning {
    /// A script block was found but its contents are not a JSON object.
    ScriptNotJson,
    /// Neither the text nor any embedded script block is a document.
    NothingFound,
    /// The input exceeds the configured import limit.
    TooLarge { bytes: usize, limit: usize },
    /// The document's `@type` is not in the catalog.
    UnrecognizedType { found: String, fallback: String },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScriptNotJson => f.write_str("found script tag but content is not valid JSON"),
            Self::NothingFound => f.write_str("no valid document or embedded script tag found"),
            Self::TooLarge { bytes, limit } => {
                write!(f, "import is too large ({bytes} bytes > limit {limit})")
            }
            Self::UnrecognizedType { found, fallback } => write!(
                f,
                "loaded schema type \"{found}\" is not recognized; falling back to {fallback}"
            ),
        }
    }
}

/// Outcome of [`resolve_import`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResolution {
    pub document: Option<Document>,
    pub warning: Option<ImportWarning>,
}

impl ImportResolution {
    fn found(document: Document) -> Self {
        Self {
            document: Some(document),
            warning: None,
        }
    }

    fn failed(warning: ImportWarning) -> Self {
        Self {
            document: None,
            warning: Some(warning),
        }
    }
}

/// Resolve raw file content with the default size limit.
pub fn resolve_import(raw_text: &str) -> ImportResolution {
    resolve_import_with_limit(raw_text, defaults::MAX_TEXT_BYTES)
}

/// Resolve raw file content, rejecting input larger than `max_bytes`.
pub fn resolve_import_with_limit(raw_text: &str, max_bytes: usize) -> ImportResolution {
    if raw_text.len() > max_bytes {
        return ImportResolution::failed(ImportWarning::TooLarge {
            bytes: raw_text.len(),
            limit: max_bytes,
        });
    }

    if let Ok(document) = Document::parse(raw_text) {
        return ImportResolution::found(document);
    }

    let contents = SCRIPT_BLOCK
        .captures(raw_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty());

    match contents {
        Some(inner) => match Document::parse(inner) {
            Ok(document) => ImportResolution::found(document),
            Err(_) => ImportResolution::failed(ImportWarning::ScriptNotJson),
        },
        None => ImportResolution::failed(ImportWarning::NothingFound),
    }
}

/// Effective type and document after an import.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptedImport {
    pub active_type: String,
    pub document: Document,
    pub warning: Option<ImportWarning>,
}

/// Decide the effective type of a resolved import.
///
/// Returns `None` when the resolution carries no document; the caller keeps its
/// current state and surfaces `resolution.warning`.
pub fn adopt_import(
    resolution: ImportResolution,
    catalog: &Catalog,
    fallback_type: &str,
) -> Option<AdoptedImport> {
    let document = resolution.document?;

    let known = document
        .type_name()
        .filter(|t| catalog.contains(t))
        .map(str::to_string);
    if let Some(active_type) = known {
        return Some(AdoptedImport {
            active_type,
            document,
            warning: None,
        });
    }

    let found = match document.get(keys::TYPE) {
        Some(v) if is_blank(v) => MISSING_TYPE_NAME.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => MISSING_TYPE_NAME.to_string(),
    };
    tracing::warn!(found = %found, fallback = fallback_type, "unrecognized imported type");

    Some(AdoptedImport {
        active_type: fallback_type.to_string(),
        document: Document::minimal(fallback_type),
        warning: Some(ImportWarning::UnrecognizedType {
            found,
            fallback: fallback_type.to_string(),
        }),
    })
}
