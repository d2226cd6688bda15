//! Editor session: one canonical document, two projections.
//!
//! The session owns the canonical [`Document`] and the selected type. The form
//! projection ([`EditorSession::form_fields`]) is derived on demand; the raw-text
//! projection is stored, since it may hold half-typed text that does not parse.
//!
//! Every mutation goes through one commit step, which re-runs the validator
//! and regenerates the raw text unless the change came from parsing that same
//! raw text. Invalid raw text never reaches the document: it is kept
//! as typed and the document stays at its last valid value.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Catalog, PropertyKind, SchemaDefinition};
use crate::config::{validate_config_for, EditorConfig};
use crate::document::{json_kind, Document};
use crate::errors::{LdError, LdResult};
use crate::export::to_pretty_json;
use crate::import::{adopt_import, resolve_import_with_limit, ImportWarning};
use crate::validate::{validate, ValidationVerdict};

/// What caused a document change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOrigin {
    FormField,
    RawText,
    TypeSwitch,
    Import,
    Replace,
}

/// Result of a raw-text edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTextOutcome {
    /// The text parsed as a JSON object and is now the canonical document.
    Applied,
    /// The text was kept but the document was not changed.
    Rejected { reason: String },
}

/// One form input: a declared property and its current value as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub kind: PropertyKind,
    pub value: String,
}

/// Result of [`EditorSession::import_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// True when the session state was replaced.
    pub applied: bool,
    pub active_type: String,
    pub warning: Option<ImportWarning>,
}

/// A single-user editing session over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct EditorSession<'c> {
    catalog: &'c Catalog,
    config: EditorConfig,
    active_type: String,
    document: Document,
    raw_text: String,
    verdict: ValidationVerdict,
}

impl<'c> EditorSession<'c> {
    /// Start a session on the minimal document of `config.default_type`.
    pub fn new(catalog: &'c Catalog, config: EditorConfig) -> LdResult<Self> {
        validate_config_for(&config, catalog)?;

        let active_type = config.default_type.clone();
        let document = Document::minimal(&active_type);
        let verdict = validate(&document, &active_type, catalog);
        let raw_text = to_pretty_json(&document);

        Ok(Self {
            catalog,
            config,
            active_type,
            document,
            raw_text,
            verdict,
        })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_type(&self) -> &str {
        &self.active_type
    }

    pub fn active_schema(&self) -> Option<&'c SchemaDefinition> {
        self.catalog.get(&self.active_type)
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn verdict(&self) -> &ValidationVerdict {
        &self.verdict
    }

    /// True when the raw text parses to a document equal to the canonical one.
    pub fn raw_text_in_sync(&self) -> bool {
        Document::parse(&self.raw_text).is_ok_and(|d| d == self.document)
    }

    /// The form projection: one field per declared property of the active type.
    pub fn form_fields(&self) -> Vec<FormField> {
        let Some(schema) = self.active_schema() else {
            return Vec::new();
        };

        schema
            .properties
            .iter()
            .map(|p| FormField {
                name: p.name.clone(),
                kind: p.kind,
                value: match self.document.get(&p.name) {
                    None | Some(Value::Null) => String::new(),
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                },
            })
            .collect()
    }

    /// Form edit: set `key` to `value`, or remove it when `value` is empty.
    pub fn set_property_value(&mut self, key: &str, value: &str) -> &ValidationVerdict {
        let mut next = self.document.clone();
        if value.is_empty() {
            next.remove(key);
        } else {
            next.set(key, value);
        }
        self.commit(next, ChangeOrigin::FormField)
    }

    /// Replace the whole document. No pre-validation is applied.
    pub fn replace_whole_document(&mut self, candidate: Document) -> &ValidationVerdict {
        self.commit(candidate, ChangeOrigin::Replace)
    }

    /// Select another type and start over from its minimal document.
    ///
    /// All previous property values are discarded. Unknown types are rejected
    /// and leave the session untouched.
    pub fn set_active_type(&mut self, type_name: &str) -> LdResult<&ValidationVerdict> {
        if !self.catalog.contains(type_name) {
            return Err(LdError::unknown_type(type_name));
        }
        self.active_type = type_name.to_string();
        Ok(self.commit(Document::minimal(type_name), ChangeOrigin::TypeSwitch))
    }

    /// Raw-text edit. The text is always kept; the document follows only when
    /// the text is a JSON object.
    pub fn edit_raw_text(&mut self, text: impl Into<String>) -> RawTextOutcome {
        let text = text.into();

        let parsed = if text.len() > self.config.limits.max_raw_text_bytes {
            Err(format!(
                "raw text too large ({} bytes > limit {})",
                text.len(),
                self.config.limits.max_raw_text_bytes
            ))
        } else {
            serde_json::from_str::<Value>(&text)
                .map_err(|e| format!("invalid JSON: {e}"))
                .and_then(|v| match v {
                    Value::Object(m) => Ok(Document::from(m)),
                    other => Err(format!(
                        "expected a JSON object, got {}",
                        json_kind(&other)
                    )),
                })
        };

        self.raw_text = text;

        match parsed {
            Ok(document) => {
                self.commit(document, ChangeOrigin::RawText);
                RawTextOutcome::Applied
            }
            Err(reason) => {
                tracing::debug!(%reason, "raw text rejected; document unchanged");
                RawTextOutcome::Rejected { reason }
            }
        }
    }

    /// Import file content: resolve it, pick the effective type and apply it.
    ///
    /// When nothing usable is found the session is left as it was and the
    /// report carries the warning.
    pub fn import_text(&mut self, raw: &str) -> ImportReport {
        let resolution = resolve_import_with_limit(raw, self.config.limits.max_import_bytes);
        let failure = resolution.warning.clone();

        match adopt_import(resolution, self.catalog, &self.config.default_type) {
            Some(adopted) => {
                self.active_type = adopted.active_type;
                self.commit(adopted.document, ChangeOrigin::Import);
                ImportReport {
                    applied: true,
                    active_type: self.active_type.clone(),
                    warning: adopted.warning,
                }
            }
            None => {
                if let Some(w) = &failure {
                    tracing::warn!(warning = %w, "import produced no document");
                }
                ImportReport {
                    applied: false,
                    active_type: self.active_type.clone(),
                    warning: failure,
                }
            }
        }
    }

    /// Store a new canonical document, re-validate, and refresh the raw text
    /// unless the change came from parsing it.
    fn commit(&mut self, document: Document, origin: ChangeOrigin) -> &ValidationVerdict {
        self.document = document;
        self.verdict = validate(&self.document, &self.active_type, self.catalog);

        if origin != ChangeOrigin::RawText {
            self.raw_text = to_pretty_json(&self.document);
        }

        tracing::debug!(
            origin = ?origin,
            active_type = %self.active_type,
            keys = self.document.len(),
            valid = self.verdict.is_valid,
            "document committed"
        );

        &self.verdict
    }
}
