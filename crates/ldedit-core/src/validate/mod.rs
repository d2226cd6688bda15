//! Document validation.
//!
//! [`validate`] maps a document and a selected type to a [`ValidationVerdict`].
//! It never fails: every problem becomes a [`Violation`] in the verdict.
//!
//! Checks, in report order:
//! 1. `@context` must be the schema.org context string
//! 2. `@type` must equal the selected type
//! 3. each non-reserved, non-blank property that the selected type declares must
//!    pass the format check for its declared kind, in document key order
//!
//! Unknown properties are kept and ignored. A type missing from the catalog
//! declares no properties, so only checks 1 and 2 apply.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{Catalog, PropertyKind};
use crate::document::{is_blank, Document};
use crate::{keys, SCHEMA_ORG_CONTEXT};

pub mod format;

/// Summary shown when a document has no violations.
pub const VALID_MESSAGE: &str = "JSON-LD appears to be valid.";

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Violation {
    /// `@context` is missing or not the schema.org context.
    Context,
    /// `@type` is missing or differs from the selected type.
    TypeMismatch { expected: String },
    /// A declared property has a value that does not match its kind.
    Format { property: String, kind: PropertyKind },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context => write!(f, "@context must be \"{SCHEMA_ORG_CONTEXT}\"."),
            Self::TypeMismatch { expected } => write!(f, "@type should be \"{expected}\"."),
            Self::Format { property, kind } => write!(
                f,
                "Property '{property}' has an invalid format for type '{kind}'."
            ),
        }
    }
}

/// Validity flag plus ordered violations for one (document, type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub errors: Vec<Violation>,
}

impl ValidationVerdict {
    fn from_errors(errors: Vec<Violation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable error strings, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// All messages joined by a space, or [`VALID_MESSAGE`].
    pub fn summary(&self) -> String {
        if self.is_valid {
            VALID_MESSAGE.to_string()
        } else {
            self.messages().join(" ")
        }
    }
}

/// Validate `document` against `type_name` using `catalog`.
pub fn validate(document: &Document, type_name: &str, catalog: &Catalog) -> ValidationVerdict {
    let mut errors = Vec::new();

    if document.context().and_then(Value::as_str) != Some(SCHEMA_ORG_CONTEXT) {
        errors.push(Violation::Context);
    }

    if document.get(keys::TYPE).and_then(Value::as_str) != Some(type_name) {
        errors.push(Violation::TypeMismatch {
            expected: type_name.to_string(),
        });
    }

    if let Some(schema) = catalog.get(type_name) {
        for (key, value) in document.properties() {
            if is_blank(value) {
                continue;
            }
            let Some(kind) = schema.kind_of(key) else {
                continue;
            };
            if !format::check(kind, value) {
                errors.push(Violation::Format {
                    property: key.clone(),
                    kind,
                });
            }
        }
    }

    ValidationVerdict::from_errors(errors)
}

/// Field-level check: blank values always pass, others must match `kind`.
pub fn validate_value(kind: PropertyKind, value: &Value) -> bool {
    is_blank(value) || format::check(kind, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        Document::try_from(v).unwrap()
    }

    #[test]
    fn bad_email_is_reported() {
        let c = Catalog::builtin();
        let d = doc(json!({"@context":"https://schema.org","@type":"Person","email":"bad"}));
        let v = validate(&d, "Person", &c);
        assert!(!v.is_valid);
        assert_eq!(
            v.errors,
            vec![Violation::Format {
                property: "email".into(),
                kind: PropertyKind::Email
            }]
        );
        let msg = v.summary();
        assert!(msg.contains("email") && msg.contains("Email"));
    }

    #[test]
    fn good_url_is_valid() {
        let c = Catalog::builtin();
        let d = doc(json!({"@context":"https://schema.org","@type":"Person","url":"https://x.com"}));
        let v = validate(&d, "Person", &c);
        assert!(v.is_valid);
        assert_eq!(v.summary(), VALID_MESSAGE);
    }

    #[test]
    fn reserved_key_errors_come_first() {
        let c = Catalog::builtin();
        let d = doc(json!({"url":"nope","@type":"Book"}));
        let v = validate(&d, "Person", &c);
        assert_eq!(
            v.errors,
            vec![
                Violation::Context,
                Violation::TypeMismatch {
                    expected: "Person".into()
                },
                Violation::Format {
                    property: "url".into(),
                    kind: PropertyKind::Url
                },
            ]
        );
        assert_eq!(
            v.summary(),
            "@context must be \"https://schema.org\". @type should be \"Person\". \
             Property 'url' has an invalid format for type 'URL'."
        );
    }

    #[test]
    fn property_errors_follow_document_order() {
        let c = Catalog::builtin();
        let d = doc(json!({
            "@context":"https://schema.org",
            "@type":"Organization",
            "logo":"bad-logo",
            "email":"bad-email",
            "url":"bad-url"
        }));
        let v = validate(&d, "Organization", &c);
        let props: Vec<&str> = v
            .errors
            .iter()
            .filter_map(|e| match e {
                Violation::Format { property, .. } => Some(property.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(props, vec!["logo", "email", "url"]);
    }

    #[test]
    fn blank_and_unknown_properties_are_skipped() {
        let c = Catalog::builtin();
        let d = doc(json!({
            "@context":"https://schema.org",
            "@type":"Person",
            "email":"",
            "url":null,
            "favouriteColour":"not-checked"
        }));
        assert!(validate(&d, "Person", &c).is_valid);
    }

    #[test]
    fn non_string_context_is_rejected() {
        let c = Catalog::builtin();
        let d = doc(json!({"@context":{"@vocab":"https://schema.org"},"@type":"Person"}));
        let v = validate(&d, "Person", &c);
        assert_eq!(v.errors, vec![Violation::Context]);
    }

    #[test]
    fn unknown_type_only_checks_reserved_keys() {
        let c = Catalog::builtin();
        let d = doc(json!({"@context":"https://schema.org","@type":"Thing","url":"bad"}));
        assert!(validate(&d, "Thing", &c).is_valid);
    }

    #[test]
    fn numbers_accept_json_numbers_and_numeric_strings() {
        let c = Catalog::builtin();
        let mut d = Document::minimal("Book");
        d.set("numberOfPages", 320);
        assert!(validate(&d, "Book", &c).is_valid);
        d.set("numberOfPages", "320");
        assert!(validate(&d, "Book", &c).is_valid);
        d.set("numberOfPages", "many");
        assert!(!validate(&d, "Book", &c).is_valid);
    }

    #[test]
    fn event_datetimes() {
        let c = Catalog::builtin();
        let mut d = Document::minimal("Event");
        d.set("startDate", "2025-06-01T19:00:00+02:00");
        d.set("endDate", "2025-06-01");
        assert!(validate(&d, "Event", &c).is_valid);
        d.set("endDate", "2025-06-31");
        assert!(!validate(&d, "Event", &c).is_valid);
    }

    #[test]
    fn validate_value_treats_blank_as_ok() {
        assert!(validate_value(PropertyKind::Email, &json!("")));
        assert!(validate_value(PropertyKind::Url, &Value::Null));
        assert!(!validate_value(PropertyKind::Url, &json!("nope")));
    }
}
