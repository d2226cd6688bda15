//! ldedit-core
//!
//! Core primitives for the ldedit JSON-LD metadata editor:
//! - the schema catalog (type name -> typed property list)
//! - the validator (document + type -> verdict)
//! - the document model and the editor session that keeps the form and
//!   raw-text projections in sync with one canonical document
//! - import resolution for bare JSON and HTML with an embedded script block
//! - export formatting (pretty JSON, script tag, download filename)
//!
//! The crate performs no I/O. Callers read files and pass text in, and write
//! whatever the exporter returns.

pub mod catalog;
pub mod config;
pub mod document;
pub mod errors;
pub mod export;
pub mod import;
pub mod session;
pub mod validate;

pub use crate::errors::{LdError, LdResult};

/// The only `@context` value a valid document may carry.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// Reserved document keys.
pub mod keys {
    pub const CONTEXT: &str = "@context";
    pub const TYPE: &str = "@type";

    /// True for `@context` and `@type`.
    pub fn is_reserved(key: &str) -> bool {
        key == CONTEXT || key == TYPE
    }
}

/// Default editor settings.
pub mod defaults {
    /// Type selected at session start and used as the import fallback.
    pub const TYPE: &str = "Person";
    /// Maximum size of imported files and raw-text edits (2 MiB).
    pub const MAX_TEXT_BYTES: usize = 2 * 1024 * 1024;
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::catalog::{Catalog, PropertyKind, PropertySpec, SchemaDefinition};
    pub use crate::config::{validate_config, validate_config_for, EditorConfig, LimitsConfig};
    pub use crate::document::Document;
    pub use crate::export::{suggested_filename, to_pretty_json, to_script_tag, EXPORT_MIME_TYPE};
    pub use crate::import::{
        adopt_import, resolve_import, resolve_import_with_limit, AdoptedImport, ImportResolution,
        ImportWarning,
    };
    pub use crate::session::{
        ChangeOrigin, EditorSession, FormField, ImportReport, RawTextOutcome,
    };
    pub use crate::validate::{validate, validate_value, ValidationVerdict, Violation};
    pub use crate::{LdError, LdResult, SCHEMA_ORG_CONTEXT};
}
