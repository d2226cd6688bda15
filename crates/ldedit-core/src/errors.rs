//! Error types for ldedit-core.
//!
//! Only configuration, catalog loading and type selection can fail with an
//! `LdError`. Validation and import never fail: problems with a document are
//! reported as verdict entries or import warnings instead.

use thiserror::Error;

/// Result alias used across the crate.
pub type LdResult<T> = Result<T, LdError>;

/// Errors returned by ldedit-core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LdError {
    /// A caller-supplied argument or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The requested schema type is not present in the catalog.
    #[error("unknown schema type: {0}")]
    UnknownType(String),

    /// A catalog definition is malformed.
    #[error("invalid catalog: {0}")]
    Catalog(String),
}

impl LdError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType(name.into())
    }

    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Stable short code, suitable for machine-readable CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Serialization(_) => "serialization",
            Self::UnknownType(_) => "unknown_type",
            Self::Catalog(_) => "catalog",
        }
    }
}

impl From<serde_json::Error> for LdError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let e = LdError::unknown_type("Thing");
        assert_eq!(e.to_string(), "unknown schema type: Thing");
        assert_eq!(e.code(), "unknown_type");
    }

    #[test]
    fn serde_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: LdError = err.into();
        assert!(matches!(e, LdError::Serialization(_)));
    }
}
