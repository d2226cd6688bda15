//! The JSON-LD document model.
//!
//! A [`Document`] is an ordered JSON object. Iteration and serialization follow
//! insertion order (serde_json is built with `preserve_order`), while equality is
//! JSON equality and ignores key order.
//!
//! Two keys are reserved: `@context` and `@type`. A document may be missing
//! either, or carry the wrong value; the validator reports that, the model does
//! not prevent it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{LdError, LdResult};
use crate::{keys, SCHEMA_ORG_CONTEXT};

/// An ordered JSON-LD document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// An empty object, without reserved keys.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// The minimal document for a type: `@context` and `@type` only.
    pub fn minimal(type_name: &str) -> Self {
        let mut m = Map::new();
        m.insert(
            keys::CONTEXT.to_string(),
            Value::String(SCHEMA_ORG_CONTEXT.to_string()),
        );
        m.insert(keys::TYPE.to_string(), Value::String(type_name.to_string()));
        Self(m)
    }

    /// Parse JSON text. Only JSON objects are documents.
    pub fn parse(text: &str) -> LdResult<Self> {
        let v: Value = serde_json::from_str(text)?;
        Self::try_from(v)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a key, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }

    /// Set a key. An existing key keeps its position, a new one is appended.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove a key, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw `@context` value.
    pub fn context(&self) -> Option<&Value> {
        self.0.get(keys::CONTEXT)
    }

    /// `@type` as a string, if it is one.
    pub fn type_name(&self) -> Option<&str> {
        self.get_str(keys::TYPE)
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Entries other than `@context` and `@type`, in document order.
    pub fn properties(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(k, _)| !keys::is_reserved(k))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// True when a value counts as "no value supplied": `null` or `""`.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

impl From<Map<String, Value>> for Document {
    fn from(m: Map<String, Value>) -> Self {
        Self(m)
    }
}

impl TryFrom<Value> for Document {
    type Error = LdError;

    fn try_from(v: Value) -> LdResult<Self> {
        match v {
            Value::Object(m) => Ok(Self(m)),
            other => Err(LdError::invalid_argument(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl From<Document> for Value {
    fn from(d: Document) -> Self {
        d.into_value()
    }
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_has_reserved_keys_only() {
        let d = Document::minimal("Book");
        assert_eq!(d.len(), 2);
        assert_eq!(d.type_name(), Some("Book"));
        assert_eq!(d.context(), Some(&json!("https://schema.org")));
        assert_eq!(d.properties().count(), 0);
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut d = Document::minimal("Person");
        d.set("zeta", "z");
        d.set("alpha", "a");
        d.set("mid", "m");
        d.remove("alpha");
        d.set("zeta", "z2");
        let keys: Vec<&str> = d.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["@context", "@type", "zeta", "mid"]);
    }

    #[test]
    fn parse_preserves_order() {
        let d = Document::parse(r#"{"b":1,"a":2,"@type":"X"}"#).unwrap();
        let keys: Vec<&str> = d.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "@type"]);
    }

    #[test]
    fn parse_rejects_non_objects() {
        let err = Document::parse("[1,2]").unwrap_err();
        assert!(err.to_string().contains("array"));
        assert!(Document::parse("not json").is_err());
    }

    #[test]
    fn equality_ignores_order() {
        let a = Document::parse(r#"{"a":1,"b":2}"#).unwrap();
        let b = Document::parse(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&json!("")));
        assert!(is_blank(&Value::Null));
        assert!(!is_blank(&json!(" ")));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
    }
}
