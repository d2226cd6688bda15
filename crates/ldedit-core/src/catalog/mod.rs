//! Schema catalog.
//!
//! The catalog maps a schema type name (e.g. `Person`) to the ordered list of
//! properties the editor knows about for that type, each with a declared value
//! kind. It is an immutable value: build it once (usually via
//! [`Catalog::builtin`]) and pass it by reference to the validator, the import
//! resolver and the editor session.
//!
//! External catalogs use the same JSON layout as the built-in table:
//!
//! ```json
//! { "Person": { "properties": [ { "name": "email", "type": "Email" } ] } }
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{LdError, LdResult};

mod builtin;

/// Declared value kind of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    Text,
    #[serde(rename = "URL")]
    Url,
    Date,
    DateTime,
    Number,
    Email,
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 6] = [
        Self::Text,
        Self::Url,
        Self::Date,
        Self::DateTime,
        Self::Number,
        Self::Email,
    ];

    /// Parse the catalog spelling of a kind (`"URL"`, `"DateTime"`, ...).
    pub fn parse(s: &str) -> LdResult<Self> {
        match s {
            "Text" => Ok(Self::Text),
            "URL" => Ok(Self::Url),
            "Date" => Ok(Self::Date),
            "DateTime" => Ok(Self::DateTime),
            "Number" => Ok(Self::Number),
            "Email" => Ok(Self::Email),
            other => Err(LdError::catalog(format!("unknown property type: {other}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Url => "URL",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Number => "Number",
            Self::Email => "Email",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property of a schema type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A schema type and its properties, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDefinition {
    pub type_name: String,
    pub properties: Vec<PropertySpec>,
}

impl SchemaDefinition {
    /// Find the declared kind of a property.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn kind_of(&self, name: &str) -> Option<PropertyKind> {
        self.property(name).map(|p| p.kind)
    }
}

/// Ordered, read-only set of schema definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    schemas: Vec<SchemaDefinition>,
}

impl Catalog {
    /// Build a catalog from definitions, rejecting empty or duplicate names.
    pub fn new(schemas: Vec<SchemaDefinition>) -> LdResult<Self> {
        let mut seen = HashSet::new();
        for s in &schemas {
            if s.type_name.trim().is_empty() {
                return Err(LdError::catalog("schema type name must not be empty"));
            }
            if !seen.insert(s.type_name.as_str()) {
                return Err(LdError::catalog(format!(
                    "duplicate schema type: {}",
                    s.type_name
                )));
            }

            let mut props = HashSet::new();
            for p in &s.properties {
                if p.name.trim().is_empty() {
                    return Err(LdError::catalog(format!(
                        "{}: property name must not be empty",
                        s.type_name
                    )));
                }
                if p.name.starts_with('@') {
                    return Err(LdError::catalog(format!(
                        "{}: property {} uses a reserved key",
                        s.type_name, p.name
                    )));
                }
                if !props.insert(p.name.as_str()) {
                    return Err(LdError::catalog(format!(
                        "{}: duplicate property {}",
                        s.type_name, p.name
                    )));
                }
            }
        }
        Ok(Self { schemas })
    }

    /// The catalog shipped with the editor (14 schema.org types).
    pub fn builtin() -> Self {
        Self {
            schemas: builtin::definitions(),
        }
    }

    /// Load a catalog from its JSON representation.
    ///
    /// Type order follows the key order of the JSON object.
    pub fn from_json_str(text: &str) -> LdResult<Self> {
        let root: Value = serde_json::from_str(text)
            .map_err(|e| LdError::catalog(format!("failed to parse catalog JSON: {e}")))?;
        Self::from_json_value(&root)
    }

    pub fn from_json_value(root: &Value) -> LdResult<Self> {
        let obj = root
            .as_object()
            .ok_or_else(|| LdError::catalog("catalog root must be a JSON object"))?;

        let mut schemas = Vec::with_capacity(obj.len());
        for (type_name, entry) in obj {
            let props = entry
                .get("properties")
                .and_then(|p| p.as_array())
                .ok_or_else(|| {
                    LdError::catalog(format!("{type_name}: properties must be an array"))
                })?;

            let mut properties = Vec::with_capacity(props.len());
            for (idx, p) in props.iter().enumerate() {
                let name = p.get("name").and_then(|x| x.as_str()).ok_or_else(|| {
                    LdError::catalog(format!("{type_name}.properties[{idx}].name is required"))
                })?;
                let kind = p.get("type").and_then(|x| x.as_str()).ok_or_else(|| {
                    LdError::catalog(format!("{type_name}.properties[{idx}].type is required"))
                })?;
                properties.push(PropertySpec::new(name, PropertyKind::parse(kind)?));
            }

            schemas.push(SchemaDefinition {
                type_name: type_name.clone(),
                properties,
            });
        }

        Self::new(schemas)
    }

    /// Serialize back to the external JSON layout.
    pub fn to_json_value(&self) -> Value {
        let mut root = serde_json::Map::new();
        for s in &self.schemas {
            root.insert(
                s.type_name.clone(),
                serde_json::json!({ "properties": s.properties }),
            );
        }
        Value::Object(root)
    }

    pub fn get(&self, type_name: &str) -> Option<&SchemaDefinition> {
        self.schemas.iter().find(|s| s.type_name == type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.get(type_name).is_some()
    }

    /// Type names in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|s| s.type_name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_expected_types_in_order() {
        let c = Catalog::builtin();
        let names: Vec<&str> = c.type_names().collect();
        assert_eq!(
            names,
            vec![
                "CreativeWork",
                "Article",
                "Book",
                "Event",
                "LocalBusiness",
                "Organization",
                "Person",
                "Product",
                "Recipe",
                "WebSite",
                "FAQPage",
                "BreadcrumbList",
                "VideoObject",
                "ImageObject",
            ]
        );
    }

    #[test]
    fn builtin_is_well_formed() {
        let c = Catalog::builtin();
        let rebuilt = Catalog::new(c.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, c);
    }

    #[test]
    fn person_properties() {
        let c = Catalog::builtin();
        let person = c.get("Person").unwrap();
        assert_eq!(person.kind_of("email"), Some(PropertyKind::Email));
        assert_eq!(person.kind_of("url"), Some(PropertyKind::Url));
        assert_eq!(person.kind_of("birthDate"), Some(PropertyKind::Date));
        assert_eq!(person.kind_of("nickname"), None);
        assert_eq!(person.properties[0].name, "name");
    }

    #[test]
    fn json_layout_roundtrips() {
        let c = Catalog::builtin();
        let text = serde_json::to_string(&c.to_json_value()).unwrap();
        let back = Catalog::from_json_str(&text).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn from_json_keeps_key_order() {
        let c = Catalog::from_json_str(
            r#"{"Zeta":{"properties":[]},"Alpha":{"properties":[{"name":"n","type":"Number"}]}}"#,
        )
        .unwrap();
        let names: Vec<&str> = c.type_names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(c.get("Alpha").unwrap().kind_of("n"), Some(PropertyKind::Number));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = Catalog::from_json_str(r#"{"T":{"properties":[{"name":"x","type":"Color"}]}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Color"));
    }

    #[test]
    fn duplicate_property_is_rejected() {
        let err = Catalog::from_json_str(
            r#"{"T":{"properties":[{"name":"x","type":"Text"},{"name":"x","type":"URL"}]}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate property"));
    }

    #[test]
    fn missing_properties_is_rejected() {
        assert!(Catalog::from_json_str(r#"{"T":{}}"#).is_err());
        assert!(Catalog::from_json_str(r#"[]"#).is_err());
    }

    #[test]
    fn kind_spelling() {
        for k in PropertyKind::ALL {
            assert_eq!(PropertyKind::parse(k.as_str()).unwrap(), k);
        }
        assert_eq!(
            serde_json::to_string(&PropertyKind::Url).unwrap(),
            "\"URL\""
        );
    }
}
