//! Schema kind tags and serializable schema definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::value::JsType;

/// The kind tag carried by every schema node.
///
/// The tag is compared verbatim against [`JsType::as_str`] during validation,
/// so only kinds that spell a real `typeof` category can ever match.
/// `Date` and `array` never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SchemaKind {
    String,
    Number,
    Boolean,
    Date,
    Object,
    Array,
}

impl SchemaKind {
    /// Returns the tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Shallow tag comparison against a runtime category.
    pub fn matches(&self, actual: JsType) -> bool {
        self.as_str() == actual.as_str()
    }

    /// Returns true for the two container kinds.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "Date" => Ok(Self::Date),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for SchemaKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemaKind> for &'static str {
    fn from(kind: SchemaKind) -> Self {
        kind.as_str()
    }
}

/// A serializable description of a schema tree.
///
/// Definitions are produced by [`Schema::definition`](crate::Schema::definition)
/// and turned back into live schemas by [`SchemaDef::build`].
///
/// # Example
///
/// ```rust
/// use schemata::{SchemaDef, SchemaKind};
///
/// let def = SchemaDef::object()
///     .with_property("name", SchemaDef::new(SchemaKind::String))
///     .with_property("tags", SchemaDef::array(SchemaDef::new(SchemaKind::String)));
///
/// assert_eq!(
///     def.to_json(),
///     r#"{"type":"object","properties":{"name":{"type":"string"},"tags":{"type":"array","items":{"type":"string"}}}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDef {
    /// Kind tag, serialized as `"type"`.
    #[serde(rename = "type")]
    pub kind: SchemaKind,

    /// Whether the node was marked nullable.
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,

    /// Child definitions for object kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaDef>>,

    /// Element definition for array kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaDef>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SchemaDef {
    /// Create a bare definition of the given kind.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
            properties: None,
            items: None,
        }
    }

    /// Create an object definition with no properties yet.
    pub fn object() -> Self {
        Self {
            properties: Some(BTreeMap::new()),
            ..Self::new(SchemaKind::Object)
        }
    }

    /// Create an array definition.
    pub fn array(items: SchemaDef) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaKind::Array)
        }
    }

    /// Add a property to an object definition.
    pub fn with_property(mut self, name: impl Into<String>, def: SchemaDef) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), def);
        self
    }

    /// Replace all properties.
    pub fn with_properties(mut self, properties: BTreeMap<String, SchemaDef>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set the nullable flag.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Decode a definition from JSON.
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a definition from TOML.
    pub fn from_toml_str(toml: &str) -> SchemaResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Convert to pretty-printed JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(SchemaKind::String.as_str(), "string");
        assert_eq!(SchemaKind::Number.as_str(), "number");
        assert_eq!(SchemaKind::Boolean.as_str(), "boolean");
        assert_eq!(SchemaKind::Date.as_str(), "Date");
        assert_eq!(SchemaKind::Object.as_str(), "object");
        assert_eq!(SchemaKind::Array.as_str(), "array");
    }

    #[test]
    fn test_kind_matches_is_a_tag_comparison() {
        assert!(SchemaKind::String.matches(JsType::String));
        assert!(SchemaKind::Object.matches(JsType::Object));
        assert!(!SchemaKind::Date.matches(JsType::Object));
        assert!(!SchemaKind::Array.matches(JsType::Object));
        assert!(!SchemaKind::Number.matches(JsType::BigInt));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Date".parse::<SchemaKind>().unwrap(), SchemaKind::Date);
        let err = "date".parse::<SchemaKind>().unwrap_err();
        assert!(matches!(err, SchemaError::UnknownKind(ref k) if k == "date"));
    }

    #[test]
    fn test_definition_json() {
        let def = SchemaDef::array(SchemaDef::new(SchemaKind::Number)).with_nullable(true);
        insta::assert_snapshot!(def.to_json(), @r#"{"type":"array","nullable":true,"items":{"type":"number"}}"#);

        let decoded = SchemaDef::from_json_str(&def.to_json()).unwrap();
        assert_eq!(decoded, def);
    }

    #[test]
    fn test_definition_toml() {
        let def = SchemaDef::from_toml_str(
            r#"
            type = "object"

            [properties.name]
            type = "string"
            nullable = true
            "#,
        )
        .unwrap();

        let name = &def.properties.as_ref().unwrap()["name"];
        assert_eq!(def.kind, SchemaKind::Object);
        assert_eq!(name.kind, SchemaKind::String);
        assert!(name.nullable);
    }

    #[test]
    fn test_definition_rejects_unknown_fields() {
        let err = SchemaDef::from_json_str(r#"{"type":"array","itmes":{"type":"string"}}"#)
            .unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
        assert!(err.to_string().contains("itmes"));

        let err = SchemaDef::from_toml_str("type = \"string\"\nnulable = true\n").unwrap_err();
        assert!(matches!(err, SchemaError::Toml(_)));
    }

    #[test]
    fn test_definition_rejects_unknown_kind() {
        let err = SchemaDef::from_json_str(r#"{"type":"uuid"}"#).unwrap_err();
        assert!(err.to_string().contains("uuid"));
    }
}
