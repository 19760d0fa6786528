//! Schema registry for loading and managing named schema definitions.
//!
//! A registry document is a TOML or JSON file whose top-level `schemas` table
//! maps names to [`SchemaDef`]s:
//!
//! ```toml
//! [schemas.user]
//! type = "object"
//!
//! [schemas.user.properties.name]
//! type = "string"
//!
//! [schemas.user.properties.tags]
//! type = "array"
//! items = { type = "string" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dynamic::BoxedSchema;
use crate::error::{SchemaError, SchemaResult};
use crate::types::SchemaDef;

/// On-disk layout of a registry document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryDocument {
    #[serde(default)]
    schemas: BTreeMap<String, SchemaDef>,
}

/// A registry of named schema definitions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, SchemaDef>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, def: SchemaDef) {
        self.schemas.insert(name.into(), def);
    }

    /// Get a definition by name.
    pub fn get(&self, name: &str) -> Option<&SchemaDef> {
        self.schemas.get(name)
    }

    /// Build a live schema from a registered definition.
    pub fn build(&self, name: &str) -> SchemaResult<BoxedSchema> {
        self.get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?
            .build()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Get the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Parse a TOML registry document.
    pub fn from_toml_str(toml: &str) -> SchemaResult<Self> {
        let document: RegistryDocument = toml::from_str(toml)?;
        Ok(Self::from_document(document))
    }

    /// Parse a JSON registry document.
    pub fn from_json_str(json: &str) -> SchemaResult<Self> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Load a registry document from disk.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnsupportedFormat`] for any other extension,
    /// [`SchemaError::Io`] when the file cannot be read, and a decode error
    /// when the contents are malformed.
    pub fn load(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|ext| ext.to_str());

        let registry = match extension {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => {
                return Err(SchemaError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(path = %path.display(), schemas = registry.len(), "Loaded schema registry");
        Ok(registry)
    }

    /// Export as a pretty-printed JSON registry document.
    pub fn to_json_pretty(&self) -> String {
        let document = RegistryDocument {
            schemas: self.schemas.clone(),
        };
        serde_json::to_string_pretty(&document).unwrap_or_default()
    }

    fn from_document(document: RegistryDocument) -> Self {
        Self {
            schemas: document.schemas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Schema;
    use crate::types::SchemaKind;
    use std::io::Write;

    const USER_TOML: &str = r#"
        [schemas.user]
        type = "object"

        [schemas.user.properties.name]
        type = "string"

        [schemas.user.properties.tags]
        type = "array"
        items = { type = "string" }

        [schemas.score]
        type = "number"
        nullable = true
    "#;

    #[test]
    fn test_register_and_get() {
        let mut registry = SchemaRegistry::new();
        assert!(registry.is_empty());

        registry.register("name", SchemaDef::new(SchemaKind::String));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("name").map(|d| d.kind), Some(SchemaKind::String));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_from_toml() {
        let registry = SchemaRegistry::from_toml_str(USER_TOML).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["score", "user"]);

        let user = registry.build("user").unwrap();
        assert_eq!(user.kind(), SchemaKind::Object);
        assert!(user.validate(serde_json::json!({"name": 1})).is_success());

        let score = registry.get("score").unwrap();
        assert!(score.nullable);
    }

    #[test]
    fn test_build_missing() {
        let registry = SchemaRegistry::new();
        let err = registry.build("user").unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(ref name) if name == "user"));
    }

    #[test]
    fn test_json_round_trip() {
        let registry = SchemaRegistry::from_toml_str(USER_TOML).unwrap();
        let json = registry.to_json_pretty();
        assert_eq!(SchemaRegistry::from_json_str(&json).unwrap(), registry);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("schemas.toml");
        fs::File::create(&toml_path)
            .unwrap()
            .write_all(USER_TOML.as_bytes())
            .unwrap();
        assert_eq!(SchemaRegistry::load(&toml_path).unwrap().len(), 2);

        let yaml_path = dir.path().join("schemas.yaml");
        assert!(matches!(
            SchemaRegistry::load(&yaml_path),
            Err(SchemaError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(SchemaRegistry::load(&missing), Err(SchemaError::Io(_))));
    }
}
