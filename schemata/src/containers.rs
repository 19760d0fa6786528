//! Container nodes and the nullable wrapper.
//!
//! [`ObjectSchema`] and [`ArraySchema`] own their children and expose them
//! for introspection. Their own `validate` is the shallow kind check and does
//! not descend into children; per-field or per-element validation is done by
//! calling the children directly:
//!
//! ```rust
//! use schemata::{array, string, Schema, Value};
//!
//! let tags = array(string());
//! let input = Value::from(vec!["a", "b"]);
//!
//! let checked: Vec<bool> = input
//!     .as_array()
//!     .unwrap_or_default()
//!     .iter()
//!     .map(|item| tags.items().validate(item.clone()).is_success())
//!     .collect();
//! assert_eq!(checked, vec![true, true]);
//! ```

use crate::traits::{Schema, Shape};
use crate::types::{SchemaDef, SchemaKind};
use crate::value::Value;
use crate::result::ValidationResult;

/// A fixed mapping of property names to child schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema<P> {
    properties: P,
}

impl<P: Shape> ObjectSchema<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }

    /// The shape this object was built with.
    pub fn properties(&self) -> &P {
        &self.properties
    }

    /// Consume the schema and return its shape.
    pub fn into_properties(self) -> P {
        self.properties
    }

    /// Names of all properties, sorted by property name.
    pub fn property_names(&self) -> Vec<String> {
        self.properties.definitions().into_keys().collect()
    }
}

impl<P: Shape> Schema for ObjectSchema<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn kind(&self) -> SchemaKind {
        SchemaKind::Object
    }

    fn parse(&self, input: P::Input) -> P::Output {
        self.properties.parse(input)
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef::object().with_properties(self.properties.definitions())
    }
}

/// Create an [`ObjectSchema`] from a shape.
pub fn object<P: Shape>(properties: P) -> ObjectSchema<P> {
    ObjectSchema::new(properties)
}

/// A homogeneous sequence described by a single element schema.
///
/// The kind tag is `"array"`, which no runtime category spells (arrays report
/// `"object"`), so `validate` rejects every input including arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema<S> {
    items: S,
}

impl<S: Schema> ArraySchema<S> {
    pub fn new(items: S) -> Self {
        Self { items }
    }

    /// The element schema.
    pub fn items(&self) -> &S {
        &self.items
    }

    pub fn into_items(self) -> S {
        self.items
    }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Input = Vec<S::Input>;
    type Output = Vec<S::Output>;

    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn parse(&self, input: Vec<S::Input>) -> Vec<S::Output> {
        input.into_iter().map(|item| self.items.parse(item)).collect()
    }

    fn definition(&self) -> SchemaDef {
        SchemaDef::array(self.items.definition())
    }
}

/// Create an [`ArraySchema`] from an element schema.
pub fn array<S: Schema>(items: S) -> ArraySchema<S> {
    ArraySchema::new(items)
}

/// Result of [`Schema::nullable`].
///
/// Widens the input and output types to `Option`. Runtime behavior is that of
/// the wrapped node: same kind tag, same validation, so `Value::Null` is still
/// rejected unless the inner kind is `"object"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Nullable<S> {
    inner: S,
}

impl<S: Schema> Nullable<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped node.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Schema> Schema for Nullable<S> {
    type Input = Option<S::Input>;
    type Output = Option<S::Output>;

    fn kind(&self) -> SchemaKind {
        self.inner.kind()
    }

    fn validate(&self, input: impl Into<Value>) -> ValidationResult {
        self.inner.validate(input)
    }

    fn parse(&self, input: Option<S::Input>) -> Option<S::Output> {
        input.map(|value| self.inner.parse(value))
    }

    fn definition(&self) -> SchemaDef {
        self.inner.definition().with_nullable(true)
    }
}
