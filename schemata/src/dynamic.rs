//! Type-erased schemas built at runtime.
//!
//! [`BoxedSchema`] wraps any node behind a trait object so trees can be
//! assembled from data (a [`SchemaDef`] loaded from a file, say) rather than
//! from Rust types. Both its input and output types are [`Value`].

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

use crate::containers::{ArraySchema, Nullable, ObjectSchema};
use crate::error::{SchemaError, SchemaResult};
use crate::primitives::{BooleanSchema, DateSchema, NumberSchema, StringSchema};
use crate::result::ValidationResult;
use crate::traits::Schema;
use crate::types::{SchemaDef, SchemaKind};
use crate::value::Value;

/// Object-safe subset of [`Schema`].
trait ErasedSchema: fmt::Debug + Send + Sync {
    fn erased_kind(&self) -> SchemaKind;
    fn erased_validate(&self, input: Value) -> ValidationResult;
    fn erased_definition(&self) -> SchemaDef;
}

impl<S: Schema + Send + Sync> ErasedSchema for S {
    fn erased_kind(&self) -> SchemaKind {
        self.kind()
    }

    fn erased_validate(&self, input: Value) -> ValidationResult {
        self.validate(input)
    }

    fn erased_definition(&self) -> SchemaDef {
        self.definition()
    }
}

/// An owned, type-erased schema node.
///
/// # Example
///
/// ```rust
/// use schemata::{number, string, BoxedSchema, Schema, Value};
///
/// let nodes = vec![BoxedSchema::new(string()), BoxedSchema::new(number())];
/// let results: Vec<bool> = nodes
///     .iter()
///     .map(|node| node.validate(Value::from(5)).is_success())
///     .collect();
/// assert_eq!(results, vec![false, true]);
/// ```
pub struct BoxedSchema {
    inner: Box<dyn ErasedSchema>,
}

impl BoxedSchema {
    pub fn new<S: Schema + Send + Sync + 'static>(schema: S) -> Self {
        Self {
            inner: Box::new(schema),
        }
    }
}

impl fmt::Debug for BoxedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxedSchema").field(&self.inner).finish()
    }
}

impl Schema for BoxedSchema {
    type Input = Value;
    type Output = Value;

    fn kind(&self) -> SchemaKind {
        self.inner.erased_kind()
    }

    fn validate(&self, input: impl Into<Value>) -> ValidationResult {
        self.inner.erased_validate(input.into())
    }

    fn parse(&self, input: Value) -> Value {
        input
    }

    fn definition(&self) -> SchemaDef {
        self.inner.erased_definition()
    }
}

impl SchemaDef {
    /// Build a live schema tree from this definition.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingProperties`] for an object definition
    /// without `properties` and [`SchemaError::MissingItems`] for an array
    /// definition without `items`, at any depth. Returns
    /// [`SchemaError::UnexpectedField`] when `properties` appears on a
    /// non-object kind or `items` on a non-array kind.
    pub fn build(&self) -> SchemaResult<BoxedSchema> {
        if self.properties.is_some() && self.kind != SchemaKind::Object {
            return Err(SchemaError::UnexpectedField {
                kind: self.kind,
                field: "properties",
            });
        }
        if self.items.is_some() && self.kind != SchemaKind::Array {
            return Err(SchemaError::UnexpectedField {
                kind: self.kind,
                field: "items",
            });
        }

        let node = match self.kind {
            SchemaKind::String => BoxedSchema::new(StringSchema::new()),
            SchemaKind::Number => BoxedSchema::new(NumberSchema::new()),
            SchemaKind::Boolean => BoxedSchema::new(BooleanSchema::new()),
            SchemaKind::Date => BoxedSchema::new(DateSchema::new()),
            SchemaKind::Object => {
                let properties = self
                    .properties
                    .as_ref()
                    .ok_or(SchemaError::MissingProperties)?
                    .iter()
                    .map(|(name, def)| Ok((name.clone(), def.build()?)))
                    .collect::<SchemaResult<BTreeMap<_, _>>>()?;
                BoxedSchema::new(ObjectSchema::new(properties))
            }
            SchemaKind::Array => {
                let items = self.items.as_ref().ok_or(SchemaError::MissingItems)?;
                BoxedSchema::new(ArraySchema::new(items.build()?))
            }
        };

        trace!(kind = %self.kind, nullable = self.nullable, "Built schema from definition");

        Ok(if self.nullable {
            BoxedSchema::new(Nullable::new(node))
        } else {
            node
        })
    }
}
