//! Core traits for schema nodes.
//!
//! This module defines the [`Schema`] trait, the contract every node in a
//! schema tree satisfies, and the [`Shape`] trait describing the field set of
//! an object schema.
//!
//! ## Overview
//!
//! The `Schema` trait provides:
//! - A fixed kind tag ([`Schema::kind`])
//! - Shallow runtime validation ([`Schema::validate`])
//! - Unchecked typed parsing ([`Schema::parse`])
//! - The `nullable`/`default` modifiers ([`Schema::nullable`], [`Schema::default`])
//! - A serializable description ([`Schema::definition`])
//! - A Standard Schema handle ([`Schema::standard`])
//!
//! ## Input and output types
//!
//! Each node declares the Rust type it accepts and the type it produces.
//! Containers derive theirs from their children, so the types of a whole
//! tree are inferred from how it was composed:
//!
//! ```rust
//! use schemata::{array, number, ArraySchema, NumberSchema, Output, Schema};
//!
//! let scores = array(number());
//! let parsed: Output<ArraySchema<NumberSchema>> = scores.parse(vec![1.0, 2.5]);
//! assert_eq!(parsed, vec![1.0, 2.5]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::containers::Nullable;
use crate::result::ValidationResult;
use crate::types::{SchemaDef, SchemaKind};
use crate::value::Value;

/// Input type of a schema.
pub type Input<S> = <S as Schema>::Input;

/// Output type of a schema.
pub type Output<S> = <S as Schema>::Output;

/// Trait implemented by every schema node.
///
/// # Required Methods
///
/// - [`kind`](Schema::kind) - Returns the fixed kind tag
/// - [`parse`](Schema::parse) - Reinterprets typed input as typed output
///
/// # Provided Methods
///
/// - [`validate`](Schema::validate) - Shallow kind check of a dynamic value
/// - [`nullable`](Schema::nullable) - Widens the input/output types to `Option`
/// - [`default`](Schema::default) - Accepts a fallback value and returns the node
/// - [`definition`](Schema::definition) - Serializable description of the node
/// - [`standard`](Schema::standard) - Standard Schema interop handle
///
/// # Validation is shallow
///
/// `validate` compares the runtime category of the input (see
/// [`Value::type_of`]) with the node's kind tag and nothing else. Object and
/// array nodes do not look at their children. Per-field checks are done by
/// calling `validate` on the children directly.
///
/// ```rust
/// use schemata::{object, string, Schema, Value};
/// use std::collections::BTreeMap;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("a".to_string(), string());
/// let schema = object(fields);
///
/// let input = Value::from(serde_json::json!({"a": 5}));
/// assert!(schema.validate(input.clone()).is_success());
///
/// let field = input.get("a").cloned().unwrap_or_default();
/// assert!(schema.properties()["a"].validate(field).is_failure());
/// ```
pub trait Schema: fmt::Debug {
    /// The Rust type [`parse`](Schema::parse) accepts.
    type Input;
    /// The Rust type [`parse`](Schema::parse) produces.
    type Output;

    /// Returns the kind tag of this node.
    fn kind(&self) -> SchemaKind;

    /// Check the runtime category of `input` against [`kind`](Schema::kind).
    ///
    /// On success the input is handed back unchanged. On failure the result
    /// carries exactly one issue of the form `"Expected <kind> but got <type>"`.
    fn validate(&self, input: impl Into<Value>) -> ValidationResult {
        ValidationResult::check_kind(self.kind(), input.into())
    }

    /// Reinterpret `input` as the output type.
    ///
    /// No check is performed and `validate` is not consulted: the caller is
    /// trusted. The value comes back unchanged.
    fn parse(&self, input: Self::Input) -> Self::Output;

    /// Widen the input and output types to accept `None`.
    ///
    /// This is a type-level change only. The returned node validates exactly
    /// like `self`; in particular `Value::Null` is still rejected.
    fn nullable(self) -> Nullable<Self>
    where
        Self: Sized,
    {
        Nullable::new(self)
    }

    /// Accept a fallback value for absent input.
    ///
    /// The value is discarded and `self` is returned unchanged: neither
    /// `validate` nor `parse` ever substitute it.
    fn default(self, _value: Self::Input) -> Self
    where
        Self: Sized,
    {
        self
    }

    /// Describe this node as a serializable definition.
    fn definition(&self) -> SchemaDef {
        SchemaDef::new(self.kind())
    }

    /// Standard Schema interop properties for this node.
    fn standard(&self) -> StandardProps<'_, Self>
    where
        Self: Sized,
    {
        StandardProps::new(self)
    }
}

/// The field set of an object schema.
///
/// A shape is usually a struct whose fields are schema nodes, with
/// `#[derive(Shape)]` generating the input and output record types:
///
/// ```rust
/// use schemata::{number, object, string, NumberSchema, Schema, Shape, StringSchema};
///
/// #[derive(Debug, Shape)]
/// #[shape(input = "UserInput", output = "User")]
/// struct UserShape {
///     name: StringSchema,
///     age: NumberSchema,
/// }
///
/// let schema = object(UserShape { name: string(), age: number() });
/// let user: User = schema.parse(UserInput { name: "Ada".to_string(), age: 36.0 });
/// assert_eq!(user.age, 36.0);
/// ```
///
/// `BTreeMap<String, S>` is a shape as well, for homogeneous objects.
pub trait Shape: fmt::Debug {
    /// Record type accepted by the owning object's `parse`.
    type Input;
    /// Record type produced by the owning object's `parse`.
    type Output;

    /// Definitions of every property, keyed by property name.
    fn definitions(&self) -> BTreeMap<String, SchemaDef>;

    /// Reinterpret an input record as an output record.
    fn parse(&self, input: Self::Input) -> Self::Output;
}

impl<S> Shape for BTreeMap<String, S>
where
    S: Schema,
    S::Input: Into<S::Output>,
{
    type Input = BTreeMap<String, S::Input>;
    type Output = BTreeMap<String, S::Output>;

    fn definitions(&self) -> BTreeMap<String, SchemaDef> {
        self.iter()
            .map(|(name, schema)| (name.clone(), schema.definition()))
            .collect()
    }

    fn parse(&self, input: Self::Input) -> Self::Output {
        input.into_iter().map(|(k, v)| (k, v.into())).collect()
    }
}

/// Standard Schema interop properties of a node.
///
/// Mirrors the `~standard` property of the cross-library Standard Schema
/// convention: a version number, a vendor name and a `validate` entry point
/// bound to the node.
#[derive(Debug)]
pub struct StandardProps<'a, S: ?Sized> {
    schema: &'a S,
}

impl<S: ?Sized> Clone for StandardProps<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for StandardProps<'_, S> {}

impl<'a, S: Schema + ?Sized> StandardProps<'a, S> {
    /// Standard Schema version implemented by this crate.
    pub const VERSION: u8 = 1;

    /// Vendor name reported to Standard Schema consumers.
    pub const VENDOR: &'static str = "";

    pub fn new(schema: &'a S) -> Self {
        Self { schema }
    }

    pub fn version(&self) -> u8 {
        Self::VERSION
    }

    pub fn vendor(&self) -> &'static str {
        Self::VENDOR
    }

    /// Validate through the bound node.
    pub fn validate(&self, input: impl Into<Value>) -> ValidationResult {
        self.schema.validate(input)
    }
}
