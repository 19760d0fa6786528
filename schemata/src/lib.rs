//! # schemata
//!
//! Composable runtime schemas with typed input/output inference.
//!
//! ## Overview
//!
//! A schema tree is built bottom-up from constructor functions and queried at
//! the root:
//!
//! - Leaves: [`string()`], [`number()`], [`boolean()`], [`date()`]
//! - Containers: [`object()`] over a [`Shape`], [`array()`] over an element schema
//! - Operations on every node: [`Schema::validate`], [`Schema::parse`],
//!   [`Schema::nullable`], [`Schema::default`]
//!
//! Every node declares an input and an output Rust type ([`Input`],
//! [`Output`]). Containers compute theirs from their children, so the types
//! of a composed tree follow from its construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemata::{array, boolean, date, number, object, string, Schema, Shape};
//! use schemata::{ArraySchema, BooleanSchema, DateSchema, Nullable, NumberSchema, ObjectSchema, StringSchema};
//!
//! #[derive(Debug, Shape)]
//! #[shape(input = "NestedInput", output = "Nested")]
//! struct NestedShape {
//!     name: Nullable<DateSchema>,
//!     age: BooleanSchema,
//! }
//!
//! #[derive(Debug, Shape)]
//! #[shape(input = "PersonInput", output = "Person")]
//! struct PersonShape {
//!     name: Nullable<StringSchema>,
//!     age: NumberSchema,
//!     nested: ObjectSchema<NestedShape>,
//!     arr: ArraySchema<StringSchema>,
//! }
//!
//! let schema = object(PersonShape {
//!     name: string().nullable().default(Some(String::new())),
//!     age: number().default(0.0),
//!     nested: object(NestedShape {
//!         name: date().nullable(),
//!         age: boolean(),
//!     }),
//!     arr: array(string()),
//! });
//!
//! let name = schema.properties().name.parse(Some("John".to_string()));
//! assert_eq!(name.as_deref(), Some("John"));
//! ```
//!
//! ## Validation
//!
//! [`Schema::validate`] is a shallow check: it compares the `typeof`-style
//! runtime category of a [`Value`] with the node's kind tag. It does not look
//! at object properties or array elements, and because the tags `"Date"` and
//! `"array"` are not runtime categories, date and array nodes reject every
//! input. The result serializes in the Standard Schema shape:
//!
//! ```rust
//! use schemata::{string, Schema};
//!
//! let result = string().validate(5);
//! assert_eq!(
//!     serde_json::to_string(&result).unwrap(),
//!     r#"{"issues":[{"message":"Expected string but got number"}]}"#
//! );
//! ```
//!
//! ## Parsing
//!
//! [`Schema::parse`] trusts the caller: it performs no check and returns its
//! input unchanged, typed as the node's output.
//!
//! ## Modifiers
//!
//! [`Schema::nullable`] widens the types to `Option` without changing
//! validation. [`Schema::default`] discards its argument and returns the node
//! unchanged.
//!
//! ## Dynamic Schemas
//!
//! [`SchemaDef`] describes a tree as data (JSON or TOML), [`SchemaDef::build`]
//! turns it into a [`BoxedSchema`], and [`SchemaRegistry`] manages named
//! definitions loaded from a file.
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | `#[derive(Shape)]` for object shapes | ✅ |

// Lets the derive macro's `::schemata` paths resolve inside this crate.
extern crate self as schemata;

pub mod containers;
pub mod dynamic;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod result;
pub mod traits;
pub mod types;
pub mod value;

pub mod prelude {
    //! Glob-importable traits and constructors.
    pub use crate::containers::{array, object};
    pub use crate::primitives::{boolean, date, number, string};
    pub use crate::traits::{Schema, Shape};
    pub use crate::value::Value;

    #[cfg(feature = "derive")]
    pub use schemata_macros::Shape;
}

pub use containers::{array, object, ArraySchema, Nullable, ObjectSchema};
pub use dynamic::BoxedSchema;
pub use error::{SchemaError, SchemaResult};
pub use primitives::{boolean, date, number, string, BooleanSchema, DateSchema, NumberSchema, StringSchema};
pub use registry::SchemaRegistry;
pub use result::{Issue, ValidationError, ValidationResult};
pub use traits::{Input, Output, Schema, Shape, StandardProps};
pub use types::{SchemaDef, SchemaKind};
pub use value::{JsType, Value};

// Re-export derive macro when available
#[cfg(feature = "derive")]
pub use schemata_macros::Shape;
