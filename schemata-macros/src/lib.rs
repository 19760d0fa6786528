//! # schemata-macros
//!
//! Procedural macros for the `schemata` crate.
//!
//! This crate provides `#[derive(Shape)]`, which turns a struct whose fields
//! are schema nodes into an object shape. The derive generates an input
//! record and an output record whose fields are the input and output types
//! of the corresponding nodes, and implements `schemata::Shape` so that
//! `object(shape)` parses input records into output records.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemata::{object, string, number, NumberSchema, Schema, Shape, StringSchema};
//!
//! #[derive(Debug, Shape)]
//! #[shape(input = "UserInput", output = "User")]
//! struct UserShape {
//!     /// Display name
//!     name: StringSchema,
//!     #[shape(rename = "yearsOld")]
//!     age: NumberSchema,
//! }
//!
//! let schema = object(UserShape { name: string(), age: number() });
//! let user: User = schema.parse(UserInput { name: "Ada".into(), age: 36.0 });
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes
//!
//! - `#[shape(input = "Name")]` - Name of the input record (default `{Base}Input`)
//! - `#[shape(output = "Name")]` - Name of the output record (default `{Base}`
//!   when the struct is named `{Base}Shape`, `{Name}Output` otherwise)
//!
//! ### Field Attributes
//!
//! - `#[shape(rename = "name")]` - Property name used in definitions

use proc_macro::TokenStream;
use syn::DeriveInput;

mod codegen;
mod ir;
mod parser;

use codegen::ImplBlockGenerator;
use parser::struct_parser::{StructParseError, StructParser};

/// Derive macro for object shapes.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Shape)]
/// struct PointShape {
///     x: NumberSchema,
///     y: NumberSchema,
/// }
/// // generates `PointInput`, `Point` and `impl Shape for PointShape`
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_shape_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn derive_shape_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let shape = StructParser::parse(input).map_err(|e| convert_parse_error(e, input))?;
    Ok(ImplBlockGenerator::new().generate(&shape))
}

/// Convert a StructParseError to a syn::Error with proper span information.
fn convert_parse_error(error: StructParseError, input: &DeriveInput) -> syn::Error {
    match error {
        StructParseError::Generic => syn::Error::new_spanned(&input.generics, error.to_string()),
        StructParseError::DuplicateProperty(_, ref field) => {
            syn::Error::new_spanned(field, error.to_string())
        }
        _ => syn::Error::new_spanned(&input.ident, error.to_string()),
    }
}
