//! Struct parsing logic.
//!
//! Lowers a named struct whose fields are schema nodes into a [`ShapeIR`].
//! Tuple structs, unit structs, enums, unions and generic structs are
//! rejected.

use std::collections::HashSet;

use darling::{FromDeriveInput, FromField};
use syn::{Attribute, Data, DeriveInput, Fields, Ident};

use crate::ir::{FieldIR, ShapeIR};
use crate::parser::attributes::{ContainerAttrs, FieldAttrs};

/// Error type for struct parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StructParseError {
    #[error("Failed to parse container attributes: {0}")]
    ContainerAttrs(String),

    #[error("Failed to parse field attributes: {0}")]
    FieldAttrs(String),

    #[error("Expected struct with named fields, found {0}")]
    NotAStruct(String),

    #[error("Shape cannot be derived for generic structs")]
    Generic,

    #[error("Field at index {0} has no identifier")]
    MissingFieldIdent(usize),

    #[error("Invalid record name `{0}`")]
    InvalidRecordName(String),

    /// Two fields map to the same property. Carries the later field.
    #[error("Duplicate property name `{0}`")]
    DuplicateProperty(String, Ident),
}

/// Parses shape structs into [`ShapeIR`].
pub struct StructParser;

impl StructParser {
    /// Parse a DeriveInput into a ShapeIR.
    pub fn parse(input: &DeriveInput) -> Result<ShapeIR, StructParseError> {
        let fields = match &input.data {
            Data::Struct(s) => match &s.fields {
                Fields::Named(fields) => fields,
                Fields::Unnamed(_) => {
                    return Err(StructParseError::NotAStruct("tuple struct".to_string()))
                }
                Fields::Unit => return Err(StructParseError::NotAStruct("unit struct".to_string())),
            },
            Data::Enum(_) => return Err(StructParseError::NotAStruct("enum".to_string())),
            Data::Union(_) => return Err(StructParseError::NotAStruct("union".to_string())),
        };

        let container_attrs = ContainerAttrs::from_derive_input(input)
            .map_err(|e| StructParseError::ContainerAttrs(e.to_string()))?;

        if !container_attrs.generics.params.is_empty() {
            return Err(StructParseError::Generic);
        }

        let input_ident = record_ident(&container_attrs.input_name())?;
        let output_ident = record_ident(&container_attrs.output_name())?;
        let fields = Self::parse_named_fields(fields)?;

        Ok(ShapeIR::new(
            container_attrs.ident,
            container_attrs.vis,
            input_ident,
            output_ident,
        )
        .with_fields(fields))
    }

    /// Parse named struct fields into FieldIR.
    fn parse_named_fields(fields: &syn::FieldsNamed) -> Result<Vec<FieldIR>, StructParseError> {
        let mut field_irs = Vec::with_capacity(fields.named.len());
        let mut seen = HashSet::with_capacity(fields.named.len());

        for (index, field) in fields.named.iter().enumerate() {
            let field_attrs = FieldAttrs::from_field(field)
                .map_err(|e| StructParseError::FieldAttrs(e.to_string()))?;

            let property = field_attrs
                .property_name()
                .ok_or(StructParseError::MissingFieldIdent(index))?;
            let ident = field_attrs
                .ident
                .ok_or(StructParseError::MissingFieldIdent(index))?;

            if !seen.insert(property.clone()) {
                return Err(StructParseError::DuplicateProperty(property, ident));
            }

            let field_ir = FieldIR::new(ident, field_attrs.ty, field_attrs.vis)
                .with_property(property)
                .with_docs(doc_attributes(&field.attrs));

            field_irs.push(field_ir);
        }

        Ok(field_irs)
    }
}

fn record_ident(name: &str) -> Result<Ident, StructParseError> {
    syn::parse_str::<Ident>(name).map_err(|_| StructParseError::InvalidRecordName(name.to_string()))
}

/// Collect the `#[doc = "..."]` attributes of an item.
pub fn doc_attributes(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_simple_shape() {
        let input: DeriveInput = parse_quote! {
            pub struct PersonShape {
                name: StringSchema,
                age: NumberSchema,
            }
        };

        let shape = StructParser::parse(&input).unwrap();
        assert_eq!(shape.ident, "PersonShape");
        assert_eq!(shape.input_ident, "PersonInput");
        assert_eq!(shape.output_ident, "Person");
        assert_eq!(shape.property_names(), vec!["name", "age"]);
    }

    #[test]
    fn test_parse_renamed_field() {
        let input: DeriveInput = parse_quote! {
            struct UserShape {
                #[shape(rename = "createdAt")]
                created_at: DateSchema,
            }
        };

        let shape = StructParser::parse(&input).unwrap();
        assert_eq!(shape.fields[0].ident, "created_at");
        assert_eq!(shape.fields[0].property, "createdAt");
    }

    #[test]
    fn test_parse_keeps_field_docs() {
        let input: DeriveInput = parse_quote! {
            struct UserShape {
                /// Display name
                #[shape(rename = "displayName")]
                name: StringSchema,
            }
        };

        let shape = StructParser::parse(&input).unwrap();
        assert_eq!(shape.fields[0].docs.len(), 1);
    }

    #[test]
    fn test_parse_empty_shape() {
        let input: DeriveInput = parse_quote! {
            struct EmptyShape {}
        };

        let shape = StructParser::parse(&input).unwrap();
        assert!(shape.fields.is_empty());
        assert_eq!(shape.input_ident, "EmptyInput");
    }

    #[test]
    fn test_reject_non_struct() {
        let input: DeriveInput = parse_quote! {
            enum Kind { A, B }
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::NotAStruct(kind)) if kind == "enum"
        ));

        let input: DeriveInput = parse_quote! {
            struct Pair(StringSchema, NumberSchema);
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::NotAStruct(_))
        ));
    }

    #[test]
    fn test_reject_generics() {
        let input: DeriveInput = parse_quote! {
            struct WrapperShape<S> {
                inner: S,
            }
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::Generic)
        ));
    }

    #[test]
    fn test_reject_duplicate_property() {
        let input: DeriveInput = parse_quote! {
            struct KeyShape {
                #[shape(rename = "k")]
                a: StringSchema,
                #[shape(rename = "k")]
                b: NumberSchema,
            }
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::DuplicateProperty(name, field)) if name == "k" && field == "b"
        ));

        let input: DeriveInput = parse_quote! {
            struct KeyShape {
                #[shape(rename = "b")]
                a: StringSchema,
                b: NumberSchema,
            }
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::DuplicateProperty(name, _)) if name == "b"
        ));
    }

    #[test]
    fn test_reject_invalid_record_name() {
        let input: DeriveInput = parse_quote! {
            #[shape(output = "not a name")]
            struct UserShape {
                name: StringSchema,
            }
        };
        assert!(matches!(
            StructParser::parse(&input),
            Err(StructParseError::InvalidRecordName(name)) if name == "not a name"
        ));
    }
}
