//! Impl block generation for the Shape trait.
//!
//! For a shape struct this emits three items: the input record, the output
//! record, and `impl ::schemata::Shape` tying them to the shape.

use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::ShapeIR;

/// Generates the records and the impl block for a [`ShapeIR`].
#[derive(Debug, Default)]
pub struct ImplBlockGenerator;

impl ImplBlockGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate everything the derive emits for one shape.
    pub fn generate(&self, shape: &ShapeIR) -> TokenStream {
        let input_record = self.generate_record(shape, &shape.input_ident, quote!(::schemata::Input));
        let output_record =
            self.generate_record(shape, &shape.output_ident, quote!(::schemata::Output));
        let impl_block = self.generate_impl(shape);

        quote! {
            #input_record
            #output_record
            #impl_block
        }
    }

    /// Generate a record struct whose fields project each node's type through
    /// `projection` (`Input` or `Output`).
    fn generate_record(
        &self,
        shape: &ShapeIR,
        name: &syn::Ident,
        projection: TokenStream,
    ) -> TokenStream {
        let vis = &shape.vis;
        let shape_ident = &shape.ident;
        let doc = format!(" Record type of [`{}`].", shape_ident);

        let fields = shape.fields.iter().map(|field| {
            let docs = &field.docs;
            let field_vis = &field.vis;
            let ident = &field.ident;
            let ty = &field.ty;
            quote! {
                #(#docs)*
                #field_vis #ident: #projection<#ty>
            }
        });

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, PartialEq)]
            #vis struct #name {
                #(#fields,)*
            }
        }
    }

    /// Generate `impl ::schemata::Shape for Shape`.
    fn generate_impl(&self, shape: &ShapeIR) -> TokenStream {
        let shape_ident = &shape.ident;
        let input_ident = &shape.input_ident;
        let output_ident = &shape.output_ident;

        let definitions = shape.fields.iter().map(|field| {
            let ident = &field.ident;
            let property = &field.property;
            quote! {
                definitions.insert(
                    ::std::string::String::from(#property),
                    ::schemata::Schema::definition(&self.#ident),
                );
            }
        });

        let parsed = shape.fields.iter().map(|field| {
            let ident = &field.ident;
            quote! {
                #ident: ::schemata::Schema::parse(&self.#ident, input.#ident)
            }
        });

        quote! {
            impl ::schemata::Shape for #shape_ident {
                type Input = #input_ident;
                type Output = #output_ident;

                #[allow(unused_mut)]
                fn definitions(
                    &self,
                ) -> ::std::collections::BTreeMap<::std::string::String, ::schemata::SchemaDef> {
                    let mut definitions = ::std::collections::BTreeMap::new();
                    #(#definitions)*
                    definitions
                }

                #[allow(unused_variables)]
                fn parse(&self, input: Self::Input) -> Self::Output {
                    #output_ident {
                        #(#parsed,)*
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::struct_parser::StructParser;
    use syn::parse_quote;

    fn generate(input: syn::DeriveInput) -> String {
        let shape = StructParser::parse(&input).unwrap();
        ImplBlockGenerator::new().generate(&shape).to_string()
    }

    #[test]
    fn test_generates_records_and_impl() {
        let code = generate(parse_quote! {
            pub struct PersonShape {
                pub name: StringSchema,
                age: NumberSchema,
            }
        });

        assert!(code.contains("pub struct PersonInput"));
        assert!(code.contains("pub struct Person {"));
        assert!(code.contains("pub name : :: schemata :: Input < StringSchema >"));
        assert!(code.contains("age : :: schemata :: Output < NumberSchema >"));
        assert!(code.contains("impl :: schemata :: Shape for PersonShape"));
        assert!(code.contains("type Input = PersonInput"));
        assert!(code.contains("type Output = Person"));
    }

    #[test]
    fn test_definitions_use_property_names() {
        let code = generate(parse_quote! {
            struct UserShape {
                #[shape(rename = "createdAt")]
                created_at: DateSchema,
            }
        });

        assert!(code.contains("\"createdAt\""));
        assert!(code.contains("definition (& self . created_at)"));
        assert!(code.contains("parse (& self . created_at , input . created_at)"));
    }

    #[test]
    fn test_copies_field_docs() {
        let code = generate(parse_quote! {
            struct UserShape {
                /// Display name
                name: StringSchema,
            }
        });

        assert_eq!(code.matches("\" Display name\"").count(), 2);
    }
}
