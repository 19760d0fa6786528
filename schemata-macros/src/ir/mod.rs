//! Intermediate representation of a parsed shape struct.
//!
//! The parser lowers a `#[derive(Shape)]` input into a [`ShapeIR`], which the
//! code generator turns into the input/output records and the `Shape` impl.

use syn::{Attribute, Ident, Type, Visibility};

/// A parsed shape struct.
#[derive(Debug, Clone)]
pub struct ShapeIR {
    /// The shape struct itself.
    pub ident: Ident,
    /// Visibility applied to the generated records.
    pub vis: Visibility,
    /// Name of the generated input record.
    pub input_ident: Ident,
    /// Name of the generated output record.
    pub output_ident: Ident,
    /// Fields in declaration order.
    pub fields: Vec<FieldIR>,
}

impl ShapeIR {
    pub fn new(ident: Ident, vis: Visibility, input_ident: Ident, output_ident: Ident) -> Self {
        Self {
            ident,
            vis,
            input_ident,
            output_ident,
            fields: Vec::new(),
        }
    }

    pub fn with_fields(mut self, fields: Vec<FieldIR>) -> Self {
        self.fields = fields;
        self
    }

    /// Property names in declaration order.
    #[cfg(test)]
    pub fn property_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.property.as_str()).collect()
    }
}

/// A single field of a shape: one property of the object.
#[derive(Debug, Clone)]
pub struct FieldIR {
    /// Rust field name, reused in both records.
    pub ident: Ident,
    /// Schema node type of the field.
    pub ty: Type,
    pub vis: Visibility,
    /// Property name in definitions.
    pub property: String,
    /// `#[doc]` attributes carried over to the records.
    pub docs: Vec<Attribute>,
}

impl FieldIR {
    pub fn new(ident: Ident, ty: Type, vis: Visibility) -> Self {
        let property = ident.to_string();
        Self {
            ident,
            ty,
            vis,
            property,
            docs: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn with_docs(mut self, docs: Vec<Attribute>) -> Self {
        self.docs = docs;
        self
    }
}
