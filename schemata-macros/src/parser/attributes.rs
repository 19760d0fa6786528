//! Attribute parsing using darling for `#[shape(...)]` attributes.

use darling::{FromDeriveInput, FromField};
use syn::{Generics, Ident, Type, Visibility};

/// Container-level attributes, parsed from `#[shape(...)]` on the struct.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(shape), supports(struct_named))]
pub struct ContainerAttrs {
    /// The identifier of the shape struct
    pub ident: Ident,

    /// Generic parameters of the shape struct
    pub generics: Generics,

    /// Visibility of the shape struct
    pub vis: Visibility,

    /// Name of the generated input record
    #[darling(default)]
    pub input: Option<String>,

    /// Name of the generated output record
    #[darling(default)]
    pub output: Option<String>,
}

impl ContainerAttrs {
    /// The base name used for defaulted record names.
    ///
    /// `UserShape` yields `User`; an identifier without the `Shape` suffix is
    /// used as-is.
    fn base_name(&self) -> String {
        let ident = self.ident.to_string();
        match ident.strip_suffix("Shape") {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => ident,
        }
    }

    /// Name of the input record: explicit, or `{Base}Input`.
    pub fn input_name(&self) -> String {
        self.input
            .clone()
            .unwrap_or_else(|| format!("{}Input", self.base_name()))
    }

    /// Name of the output record: explicit, `{Base}` when the shape ends in
    /// `Shape`, `{Name}Output` otherwise.
    pub fn output_name(&self) -> String {
        self.output.clone().unwrap_or_else(|| {
            let base = self.base_name();
            if base == self.ident.to_string() {
                format!("{}Output", base)
            } else {
                base
            }
        })
    }
}

/// Field-level attributes parsed from `#[shape(...)]` on struct fields.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(shape))]
pub struct FieldAttrs {
    /// Field identifier
    pub ident: Option<Ident>,

    /// Field type (a schema node)
    pub ty: Type,

    /// Field visibility
    pub vis: Visibility,

    /// Property name used in definitions
    #[darling(default)]
    pub rename: Option<String>,
}

impl FieldAttrs {
    /// The property name: renamed or the field identifier.
    pub fn property_name(&self) -> Option<String> {
        self.rename
            .clone()
            .or_else(|| self.ident.as_ref().map(ToString::to_string))
    }
}
