//! Primitive leaf nodes: string, number, boolean and date.
//!
//! Each node carries a fixed kind tag and relies on the shallow
//! [`Schema::validate`] contract. Note that `typeof` of a date value is
//! `"object"`, so [`DateSchema`] (tag `"Date"`) rejects every input,
//! well-formed dates included.

use chrono::{DateTime, Utc};

use crate::traits::Schema;
use crate::types::SchemaKind;

macro_rules! primitive_schema {
    ($(
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $kind:ident => $ty:ty;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name {
                _private: (),
            }

            #[allow(clippy::new_without_default)]
            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl Schema for $name {
                type Input = $ty;
                type Output = $ty;

                fn kind(&self) -> SchemaKind {
                    SchemaKind::$kind
                }

                fn parse(&self, input: $ty) -> $ty {
                    input
                }
            }

            #[doc = concat!("Create a new [`", stringify!($name), "`].")]
            pub fn $ctor() -> $name {
                $name::new()
            }
        )*
    };
}

primitive_schema! {
    /// Expects a value whose runtime category is `"string"`.
    StringSchema, string, String => String;

    /// Expects a value whose runtime category is `"number"`.
    NumberSchema, number, Number => f64;

    /// Expects a value whose runtime category is `"boolean"`.
    BooleanSchema, boolean, Boolean => bool;

    /// Tagged `"Date"`.
    ///
    /// No runtime category is spelled `"Date"`, so validation always fails
    /// with `"Expected Date but got object"` for date values. `parse` is
    /// unaffected.
    DateSchema, date, Date => DateTime<Utc>;
}
