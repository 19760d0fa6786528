//! Rust code generation module.
//!
//! This module handles generating the records and the `Shape` impl for a
//! derived shape.

pub mod impl_block;

pub use impl_block::ImplBlockGenerator;
