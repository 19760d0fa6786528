//! Parser module for extracting shape information from the Rust AST.
//!
//! This module contains parsers for:
//! - Shape struct definitions
//! - `#[shape(...)]` attributes

pub mod attributes;
pub mod struct_parser;
