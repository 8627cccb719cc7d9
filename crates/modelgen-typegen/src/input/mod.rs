//! Input parsing.
//!
//! The parser reads a JSON Schema document and produces an IR
//! [`Schema`](crate::ir::Schema).

mod jsonschema;

pub use jsonschema::{ParseError, parse_schema_document};
