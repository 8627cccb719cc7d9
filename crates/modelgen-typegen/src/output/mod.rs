//! Output emission.
//!
//! The backend renders [`ClassModel`](crate::ir::ClassModel) values into
//! declaration text. Identical models always produce byte-identical
//! output.

pub mod python;

pub use python::{PythonOptions, emit_class, generate_python_init, generate_python_module};
