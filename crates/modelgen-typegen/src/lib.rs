//! Schema-driven Python object-model generation.
//!
//! `modelgen-typegen` turns a JSON Schema document into Python attrs
//! class declarations: one class per schema object type, with typed,
//! ordered fields, synthesized default values and identifier-sanitizing
//! name mapping.
//!
//! # Architecture
//!
//! ```text
//! JSON Schema        IR                 Pipeline                Output
//! ───────────    ─────────────    ──────────────────────    ────────────
//! document   ──> Schema        ──> normalize (inline     ──> attrs classes
//! + hints        (ir.rs)           objects -> $refs)         module text
//!                                  plan / names /            __init__ text
//!                                  defaults / model
//! ```
//!
//! # Example
//!
//! ```
//! use modelgen_typegen::{hints::HintTable, input, model, normalize, output};
//!
//! let document = serde_json::json!({
//!     "title": "Robot",
//!     "type": "object",
//!     "properties": {
//!         "id": { "type": "string" },
//!         "tags": { "type": "array", "items": { "type": "string" } }
//!     },
//!     "required": ["id"]
//! });
//!
//! let schema = input::parse_schema_document(&document).unwrap();
//! let schema = normalize::normalize(schema).schema;
//! let robot = model::build("Robot", &schema.root, &HintTable::empty());
//!
//! let text = output::emit_class(&robot);
//! assert!(text.contains("class Robot(object):"));
//! ```
//!
//! The crate is pure: no I/O, no shared state. File layout, manifests and
//! the CLI live in the `modelgen` crate.

pub mod defaults;
pub mod hints;
pub mod input;
pub mod ir;
pub mod model;
pub mod names;
pub mod normalize;
pub mod output;
pub mod plan;

// Re-export commonly used items
pub use hints::{HintError, HintTable};
pub use input::{ParseError, parse_schema_document};
pub use ir::{ClassModel, Schema, SchemaNode};
pub use normalize::{NormalizeOutcome, normalize};
pub use output::{PythonOptions, emit_class, generate_python_init, generate_python_module};
