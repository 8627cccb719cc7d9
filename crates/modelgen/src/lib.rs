//! Python object-model generation from JSON Schema documents.
//!
//! The `modelgen-typegen` crate holds the pure transformation pipeline;
//! this crate drives it: configuration, file layout, the generated-class
//! manifest, and the `modelgen` binary.

pub mod generate;
pub mod manifest;

pub use generate::{GenerateConfig, GenerateError, generate};
pub use manifest::{GeneratedClassManifest, MANIFEST_FILE_NAME, ManifestError};
