//! The generation driver.
//!
//! Reads the schema and hints documents, normalizes the schema, builds
//! and emits every class, and writes the generated package: the class
//! module, the package `__init__`, and the generated-class manifest.
//! All declaration text is assembled in memory before anything touches
//! the output directory, so a failing run leaves no partial output.

use crate::manifest::{GeneratedClassManifest, ManifestError};
use modelgen_typegen::ir::ClassModel;
use modelgen_typegen::output::{PythonOptions, generate_python_init, generate_python_module};
use modelgen_typegen::{HintError, HintTable, ParseError, model, names, normalize, parse_schema_document};
use std::path::{Path, PathBuf};

/// Recognized generation options.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// JSON Schema document to generate classes from.
    pub schema_path: PathBuf,
    /// Optional code-generation hints document.
    pub hints_path: Option<PathBuf>,
    /// Directory the generated package is written to.
    pub output_directory: PathBuf,
    /// Replace a populated output directory instead of failing.
    pub overwrite_existing: bool,
    /// Package label embedded in the generated artifacts.
    pub module_name: String,
    /// Name for the top-level class; falls back to the schema `title`.
    pub root_class_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("schema file {} does not exist", .0.display())]
    SchemaMissing(PathBuf),
    #[error("code generation hints file {} does not exist", .0.display())]
    HintsMissing(PathBuf),
    #[error("output directory {} already exists; pass --force to replace it", .0.display())]
    OutputExists(PathBuf),
    #[error("no root class name: pass --root-class-name or give the schema a title")]
    MissingRootClassName,
    #[error("{}: invalid JSON: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Hints(#[from] HintError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Generate the object-model package described by `config`.
///
/// Returns the manifest of every class recorded for the output
/// directory, including classes from earlier runs when the directory is
/// being regenerated with `overwrite_existing`.
pub fn generate(config: &GenerateConfig) -> Result<GeneratedClassManifest, GenerateError> {
    if !config.schema_path.exists() {
        return Err(GenerateError::SchemaMissing(config.schema_path.clone()));
    }
    let schema_doc = read_json(&config.schema_path)?;

    let hints = match &config.hints_path {
        Some(path) => {
            if !path.exists() {
                return Err(GenerateError::HintsMissing(path.clone()));
            }
            HintTable::from_json(&read_json(path)?)?
        }
        None => HintTable::empty(),
    };

    let root_class_name = config
        .root_class_name
        .clone()
        .or_else(|| {
            schema_doc
                .get("title")
                .and_then(|t| t.as_str())
                .map(String::from)
        })
        .ok_or(GenerateError::MissingRootClassName)?;

    let schema = parse_schema_document(&schema_doc)?;
    let outcome = normalize(schema);
    for name in &outcome.collisions {
        tracing::warn!(
            definition = %name,
            "duplicate definition name during normalization; keeping the last one seen"
        );
    }
    let schema = outcome.schema;
    tracing::debug!(
        definitions = schema.definitions.len(),
        root = %root_class_name,
        "schema normalized"
    );

    // Build and emit everything before touching the filesystem.
    let definition_models: Vec<ClassModel> = schema
        .definitions
        .iter()
        .map(|def| model::build(&names::capitalize_first(&def.name), &def.node, &hints))
        .collect();
    let root_model = model::build(&root_class_name, &schema.root, &hints);

    let mut class_names = vec![root_model.name.clone()];
    class_names.extend(definition_models.iter().map(|m| m.name.clone()));

    let source_module = names::private_module_name(&root_class_name);
    let module_text = generate_python_module(
        &root_model,
        &definition_models,
        &PythonOptions {
            module_name: Some(config.module_name.clone()),
        },
    );
    let init_text = generate_python_init(&config.module_name, &source_module, &class_names);

    let mut manifest = prepare_output_directory(config)?;
    if !manifest.is_empty() {
        tracing::info!(
            existing = manifest.len(),
            "output directory already has generated classes on record"
        );
    }

    std::fs::write(
        config.output_directory.join(format!("{source_module}.py")),
        module_text,
    )?;
    std::fs::write(config.output_directory.join("__init__.py"), init_text)?;

    for class in &class_names {
        manifest.append(class.clone());
    }
    manifest.persist(&config.output_directory)?;

    tracing::info!(
        classes = class_names.len(),
        directory = %config.output_directory.display(),
        "generation complete"
    );
    Ok(manifest)
}

/// Apply the output-directory policy: a populated directory is fatal
/// unless overwriting was requested, in which case its manifest is
/// carried over before the directory is replaced.
fn prepare_output_directory(
    config: &GenerateConfig,
) -> Result<GeneratedClassManifest, GenerateError> {
    let dir = &config.output_directory;
    if dir.exists() {
        let populated = std::fs::read_dir(dir)?.next().is_some();
        if !populated {
            return Ok(GeneratedClassManifest::default());
        }
        if !config.overwrite_existing {
            return Err(GenerateError::OutputExists(dir.clone()));
        }
        let manifest = GeneratedClassManifest::load(dir)?;
        std::fs::remove_dir_all(dir)?;
        std::fs::create_dir_all(dir)?;
        return Ok(manifest);
    }

    std::fs::create_dir_all(dir)?;
    Ok(GeneratedClassManifest::default())
}

fn read_json(path: &Path) -> Result<serde_json::Value, GenerateError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| GenerateError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
