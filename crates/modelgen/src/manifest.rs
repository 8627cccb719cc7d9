//! Generated-class manifest.
//!
//! Every run records the class names it emitted in
//! `generated_classes.json` inside the output directory. The file is an
//! append-only JSON array: repeated runs against the same directory keep
//! the earlier entries, so callers can see what already exists. At most
//! one generator process may target a given output directory at a time.

use std::path::{Path, PathBuf};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "generated_classes.json";

/// Ordered, append-only list of generated class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedClassManifest {
    classes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("manifest {} is not a JSON array of class names: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write manifest {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GeneratedClassManifest {
    /// Load the manifest from an output directory. A missing file is an
    /// empty manifest, not an error.
    pub fn load(output_directory: &Path) -> Result<Self, ManifestError> {
        let path = output_directory.join(MANIFEST_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        let classes =
            serde_json::from_str(&text).map_err(|source| ManifestError::Malformed { path, source })?;
        Ok(Self { classes })
    }

    /// Record one more generated class.
    pub fn append(&mut self, class_name: impl Into<String>) {
        self.classes.push(class_name.into());
    }

    /// Class names in recorded order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Write the manifest into the output directory.
    pub fn persist(&self, output_directory: &Path) -> Result<(), ManifestError> {
        let path = output_directory.join(MANIFEST_FILE_NAME);
        let text = serde_json::to_string_pretty(&self.classes)
            .expect("a list of strings always serializes");
        std::fs::write(&path, text).map_err(|source| ManifestError::Write { path, source })
    }
}
