//! Code-generation hints.
//!
//! Hints are an externally supplied side table keyed by
//! `"<ClassName>.<schemaPropertyName>"`. Each entry carries a list of
//! hint records; unknown hint kinds are rejected when the table is
//! loaded, not silently ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A single code-generation hint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Hint {
    /// Rename the emitted identifier for a property.
    PropertyNameHint { arguments: PropertyNameArguments },
}

/// Arguments of a [`Hint::PropertyNameHint`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PropertyNameArguments {
    /// The identifier to emit instead of the schema property name.
    #[serde(rename = "override")]
    pub override_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HintError {
    #[error("hints document is not valid: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// The hint table. Absent entries mean "use the schema name unchanged".
#[derive(Debug, Clone, Default)]
pub struct HintTable {
    entries: BTreeMap<String, Vec<Hint>>,
}

impl HintTable {
    /// A table with no hints.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a hint table from its JSON document. Fails on unknown hint
    /// kinds or malformed records.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, HintError> {
        let entries: BTreeMap<String, Vec<Hint>> = serde_json::from_value(value.clone())?;
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The property-name override for `<class_name>.<schema_property>`,
    /// if one is hinted.
    pub fn property_name(&self, class_name: &str, schema_property: &str) -> Option<&str> {
        let key = format!("{class_name}.{schema_property}");
        self.entries.get(&key)?.iter().find_map(|hint| match hint {
            Hint::PropertyNameHint { arguments } => Some(arguments.override_name.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_property_name_hints() {
        let table = HintTable::from_json(&json!({
            "Robot.id": [
                { "kind": "PropertyNameHint", "arguments": { "override": "robotId" } }
            ]
        }))
        .unwrap();

        assert_eq!(table.property_name("Robot", "id"), Some("robotId"));
        assert_eq!(table.property_name("Robot", "tags"), None);
    }

    #[test]
    fn rejects_unknown_hint_kinds_at_load() {
        let result = HintTable::from_json(&json!({
            "Robot.id": [
                { "kind": "FrobnicateHint", "arguments": {} }
            ]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_arguments() {
        let result = HintTable::from_json(&json!({
            "Robot.id": [
                { "kind": "PropertyNameHint", "arguments": { "rename": "robotId" } }
            ]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_table_has_no_overrides() {
        let table = HintTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.property_name("Robot", "id"), None);
    }
}
