//! JSON Schema document to IR parser.

use crate::ir::{Definition, PrimitiveType, Schema, SchemaKind, SchemaNode};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Parse a JSON Schema document into an IR [`Schema`].
///
/// The document's own `type`/`properties`/`required` describe the root
/// node; named sub-schemas come from `definitions` or, failing that,
/// `$defs`.
pub fn parse_schema_document(input: &Value) -> Result<Schema, ParseError> {
    let Some(doc) = input.as_object() else {
        return Err(ParseError::TopLevelNotObject);
    };

    let mut schema = Schema::new(parse_node(input)?);

    let defs = doc.get("definitions").or_else(|| doc.get("$defs"));
    if let Some(defs) = defs {
        let table = defs
            .as_object()
            .ok_or_else(|| ParseError::NotAMapping("definitions".into()))?;
        for (name, def) in table {
            schema.definitions.push(Definition {
                name: name.clone(),
                node: parse_node(def)?,
            });
        }
    }

    Ok(schema)
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("schema document must be a JSON object")]
    TopLevelNotObject,
    #[error("schema fragment must be a JSON object")]
    FragmentNotObject,
    #[error("`{0}` must be a JSON object")]
    NotAMapping(String),
    #[error("`required` must be an array of property names")]
    MalformedRequired,
}

/// Parse one schema fragment.
fn parse_node(value: &Value) -> Result<SchemaNode, ParseError> {
    let Some(obj) = value.as_object() else {
        return Err(ParseError::FragmentNotObject);
    };

    let kind = parse_kind(value);

    let mut properties = BTreeMap::new();
    if let Some(props) = obj.get("properties") {
        let table = props
            .as_object()
            .ok_or_else(|| ParseError::NotAMapping("properties".into()))?;
        for (name, prop) in table {
            properties.insert(name.clone(), parse_node(prop)?);
        }
    }

    let mut required = BTreeSet::new();
    if let Some(req) = obj.get("required") {
        let names = req.as_array().ok_or(ParseError::MalformedRequired)?;
        for name in names {
            let name = name.as_str().ok_or(ParseError::MalformedRequired)?;
            required.insert(name.to_string());
        }
    }

    let items = match obj.get("items") {
        Some(items) if items.is_object() => Some(Box::new(parse_node(items)?)),
        _ => None,
    };

    Ok(SchemaNode {
        kind,
        properties,
        required,
        items,
        description: obj
            .get("description")
            .and_then(|d| d.as_str())
            .map(String::from),
        default: obj.get("default").cloned(),
        enum_values: obj
            .get("enum")
            .and_then(|e| e.as_array())
            .map(|arr| arr.to_vec()),
    })
}

/// Decide the node's authoritative kind: `$ref`, then declared `type`.
fn parse_kind(value: &Value) -> SchemaKind {
    if let Some(ref_path) = value.get("$ref").and_then(|r| r.as_str()) {
        // "#/$defs/release" and "#/definitions/release" both name "release".
        let target = ref_path.rsplit('/').next().unwrap_or(ref_path);
        return SchemaKind::Ref(target.to_string());
    }

    match value.get("type").and_then(|t| t.as_str()) {
        Some("object") => SchemaKind::Object,
        Some("array") => SchemaKind::Array,
        Some(name) => match PrimitiveType::from_schema_name(name) {
            Some(primitive) => SchemaKind::Primitive(primitive),
            None => SchemaKind::Any,
        },
        None => SchemaKind::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_simple_object() {
        let input = json!({
            "title": "Robot",
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["id"]
        });

        let schema = parse_schema_document(&input).unwrap();
        assert_eq!(schema.root.kind, SchemaKind::Object);
        assert_eq!(schema.root.properties.len(), 2);
        assert!(schema.root.is_required("id"));
        assert!(!schema.root.is_required("tags"));

        let tags = &schema.root.properties["tags"];
        assert_eq!(tags.kind, SchemaKind::Array);
        assert_eq!(
            tags.items.as_ref().unwrap().kind,
            SchemaKind::Primitive(PrimitiveType::Str)
        );
    }

    #[test]
    fn parse_definitions_and_defs() {
        let input = json!({
            "type": "object",
            "definitions": {
                "job": { "type": "object", "properties": { "name": { "type": "string" } } }
            }
        });
        let schema = parse_schema_document(&input).unwrap();
        assert_eq!(schema.definitions.len(), 1);
        assert_eq!(schema.definitions[0].name, "job");

        let input = json!({
            "type": "object",
            "$defs": {
                "release": { "type": "object" }
            }
        });
        let schema = parse_schema_document(&input).unwrap();
        assert_eq!(schema.definitions.len(), 1);
        assert_eq!(schema.definitions[0].name, "release");
    }

    #[test]
    fn ref_resolves_to_last_path_segment() {
        let input = json!({
            "type": "object",
            "properties": {
                "release": { "$ref": "#/$defs/release" }
            }
        });
        let schema = parse_schema_document(&input).unwrap();
        assert_eq!(
            schema.root.properties["release"].kind,
            SchemaKind::Ref("release".into())
        );
    }

    #[test]
    fn captures_description_default_and_enum() {
        let input = json!({
            "type": "object",
            "properties": {
                "level": {
                    "description": "Severity level.",
                    "enum": ["warning", "error"],
                    "default": "warning"
                }
            }
        });
        let schema = parse_schema_document(&input).unwrap();
        let level = &schema.root.properties["level"];
        assert_eq!(level.kind, SchemaKind::Any);
        assert_eq!(level.description.as_deref(), Some("Severity level."));
        assert_eq!(level.default, Some(json!("warning")));
        assert_eq!(
            level.enum_values,
            Some(vec![json!("warning"), json!("error")])
        );
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            parse_schema_document(&json!([])),
            Err(ParseError::TopLevelNotObject)
        ));
        assert!(matches!(
            parse_schema_document(&json!({ "properties": 3 })),
            Err(ParseError::NotAMapping(_))
        ));
        assert!(matches!(
            parse_schema_document(&json!({ "required": "id" })),
            Err(ParseError::MalformedRequired)
        ));
    }

    #[test]
    fn falsy_defaults_are_preserved() {
        let input = json!({
            "type": "object",
            "properties": {
                "count": { "type": "integer", "default": 0 },
                "label": { "type": "string", "default": "" }
            }
        });
        let schema = parse_schema_document(&input).unwrap();
        assert_eq!(schema.root.properties["count"].default, Some(json!(0)));
        assert_eq!(schema.root.properties["label"].default, Some(json!("")));
    }
}
