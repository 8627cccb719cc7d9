//! Default-value synthesis for optional fields.

use crate::ir::{DefaultExpr, PrimitiveType, SchemaKind, SchemaNode};
use serde_json::Value;

/// Compute the default expression for an optional field.
///
/// A declared `default` wins: string-typed defaults become string
/// literals, array-typed defaults become lazily-evaluated factories
/// (never a shared literal instance), and a default under an `enum`
/// constraint without a declared type is treated as a string literal.
/// Without a declared default, arrays and objects get per-instance empty
/// factories and everything else gets the absent sentinel.
///
/// Presence of `default` is what matters, not truthiness: `0`, `""`,
/// `false` and `[]` are honored.
pub fn synthesize(property: &SchemaNode) -> DefaultExpr {
    if let Some(default) = &property.default {
        return from_declared(property, default);
    }

    match property.kind {
        SchemaKind::Array => DefaultExpr::EmptyList,
        SchemaKind::Object => DefaultExpr::EmptyDict,
        _ => DefaultExpr::Absent,
    }
}

fn from_declared(property: &SchemaNode, default: &Value) -> DefaultExpr {
    match &property.kind {
        SchemaKind::Primitive(PrimitiveType::Str) => match default.as_str() {
            Some(text) => DefaultExpr::Str(text.to_string()),
            None => DefaultExpr::Literal(default.clone()),
        },
        SchemaKind::Array => DefaultExpr::ListFactory(default.clone()),
        SchemaKind::Any if property.enum_values.is_some() => match default.as_str() {
            Some(text) => DefaultExpr::Str(text.to_string()),
            None => DefaultExpr::Literal(default.clone()),
        },
        _ => DefaultExpr::Literal(default.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_schema_document;
    use serde_json::json;

    fn property(value: serde_json::Value) -> SchemaNode {
        let doc = json!({ "type": "object", "properties": { "p": value } });
        parse_schema_document(&doc)
            .unwrap()
            .root
            .properties
            .remove("p")
            .unwrap()
    }

    #[test]
    fn string_default_becomes_string_literal() {
        let expr = synthesize(&property(json!({ "type": "string", "default": "2.1.0" })));
        assert_eq!(expr, DefaultExpr::Str("2.1.0".into()));
    }

    #[test]
    fn array_default_becomes_lazy_factory() {
        let expr = synthesize(&property(json!({ "type": "array", "default": [1, 2] })));
        assert_eq!(expr, DefaultExpr::ListFactory(json!([1, 2])));
    }

    #[test]
    fn enum_default_without_type_is_a_string_literal() {
        let expr = synthesize(&property(json!({
            "enum": ["warning", "error"],
            "default": "warning"
        })));
        assert_eq!(expr, DefaultExpr::Str("warning".into()));
    }

    #[test]
    fn untyped_arrays_and_objects_get_empty_factories() {
        assert_eq!(
            synthesize(&property(json!({ "type": "array" }))),
            DefaultExpr::EmptyList
        );
        assert_eq!(
            synthesize(&property(json!({ "type": "object" }))),
            DefaultExpr::EmptyDict
        );
    }

    #[test]
    fn no_default_yields_absent_sentinel() {
        assert_eq!(
            synthesize(&property(json!({ "type": "string" }))),
            DefaultExpr::Absent
        );
        assert_eq!(
            synthesize(&property(json!({ "$ref": "#/$defs/release" }))),
            DefaultExpr::Absent
        );
    }

    #[test]
    fn falsy_defaults_are_real_defaults() {
        assert_eq!(
            synthesize(&property(json!({ "type": "integer", "default": 0 }))),
            DefaultExpr::Literal(json!(0))
        );
        assert_eq!(
            synthesize(&property(json!({ "type": "string", "default": "" }))),
            DefaultExpr::Str(String::new())
        );
        assert_eq!(
            synthesize(&property(json!({ "type": "boolean", "default": false }))),
            DefaultExpr::Literal(json!(false))
        );
        assert_eq!(
            synthesize(&property(json!({ "type": "array", "default": [] }))),
            DefaultExpr::ListFactory(json!([]))
        );
    }
}
