//! Class-model assembly: one schema node in, one [`ClassModel`] out.

use crate::defaults;
use crate::hints::HintTable;
use crate::ir::{BaseKind, ClassBody, ClassModel, FieldSpec, SchemaKind, SchemaNode};
use crate::names;
use crate::plan;

/// Build the class model for a schema node.
///
/// The base kind is a primitive wrapper when the node's own type maps to
/// a Python scalar, the generic `dict` fallback when the node declares no
/// properties at all (untyped/dynamic schema objects), and a plain
/// object otherwise. Field order comes from the planner; identifiers are
/// hint-resolved and keyword-escaped, and optional fields get a
/// synthesized default. The original schema property name is always
/// retained alongside the emitted identifier.
pub fn build(name: &str, node: &SchemaNode, hints: &HintTable) -> ClassModel {
    let base = match &node.kind {
        SchemaKind::Primitive(primitive) => BaseKind::Primitive(*primitive),
        _ if !node.has_properties() => BaseKind::GenericObject,
        _ => BaseKind::PlainObject,
    };

    let body = if node.has_properties() {
        let fields = plan::plan(node)
            .into_iter()
            .map(|planned| {
                let property = &node.properties[&planned.schema_name];
                FieldSpec {
                    target_identifier: names::resolve(name, &planned.schema_name, hints),
                    required: planned.required,
                    container: planned.container,
                    default: (!planned.required).then(|| defaults::synthesize(property)),
                    type_hint: type_hint(property),
                    schema_name: planned.schema_name,
                }
            })
            .collect();
        ClassBody::Fields(fields)
    } else {
        ClassBody::Empty
    };

    ClassModel {
        name: name.to_string(),
        description: node.description.clone(),
        base,
        body,
    }
}

/// Semantic type annotation for a property, when one is known.
fn type_hint(property: &SchemaNode) -> Option<String> {
    match &property.kind {
        SchemaKind::Primitive(primitive) => Some(primitive.python_name().to_string()),
        SchemaKind::Array => Some("list".to_string()),
        SchemaKind::Object => Some("dict".to_string()),
        SchemaKind::Ref(target) => Some(names::capitalize_first(target)),
        SchemaKind::Any => None,
    }
}
