//! Field planning: membership, requiredness and order.
//!
//! The plan decides the declaration order of a class's fields.
//! Mandatory attributes must be declared before defaulted ones in the
//! attrs target, and container-typed fields always carry a factory
//! default, so they are relocated behind the plain required fields.

use crate::ir::{ContainerKind, SchemaKind, SchemaNode};

/// One planned field: membership, requiredness and container kind.
/// Identifiers and defaults are resolved later by the model builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedField {
    pub schema_name: String,
    pub required: bool,
    pub container: ContainerKind,
}

/// Compute the ordered field plan for an object schema.
///
/// Order: required non-container fields (lexicographic), then required
/// container fields (relative order preserved), then optional container
/// fields (lexicographic), then the remaining optional fields
/// (lexicographic). Every declared property appears exactly once.
pub fn plan(object: &SchemaNode) -> Vec<PlannedField> {
    let container_of = |name: &str| container_kind(&object.properties[name]);

    // Required names sorted lexicographically; names without a matching
    // property declaration are meaningless here and dropped.
    let required: Vec<&str> = object
        .required
        .iter()
        .map(String::as_str)
        .filter(|name| object.properties.contains_key(*name))
        .collect();

    let mut fields = Vec::with_capacity(object.properties.len());

    // Required scalars first, then required containers in the same
    // relative order.
    let scalars = required
        .iter()
        .copied()
        .filter(|name| container_of(name) == ContainerKind::None);
    let containers = required
        .iter()
        .copied()
        .filter(|name| container_of(name) != ContainerKind::None);
    for name in scalars.chain(containers) {
        fields.push(PlannedField {
            schema_name: name.to_string(),
            required: true,
            container: container_of(name),
        });
    }

    // Optional container fields cluster at the tail of the required
    // block so their factories run after all plain fields are bound.
    for (name, prop) in &object.properties {
        if !object.is_required(name) && container_kind(prop) != ContainerKind::None {
            fields.push(PlannedField {
                schema_name: name.clone(),
                required: false,
                container: container_kind(prop),
            });
        }
    }

    // Everything else is the optional segment.
    for (name, prop) in &object.properties {
        if !object.is_required(name) && container_kind(prop) == ContainerKind::None {
            fields.push(PlannedField {
                schema_name: name.clone(),
                required: false,
                container: ContainerKind::None,
            });
        }
    }

    fields
}

/// Container kind of a property's declared type. References and
/// primitives are not containers.
pub fn container_kind(node: &SchemaNode) -> ContainerKind {
    match node.kind {
        SchemaKind::Array => ContainerKind::Array,
        SchemaKind::Object => ContainerKind::Object,
        _ => ContainerKind::None,
    }
}
