//! Schema normalization: promote nested inline objects to named
//! definitions.
//!
//! After normalization no schema node anywhere in the tree is an object
//! with declared properties unless it is the root or a named definition;
//! every other nested object appears only as a `$ref`. This is the
//! canonical input the rest of the pipeline expects.

use crate::ir::{Definition, Schema, SchemaKind, SchemaNode};

/// Result of a normalization pass.
///
/// Normalization is total: it cannot fail, but duplicate definition names
/// are recorded so callers can report them. The duplicate's last-seen
/// shape wins.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    /// The canonical schema.
    pub schema: Schema,
    /// Definition names that were registered more than once.
    pub collisions: Vec<String>,
}

/// Normalize a schema: every nested inline object (and array-of-object
/// item) with declared properties becomes a named definition referenced
/// by `$ref`, keyed by the property name that held it.
///
/// Definitions keep first-discovered order. Object nodes without
/// properties stay inline; they carry no shape worth naming and their
/// fields still need a mapping-typed default. Idempotent.
pub fn normalize(schema: Schema) -> NormalizeOutcome {
    let Schema { mut root, definitions } = schema;

    let mut state = Normalizer::default();
    for def in definitions {
        state.register(def.name.clone(), def.node);
    }

    state.walk(&mut root);
    let mut index = 0;
    while index < state.definitions.len() {
        let mut node = std::mem::take(&mut state.definitions[index].node);
        state.walk(&mut node);
        state.definitions[index].node = node;
        index += 1;
    }

    NormalizeOutcome {
        schema: Schema {
            root,
            definitions: state.definitions,
        },
        collisions: state.collisions,
    }
}

#[derive(Default)]
struct Normalizer {
    definitions: Vec<Definition>,
    collisions: Vec<String>,
}

impl Normalizer {
    /// Depth-first promotion over one node's properties.
    fn walk(&mut self, node: &mut SchemaNode) {
        for (name, prop) in node.properties.iter_mut() {
            match prop.kind {
                SchemaKind::Object if prop.has_properties() => {
                    self.promote(name.clone(), prop);
                }
                SchemaKind::Array => {
                    self.walk_items(name, prop);
                }
                _ => {}
            }
        }

        if let Some(items) = node.items.as_deref_mut() {
            self.walk(items);
        }
    }

    /// Array items receive the same treatment one level down: an
    /// array-of-object property promotes its item schema under the
    /// property's own name.
    fn walk_items(&mut self, property_name: &str, array: &mut SchemaNode) {
        let Some(items) = array.items.as_deref_mut() else {
            return;
        };
        if items.kind == SchemaKind::Object && items.has_properties() {
            self.promote(property_name.to_string(), items);
        } else {
            self.walk(items);
        }
    }

    /// Recursively normalize `node`, register it under `name`, and
    /// replace it in place with a `$ref` to that definition.
    fn promote(&mut self, name: String, node: &mut SchemaNode) {
        self.walk(node);
        let replacement = SchemaNode::of_kind(SchemaKind::Ref(name.clone()));
        let taken = std::mem::replace(node, replacement);
        self.register(name, taken);
    }

    fn register(&mut self, name: String, node: SchemaNode) {
        if let Some(existing) = self.definitions.iter_mut().find(|d| d.name == name) {
            // Last write wins, but the collision is surfaced to the caller.
            self.collisions.push(name);
            existing.node = node;
        } else {
            self.definitions.push(Definition { name, node });
        }
    }
}
