//! Intermediate representation for schema-driven class generation.
//!
//! The input parser normalizes a JSON Schema document to this IR before
//! any transformation or emission happens.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A complete schema: the root object plus its named sub-definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The root schema node (the document itself).
    pub root: SchemaNode,
    /// Named sub-definitions, in first-discovered order. Names are unique.
    pub definitions: Vec<Definition>,
}

/// A named, top-level schema node referenced elsewhere via `$ref`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition key as it appears in the schema (e.g. "release").
    pub name: String,
    /// The definition's schema.
    pub node: SchemaNode,
}

/// One typed fragment of a JSON Schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// The node's authoritative kind.
    pub kind: SchemaKind,
    /// Declared properties. Declaration order is irrelevant; a sorted map
    /// keeps downstream stages deterministic.
    pub properties: BTreeMap<String, SchemaNode>,
    /// Property names the schema declares as required.
    pub required: BTreeSet<String>,
    /// Item schema, for array nodes.
    pub items: Option<Box<SchemaNode>>,
    /// Documentation text.
    pub description: Option<String>,
    /// Declared default literal.
    pub default: Option<serde_json::Value>,
    /// Declared `enum` constraint, in schema order.
    pub enum_values: Option<Vec<serde_json::Value>>,
}

/// The kind of a schema node. Exactly one variant is authoritative per node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaKind {
    /// A primitive type mapped to a target scalar.
    Primitive(PrimitiveType),
    /// An object with (possibly zero) named properties.
    Object,
    /// An array of items.
    Array,
    /// A reference to a named definition.
    Ref(String),
    /// No declared type (enum-only or untyped nodes).
    #[default]
    Any,
}

/// Primitive schema types and their Python scalar mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Str,
    Int,
    Float,
    Bool,
}

impl PrimitiveType {
    /// The schema type name this primitive was parsed from.
    pub fn schema_name(self) -> &'static str {
        match self {
            PrimitiveType::Str => "string",
            PrimitiveType::Int => "integer",
            PrimitiveType::Float => "number",
            PrimitiveType::Bool => "boolean",
        }
    }

    /// The Python scalar type the generated class derives from.
    pub fn python_name(self) -> &'static str {
        match self {
            PrimitiveType::Str => "str",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Bool => "bool",
        }
    }

    /// Map a schema `type` string to a primitive, if it is one.
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(PrimitiveType::Str),
            "integer" => Some(PrimitiveType::Int),
            "number" => Some(PrimitiveType::Float),
            "boolean" => Some(PrimitiveType::Bool),
            _ => None,
        }
    }
}

/// The generator's representation of one emitted class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Class name (already capitalized for definitions).
    pub name: String,
    /// Documentation text rendered as the class docstring.
    pub description: Option<String>,
    /// What the class derives from.
    pub base: BaseKind,
    /// The class body.
    pub body: ClassBody,
}

/// What a generated class derives from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseKind {
    /// Wrapper around a target scalar type (`str`, `int`, ...).
    Primitive(PrimitiveType),
    /// Untyped/dynamic schema object with no declared properties;
    /// derives from `dict`.
    GenericObject,
    /// Ordinary object with declared properties.
    PlainObject,
}

/// A class body: either an explicit no-op placeholder or ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassBody {
    /// Zero properties; the emitter produces a `pass` placeholder.
    Empty,
    /// Ordered field declarations. Order is part of the output contract.
    Fields(Vec<FieldSpec>),
}

/// One field's resolved identifier, requiredness, container kind and
/// default expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Original property key from the schema. Always retained so emitted
    /// output can be mapped back to the wire representation.
    pub schema_name: String,
    /// Sanitized/hinted identifier used in the generated declaration.
    pub target_identifier: String,
    /// Whether the schema declares the property required.
    pub required: bool,
    /// Container kind of the property's declared type.
    pub container: ContainerKind,
    /// Default expression. Present iff the field is not required.
    pub default: Option<DefaultExpr>,
    /// Semantic type annotation, when one is known.
    pub type_hint: Option<String>,
}

/// Container kind of a field's declared type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    #[default]
    None,
    Array,
    Object,
}

/// A default-value expression for an optional field.
///
/// The set is closed so the emitter can never render a shared mutable
/// container: list and dict defaults always go through per-instance
/// factories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultExpr {
    /// No usable default; the absent sentinel (`None`).
    Absent,
    /// A string literal.
    Str(String),
    /// A scalar literal rendered as a Python literal.
    Literal(serde_json::Value),
    /// A declared list default, built lazily per instance.
    ListFactory(serde_json::Value),
    /// A fresh empty list per instance.
    EmptyList,
    /// A fresh empty dict per instance.
    EmptyDict,
}

impl Schema {
    pub fn new(root: SchemaNode) -> Self {
        Self {
            root,
            definitions: Vec::new(),
        }
    }

    /// Look up a definition by name.
    pub fn definition(&self, name: &str) -> Option<&SchemaNode> {
        self.definitions
            .iter()
            .find(|d| d.name == name)
            .map(|d| &d.node)
    }
}

impl SchemaNode {
    /// A node of the given kind with no other facets.
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Does this node declare at least one property?
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Is the given property declared required?
    pub fn is_required(&self, property: &str) -> bool {
        self.required.contains(property)
    }
}

impl ClassBody {
    /// Field specs in declaration order; empty for placeholder bodies.
    pub fn fields(&self) -> &[FieldSpec] {
        match self {
            ClassBody::Empty => &[],
            ClassBody::Fields(fields) => fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_mapping_round_trips() {
        for ty in [
            PrimitiveType::Str,
            PrimitiveType::Int,
            PrimitiveType::Float,
            PrimitiveType::Bool,
        ] {
            assert_eq!(PrimitiveType::from_schema_name(ty.schema_name()), Some(ty));
        }
        assert_eq!(PrimitiveType::from_schema_name("object"), None);
    }

    #[test]
    fn schema_definition_lookup() {
        let mut schema = Schema::new(SchemaNode::of_kind(SchemaKind::Object));
        schema.definitions.push(Definition {
            name: "release".into(),
            node: SchemaNode::of_kind(SchemaKind::Object),
        });

        assert!(schema.definition("release").is_some());
        assert!(schema.definition("job").is_none());
    }

    #[test]
    fn empty_body_has_no_fields() {
        assert!(ClassBody::Empty.fields().is_empty());
    }
}
