//! Python attrs-class emitter.
//!
//! Generated classes target the `attr` runtime: every field is an
//! `attr.ib(...)` carrying metadata that binds the emitted identifier
//! back to the original schema property name. Container-typed fields go
//! through per-instance factories so no two instances ever share a
//! mutable default.

use crate::ir::{BaseKind, ClassBody, ClassModel, ContainerKind, DefaultExpr, FieldSpec};
use serde_json::Value;

/// Options for the Python backend.
#[derive(Debug, Clone, Default)]
pub struct PythonOptions {
    /// Package label embedded in the generated-file header.
    pub module_name: Option<String>,
}

/// Render one class declaration.
pub fn emit_class(model: &ClassModel) -> String {
    let parent = match &model.base {
        BaseKind::Primitive(primitive) => primitive.python_name(),
        BaseKind::GenericObject => "dict",
        BaseKind::PlainObject => "object",
    };

    let mut out = String::new();
    out.push_str("@attr.s\n");
    out.push_str(&format!("class {}({}):\n", model.name, parent));

    if let Some(description) = &model.description {
        out.push_str(&format!("    \"\"\"{}\"\"\"\n", description));
        out.push('\n');
    }

    match &model.body {
        ClassBody::Empty => out.push_str("    pass\n"),
        ClassBody::Fields(fields) => {
            for field in fields {
                out.push_str(&emit_attrib(field));
            }
        }
    }

    out
}

/// Render a full module: header, `import attr`, the root class first,
/// then every definition class.
pub fn generate_python_module(
    root: &ClassModel,
    definitions: &[ClassModel],
    options: &PythonOptions,
) -> String {
    let mut out = header(options);
    out.push('\n');
    out.push_str("import attr\n");

    for class in std::iter::once(root).chain(definitions) {
        out.push_str("\n\n");
        out.push_str(&emit_class(class));
    }

    out
}

/// Render the package-initialization artifact: one import per generated
/// class (root first) and the matching `__all__` list.
pub fn generate_python_init(
    module_name: &str,
    source_module: &str,
    class_names: &[String],
) -> String {
    let mut out = header(&PythonOptions {
        module_name: Some(module_name.to_string()),
    });
    out.push('\n');
    out.push_str(&format!(
        "\"\"\"Public exports of the {} object model.\"\"\"\n",
        module_name
    ));
    out.push('\n');

    for class in class_names {
        out.push_str(&format!("from .{} import {}\n", source_module, class));
    }

    out.push('\n');
    out.push_str("__all__ = [\n");
    for class in class_names {
        out.push_str(&format!("    \"{}\",\n", class));
    }
    out.push_str("]\n");

    out
}

fn header(options: &PythonOptions) -> String {
    match &options.module_name {
        Some(module) => format!(
            "# This file was generated by modelgen for the {} package. Do not edit.\n",
            module
        ),
        None => "# This file was generated by modelgen. Do not edit.\n".to_string(),
    }
}

/// One field declaration. The container factory or rendered default
/// comes first, the schema-name metadata binding last. `factory=` and
/// `default=` are mutually exclusive by construction.
fn emit_attrib(field: &FieldSpec) -> String {
    let mut parts = String::new();

    match &field.default {
        None => match field.container {
            ContainerKind::Array => parts.push_str("factory=list, "),
            ContainerKind::Object => parts.push_str("factory=dict, "),
            ContainerKind::None => {}
        },
        Some(expr) => match expr {
            DefaultExpr::EmptyList => parts.push_str("factory=list, "),
            DefaultExpr::EmptyDict => parts.push_str("factory=dict, "),
            DefaultExpr::Absent => parts.push_str("default=None, "),
            DefaultExpr::Str(text) => {
                parts.push_str(&format!("default={}, ", quote(text)));
            }
            DefaultExpr::Literal(value) => {
                parts.push_str(&format!("default={}, ", py_literal(value)));
            }
            DefaultExpr::ListFactory(value) => {
                parts.push_str(&format!(
                    "default=attr.Factory(lambda: {}), ",
                    py_literal(value)
                ));
            }
        },
    }

    format!(
        "    {} = attr.ib({}metadata={{\"schema_property_name\": \"{}\"}})\n",
        field.target_identifier, parts, field.schema_name
    )
}

/// Render a JSON literal as a Python literal.
fn py_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(py_literal).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Object(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, item)| format!("{}: {}", quote(key), py_literal(item)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}

/// Double-quoted Python string literal.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}
