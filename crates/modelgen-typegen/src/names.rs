//! Identifier resolution and naming utilities for the Python target.

use crate::hints::HintTable;

/// Python reserved words. Identifiers colliding with one of these are
/// escaped with a leading underscore.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Is `word` a Python reserved word?
pub fn is_reserved(word: &str) -> bool {
    PYTHON_KEYWORDS.contains(&word)
}

/// Resolve the emitted identifier for a schema property.
///
/// A `PropertyNameHint` for `"<class>.<property>"` is used verbatim;
/// otherwise the schema name is kept unchanged. The result is escaped
/// with a leading underscore iff it is a reserved word. No case
/// conversion happens here.
pub fn resolve(class_name: &str, schema_property: &str, hints: &HintTable) -> String {
    let name = hints
        .property_name(class_name, schema_property)
        .unwrap_or(schema_property);

    if is_reserved(name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Capitalize the first character, leaving the rest unchanged:
/// `"job"` → `"Job"`, `"jobStep"` → `"JobStep"`.
pub fn capitalize_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a class name to underscore-separated form:
/// `"RobotArm"` → `"robot_arm"`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if index != 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Module file name for a generated class. The leading underscore marks
/// the module as private: users import from the package, not the module.
pub fn private_module_name(class_name: &str) -> String {
    format!("_{}", to_snake_case(class_name))
}

/// Force a user-supplied name into a valid Python identifier: a leading
/// digit gets an underscore prefix, invalid characters become
/// underscores, and a leading underscore gets an `x` prefix so the name
/// does not look private.
pub fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        result.push('_');
    }
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            result.push(ch);
        } else {
            result.push('_');
        }
    }
    if result.starts_with('_') {
        result.insert(0, 'x');
    }
    result
}
