//! CMake literal formatting.

use crate::domain::descriptor::Scalar;

/// Format a descriptor scalar as a CMake argument.
///
/// `null` becomes the empty quoted argument.
pub fn format_literal(value: &Scalar) -> String {
    match value {
        Scalar::Null => "\"\"".to_string(),
        Scalar::Bool(true) => "ON".to_string(),
        Scalar::Bool(false) => "OFF".to_string(),
        Scalar::Number(number) => quote(&number.to_string()),
        Scalar::String(text) => quote(text),
    }
}

/// Quote `text` when it contains a space, escaping embedded double quotes.
pub fn quote(text: &str) -> String {
    if text.contains(' ') {
        format!("\"{}\"", text.replace('"', "\\\""))
    } else {
        text.to_string()
    }
}
