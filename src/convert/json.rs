//! JSON probe and pretty-printer.

use serde_json::Value;

use crate::patterns;

/// True when the trimmed text opens/closes a matching `{}`/`[]` pair and
/// parses as JSON. Used by recipe selection to upgrade `Plain` to
/// `json-pretty`; bare scalars deliberately do not count.
pub fn is_json(text: &str) -> bool {
    patterns::has_json_shape(text) && serde_json::from_str::<Value>(text.trim()).is_ok()
}

/// Re-serialize with stable indentation. `None` when parsing fails.
pub fn pretty_print(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
