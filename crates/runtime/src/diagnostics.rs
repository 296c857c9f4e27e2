//! Flattening of nested records into `path = value` lines for logging.
//!
//! Any serializable value is converted to JSON and walked depth-first:
//! object fields extend the path with `.field`, array elements with `[index]`.
//! Null and absent fields produce no line.

use serde::Serialize;
use serde_json::Value;

use crate::api::{Result, RuntimeError};

/// Flattens `value` into `(path, value)` pairs rooted at `root`.
pub fn flatten<T: Serialize>(value: &T, root: &str) -> Result<Vec<(String, String)>> {
    let json = serde_json::to_value(value).map_err(RuntimeError::Diagnostics)?;
    let mut lines = Vec::new();
    walk(&json, root.to_string(), &mut lines);
    Ok(lines)
}

fn walk(value: &Value, path: String, lines: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Object(fields) => {
            for (name, field) in fields {
                walk(field, format!("{path}.{name}"), lines);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, format!("{path}[{index}]"), lines);
            }
        }
        Value::String(text) => lines.push((path, text.clone())),
        Value::Bool(_) | Value::Number(_) => lines.push((path, value.to_string())),
    }
}

/// Logs every leaf of `value` at debug level.
pub fn log_flattened<T: Serialize>(value: &T, root: &str) {
    match flatten(value, root) {
        Ok(lines) => {
            for (path, value) in lines {
                tracing::debug!("{}: {}", path, value);
            }
        }
        Err(err) => tracing::warn!("Could not flatten {}: {}", root, err),
    }
}
