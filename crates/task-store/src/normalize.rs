//! Task Normalization
//!
//! Converts whatever was found in storage into valid task records. Each
//! field is checked on its own; bad fields get defaults, and records left
//! without a title are dropped.

use serde_json::{Map, Value};

use crate::id::{generate_id, now_millis};
use crate::model::Task;

/// Normalize an untrusted JSON value into a task collection
pub fn normalize(raw: Value) -> Vec<Task> {
    let Value::Array(entries) = raw else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(fields) => Some(coerce_task(fields)),
            _ => None,
        })
        .filter(Task::has_title)
        .collect()
}

fn coerce_task(mut fields: Map<String, Value>) -> Task {
    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        _ => generate_id(),
    };
    let title = match fields.remove("title") {
        Some(Value::String(title)) => title,
        _ => String::new(),
    };
    let completed = fields.get("completed").map(is_truthy).unwrap_or(false);
    let created_at = fields
        .get("createdAt")
        .and_then(as_timestamp)
        .unwrap_or_else(now_millis);

    Task { id, title, completed, created_at }
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer milliseconds; fractions truncate, values outside `i64` are rejected
fn as_timestamp(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(ms) = n.as_i64() {
        return Some(ms);
    }
    let ms = n.as_f64()?.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if ms.is_finite() && ms >= i64::MIN as f64 && ms < i64::MAX as f64 {
        Some(ms as i64)
    } else {
        None
    }
}
