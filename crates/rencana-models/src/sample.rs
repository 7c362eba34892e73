//! Schema-driven sample synthesis for the mock model.
//!
//! Walks a Gemini-style response schema (`type` names in any case, `enum`,
//! `items`, `minItems`, `properties`) and produces a value that satisfies it.
//! Array elements pick enum values by position, so a schema that enumerates
//! N allowed strings with `minItems: N` yields each string once, in order.

use serde_json::{Map, Value, json};

/// Produces a value conforming to `schema`.
pub fn sample_for(schema: &Value) -> Value {
    sample_at(schema, 0, "value")
}

fn sample_at(schema: &Value, index: usize, field: &str) -> Value {
    if let Some(choices) = schema.get("enum").and_then(Value::as_array) {
        if !choices.is_empty() {
            return choices[index % choices.len()].clone();
        }
    }

    let kind = schema.get("type").and_then(Value::as_str).unwrap_or("string").to_ascii_lowercase();

    match kind.as_str() {
        "object" => {
            let mut out = Map::new();
            if let Some(props) = schema.get("properties").and_then(Value::as_object) {
                for (name, prop) in props {
                    out.insert(name.clone(), sample_at(prop, index, name));
                }
            }
            Value::Object(out)
        }
        "array" => {
            let count = schema
                .get("minItems")
                .and_then(|v| v.as_u64().or_else(|| v.as_str().and_then(|s| s.parse().ok())))
                .map_or(1, |n| usize::try_from(n).unwrap_or(1));
            let items = schema.get("items").cloned().unwrap_or_else(|| json!({"type": "STRING"}));
            Value::Array((0..count).map(|i| sample_at(&items, i, field)).collect())
        }
        "number" | "integer" => json!(10 * (index + 1)),
        "boolean" => Value::Bool(true),
        _ => Value::String(format!("Contoh {} {}", field, index + 1)),
    }
}
