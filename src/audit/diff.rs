//! One-line diffs between before/after snapshots

use serde_json::Value;

/// Describe top-level field changes between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes: Vec<String> = before_obj
                .iter()
                .filter_map(|(key, before_val)| match after_obj.get(key) {
                    Some(after_val) if after_val == before_val => None,
                    Some(after_val) => Some(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    None => Some(format!("{}: {} -> (removed)", key, format_value(before_val))),
                })
                .collect();

            changes.extend(
                after_obj
                    .iter()
                    .filter(|(key, _)| !before_obj.contains_key(*key))
                    .map(|(key, val)| format!("{}: (added) -> {}", key, format_value(val))),
            );

            (!changes.is_empty()).then(|| changes.join(", "))
        }
        _ if before == after => None,
        _ => Some(format!("{} -> {}", format_value(before), format_value(after))),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
