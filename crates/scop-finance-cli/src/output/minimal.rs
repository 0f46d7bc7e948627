use serde_json::Value;

use super::format::format_field;

/// Print just the headline figure from the output.
///
/// Heuristic: look for this domain's key result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Headline figures: the tax saving, the annuity payment, the funding total
    let priority_keys = ["tax_savings", "annual_payment", "total_financing"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_field(key, val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_field(key, val));
            return;
        }
    }

    println!("{}", result_obj);
}
