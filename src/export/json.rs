//! JSON rendering.
//!
//! Same layout as `serde_json::to_string_pretty` (two-space indent, any
//! depth), with keys and scalar values colorized when color is enabled.

use colored::Colorize;
use serde_json::Value;

use crate::geoip::GeoRecord;

const INDENT: &str = "  ";

/// Renders the full record as pretty JSON.
pub fn render_json(record: &GeoRecord) -> String {
    let mut out = String::new();
    let value = Value::Object(record.fields().clone());
    write_value(&mut out, &value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".bold().to_string()),
        Value::Bool(_) | Value::Number(_) => {
            out.push_str(&value.to_string().as_str().yellow().to_string())
        }
        // Display on a string Value yields the quoted, escaped form
        Value::String(_) => out.push_str(&value.to_string().as_str().green().to_string()),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                out.push_str(if i == 0 { "\n" } else { ",\n" });
                push_indent(out, depth + 1);
                write_value(out, item, depth + 1);
            }
            out.push('\n');
            push_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(if i == 0 { "\n" } else { ",\n" });
                push_indent(out, depth + 1);
                let quoted = Value::String(key.clone()).to_string();
                out.push_str(&quoted.as_str().cyan().to_string());
                out.push_str(": ");
                write_value(out, item, depth + 1);
            }
            out.push('\n');
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uncolored_output_matches_serde_pretty() {
        colored::control::set_override(false);
        let value = json!({
            "status": "success",
            "country": "United States",
            "lat": 39.03,
            "mobile": false,
            "note": "quote \" and\nnewline",
            "nested": {"list": [1, {"deep": [[]]}, null], "empty": {}},
            "query": "8.8.8.8"
        });
        let record: GeoRecord = serde_json::from_value(value.clone()).unwrap();

        let expected = serde_json::to_string_pretty(&value).unwrap();
        assert_eq!(render_json(&record), expected);
    }

    #[test]
    fn test_empty_record() {
        colored::control::set_override(false);
        assert_eq!(render_json(&GeoRecord::default()), "{}");
    }
}
