//! CSV rendering for export records

use serde_json::Value;

/// Render JSON records as CSV.
///
/// The header comes from the first record's fields, in order. Later records
/// are written against that header; missing fields become empty cells.
/// Returns an empty string when there are no records.
pub fn to_csv(records: &[Value]) -> String {
    let Some(Value::Object(first)) = records.first() else {
        return String::new();
    };

    let headers: Vec<&String> = first.keys().collect();
    let mut out = String::new();

    push_row(&mut out, headers.iter().map(|h| escape(h)));

    for record in records {
        let cells = headers.iter().map(|h| match record.get(h.as_str()) {
            Some(value) => escape(&cell(value)),
            None => String::new(),
        });
        push_row(&mut out, cells);
    }

    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    let row: Vec<String> = cells.collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested values stay machine-readable
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
