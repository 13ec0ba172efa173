//! Document converters between CSV and JSON.

use serde_json::{Map, Value};

use crate::tools::{ToolError, ToolResult};

/// Converts CSV with a header row into a pretty-printed JSON array of objects.
/// Every value stays a string.
pub fn csv_to_json(input: &str) -> ToolResult {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ToolError::InvalidCsv(e.to_string()))?
        .clone();
    if headers.is_empty() {
        return Err(ToolError::InvalidCsv("missing header row".to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ToolError::InvalidCsv(e.to_string()))?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }

    serde_json::to_string_pretty(&Value::Array(rows))
        .map_err(|e| ToolError::InvalidCsv(e.to_string()))
}

/// Converts a JSON array of flat objects to CSV. The header is the union of
/// keys in first-seen order; missing keys become empty cells.
pub fn json_to_csv(input: &str) -> ToolResult {
    let value: Value =
        serde_json::from_str(input).map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    let Value::Array(rows) = value else {
        return Err(ToolError::InvalidJson(
            "expected an array of objects".to_string(),
        ));
    };

    let mut objects = Vec::with_capacity(rows.len());
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        let Value::Object(object) = row else {
            return Err(ToolError::InvalidJson(
                "expected an array of objects".to_string(),
            ));
        };
        for key in object.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
        objects.push(object);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|e| ToolError::InvalidCsv(e.to_string()))?;
    for object in &objects {
        let cells: Vec<String> = headers
            .iter()
            .map(|key| object.get(key).map(cell).unwrap_or_default())
            .collect();
        writer
            .write_record(&cells)
            .map_err(|e| ToolError::InvalidCsv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ToolError::InvalidCsv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ToolError::InvalidCsv(e.to_string()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
