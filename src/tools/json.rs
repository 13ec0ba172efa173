//! JSON formatter: pretty-print, minify or validate a document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::tools::{ToolError, ToolResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonMode {
    #[default]
    Pretty,
    PrettyFourSpaces,
    Minify,
    Validate,
}

impl JsonMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "pretty" => Some(Self::Pretty),
            "pretty-four-spaces" => Some(Self::PrettyFourSpaces),
            "minify" => Some(Self::Minify),
            "validate" => Some(Self::Validate),
            _ => None,
        }
    }
}

pub fn parse(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

pub fn format(input: &str, mode: JsonMode) -> ToolResult {
    let value = parse(input)?;
    match mode {
        JsonMode::Pretty => to_indented(&value, b"  "),
        JsonMode::PrettyFourSpaces => to_indented(&value, b"    "),
        JsonMode::Minify => {
            serde_json::to_string(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
        }
        JsonMode::Validate => Ok(format!("Valid JSON ({})", describe(&value))),
    }
}

fn to_indented(value: &Value, indent: &[u8]) -> ToolResult {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent));
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::InvalidJson(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("object with {} keys", map.len()),
        Value::Array(items) => format!("array with {} items", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_prints_with_two_spaces() {
        let output = format(r#"{"a":[1,2]}"#, JsonMode::Pretty).unwrap();
        assert_eq!(output, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn pretty_prints_with_four_spaces() {
        let output = format(r#"{"a":1}"#, JsonMode::PrettyFourSpaces).unwrap();
        assert_eq!(output, "{\n    \"a\": 1\n}");
    }

    #[test]
    fn minifies() {
        let output = format("{ \"a\" : 1 ,\n \"b\": [ true ] }", JsonMode::Minify).unwrap();
        assert_eq!(output, r#"{"a":1,"b":[true]}"#);
    }

    #[test]
    fn validates() {
        assert_eq!(
            format("[1, 2, 3]", JsonMode::Validate).unwrap(),
            "Valid JSON (array with 3 items)"
        );
    }

    #[test]
    fn reports_syntax_errors() {
        let err = format("{\"a\":", JsonMode::Pretty).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!(JsonMode::parse(""), Some(JsonMode::Pretty));
        assert_eq!(JsonMode::parse("minify"), Some(JsonMode::Minify));
        assert_eq!(JsonMode::parse("yaml"), None);
    }
}
