//! Stateless utilities behind the tool pages.
//!
//! Every tool is a pure function from a [`ToolRequest`] to text. Invalid input
//! is reported through [`ToolError`], whose display strings are exactly what
//! the result panel shows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calculator;
pub mod dates;
pub mod diff;
pub mod documents;
pub mod encoding;
pub mod generators;
pub mod json;
pub mod text;
pub mod units;

use calculator::AngleMode;
use encoding::Base64Direction;
use json::JsonMode;
use text::TextCase;
use units::Dimension;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid Date")]
    InvalidDate,
    #[error("Error")]
    Evaluation,
    #[error("Invalid Input")]
    InvalidInput,
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid CSV: {0}")]
    InvalidCsv(String),
}

pub type ToolResult = Result<String, ToolError>;

/// Input for one tool run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
pub enum ToolRequest {
    JsonFormatter {
        input: String,
        #[serde(default)]
        mode: JsonMode,
    },
    Base64 {
        input: String,
        #[serde(default)]
        direction: Base64Direction,
    },
    UuidGenerator {
        #[serde(default = "default_uuid_count")]
        count: usize,
    },
    PasswordGenerator {
        #[serde(default)]
        options: generators::PasswordOptions,
    },
    CaseConverter {
        input: String,
        case: TextCase,
    },
    WordCounter {
        input: String,
    },
    TextDiff {
        original: String,
        changed: String,
    },
    HtmlSanitizer {
        input: String,
    },
    UnitConverter {
        dimension: Dimension,
        value: String,
        from: String,
        to: String,
    },
    Calculator {
        expression: String,
        #[serde(default)]
        angle: AngleMode,
    },
    DateDifference {
        start: String,
        end: String,
    },
    AgeCalculator {
        birth_date: String,
        /// Defaults to today when absent.
        #[serde(default)]
        on: Option<String>,
    },
    CsvToJson {
        input: String,
    },
    JsonToCsv {
        input: String,
    },
}

fn default_uuid_count() -> usize {
    1
}

/// Result panel contents for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub output: String,
    pub is_error: bool,
}

impl From<ToolResult> for ToolOutcome {
    fn from(result: ToolResult) -> Self {
        match result {
            Ok(output) => Self {
                output,
                is_error: false,
            },
            Err(err) => Self {
                output: err.to_string(),
                is_error: true,
            },
        }
    }
}

pub fn execute(request: &ToolRequest) -> ToolResult {
    match request {
        ToolRequest::JsonFormatter { input, mode } => json::format(input, *mode),
        ToolRequest::Base64 { input, direction } => encoding::base64(input, *direction),
        ToolRequest::UuidGenerator { count } => generators::uuids(*count),
        ToolRequest::PasswordGenerator { options } => generators::password(options),
        ToolRequest::CaseConverter { input, case } => Ok(text::convert_case(input, *case)),
        ToolRequest::WordCounter { input } => Ok(text::count(input).to_string()),
        ToolRequest::TextDiff { original, changed } => Ok(diff::lines(original, changed)),
        ToolRequest::HtmlSanitizer { input } => Ok(text::sanitize_html(input)),
        ToolRequest::UnitConverter {
            dimension,
            value,
            from,
            to,
        } => units::convert(*dimension, value, from, to),
        ToolRequest::Calculator { expression, angle } => calculator::evaluate(expression, *angle)
            .map(format_number),
        ToolRequest::DateDifference { start, end } => dates::difference(start, end),
        ToolRequest::AgeCalculator { birth_date, on } => dates::age(birth_date, on.as_deref()),
        ToolRequest::CsvToJson { input } => documents::csv_to_json(input),
        ToolRequest::JsonToCsv { input } => documents::json_to_csv(input),
    }
}

/// Runs a request and folds failures into the literal shown to visitors.
pub fn run(request: &ToolRequest) -> ToolOutcome {
    execute(request).into()
}

/// Magnitude from which numbers are shown in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e15;

/// Renders a number with at most ten fractional digits, trailing zeros trimmed.
///
/// Very large magnitudes use exponent form (`1e300`) with the same trimming.
pub fn format_number(value: f64) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        let text = format!("{value:.10e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{mantissa}e{exponent}")
            }
            None => text,
        };
    }

    let rounded = (value * 1e10).round() / 1e10;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.10}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_trims_noise() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_number_switches_to_exponent_for_huge_values() {
        assert_eq!(format_number(123_456_789_012_345.0), "123456789012345");
        assert_eq!(format_number(1e15), "1e15");
        assert_eq!(format_number(1e300), "1e300");
        assert_eq!(format_number(-2.5e300), "-2.5e300");
        assert_eq!(format_number(f64::MAX), "1.7976931349e308");
    }

    #[test]
    fn errors_render_as_literals() {
        let outcome = run(&ToolRequest::DateDifference {
            start: "yesterday".to_string(),
            end: "2024-01-01".to_string(),
        });
        assert!(outcome.is_error);
        assert_eq!(outcome.output, "Invalid Date");

        let outcome = run(&ToolRequest::Calculator {
            expression: "1 +".to_string(),
            angle: AngleMode::Radians,
        });
        assert_eq!(outcome.output, "Error");
    }

    #[test]
    fn requests_deserialize_from_tagged_json() {
        let request: ToolRequest = serde_json::from_str(
            r#"{"tool":"unit-converter","dimension":"length","value":"1","from":"km","to":"m"}"#,
        )
        .unwrap();
        assert_eq!(run(&request).output, "1000");

        let request: ToolRequest =
            serde_json::from_str(r#"{"tool":"calculator","expression":"2^10"}"#).unwrap();
        assert_eq!(run(&request).output, "1024");
    }
}
