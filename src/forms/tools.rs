//! The single form every tool page posts.
//!
//! Fields a tool does not use are simply left empty; numeric fields stay
//! strings so that malformed numbers reach the tool and come back as an
//! `Invalid Input` result instead of a rejected request.

use serde::{Deserialize, Serialize};

use crate::domain::tool::ToolKind;
use crate::forms::FormError;
use crate::tools::ToolRequest;
use crate::tools::calculator::AngleMode;
use crate::tools::encoding::Base64Direction;
use crate::tools::generators::PasswordOptions;
use crate::tools::json::JsonMode;
use crate::tools::text::TextCase;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolForm {
    pub input: String,
    pub mode: String,
    pub direction: String,
    pub count: String,
    pub length: String,
    pub uppercase: Option<String>,
    pub digits: Option<String>,
    pub symbols: Option<String>,
    pub case: String,
    pub original: String,
    pub changed: String,
    pub value: String,
    pub from: String,
    pub to: String,
    pub expression: String,
    pub angle: String,
    pub start: String,
    pub end: String,
    pub birth_date: String,
    pub on: String,
}

fn parse_count(value: &str, field: &'static str, default: usize) -> Result<usize, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    value.parse().map_err(|_| FormError::InvalidNumber(field))
}

impl ToolForm {
    pub fn into_request(self, kind: ToolKind) -> Result<ToolRequest, FormError> {
        let request = match kind {
            ToolKind::JsonFormatter => ToolRequest::JsonFormatter {
                mode: JsonMode::parse(&self.mode).ok_or(FormError::InvalidOption("mode"))?,
                input: self.input,
            },
            ToolKind::Base64 => ToolRequest::Base64 {
                direction: Base64Direction::parse(&self.direction)
                    .ok_or(FormError::InvalidOption("direction"))?,
                input: self.input,
            },
            ToolKind::UuidGenerator => ToolRequest::UuidGenerator {
                count: parse_count(&self.count, "count", 1)?,
            },
            ToolKind::PasswordGenerator => ToolRequest::PasswordGenerator {
                options: PasswordOptions {
                    length: parse_count(
                        &self.length,
                        "length",
                        PasswordOptions::default().length,
                    )?,
                    uppercase: self.uppercase.is_some(),
                    digits: self.digits.is_some(),
                    symbols: self.symbols.is_some(),
                },
            },
            ToolKind::CaseConverter => ToolRequest::CaseConverter {
                case: TextCase::parse(&self.case).ok_or(FormError::InvalidOption("case"))?,
                input: self.input,
            },
            ToolKind::WordCounter => ToolRequest::WordCounter { input: self.input },
            ToolKind::TextDiff => ToolRequest::TextDiff {
                original: self.original,
                changed: self.changed,
            },
            ToolKind::HtmlSanitizer => ToolRequest::HtmlSanitizer { input: self.input },
            ToolKind::UnitConverter(dimension) => ToolRequest::UnitConverter {
                dimension,
                value: self.value,
                from: self.from,
                to: self.to,
            },
            ToolKind::Calculator => ToolRequest::Calculator {
                angle: AngleMode::parse(&self.angle).ok_or(FormError::InvalidOption("angle"))?,
                expression: self.expression,
            },
            ToolKind::DateDifference => ToolRequest::DateDifference {
                start: self.start,
                end: self.end,
            },
            ToolKind::AgeCalculator => ToolRequest::AgeCalculator {
                birth_date: self.birth_date,
                on: Some(self.on).filter(|s| !s.trim().is_empty()),
            },
            ToolKind::CsvToJson => ToolRequest::CsvToJson { input: self.input },
            ToolKind::JsonToCsv => ToolRequest::JsonToCsv { input: self.input },
        };
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::units::Dimension;

    #[test]
    fn unit_converter_keeps_raw_value() {
        let form = ToolForm {
            value: "abc".to_string(),
            from: "m".to_string(),
            to: "km".to_string(),
            ..ToolForm::default()
        };

        let request = form
            .into_request(ToolKind::UnitConverter(Dimension::Length))
            .unwrap();

        assert_eq!(
            request,
            ToolRequest::UnitConverter {
                dimension: Dimension::Length,
                value: "abc".to_string(),
                from: "m".to_string(),
                to: "km".to_string(),
            }
        );
    }

    #[test]
    fn password_checkboxes_map_to_options() {
        let form = ToolForm {
            length: "20".to_string(),
            digits: Some("on".to_string()),
            ..ToolForm::default()
        };

        let request = form.into_request(ToolKind::PasswordGenerator).unwrap();

        assert_eq!(
            request,
            ToolRequest::PasswordGenerator {
                options: PasswordOptions {
                    length: 20,
                    uppercase: false,
                    digits: true,
                    symbols: false,
                }
            }
        );
    }

    #[test]
    fn blank_options_fall_back_to_defaults() {
        let request = ToolForm {
            expression: "1+1".to_string(),
            ..ToolForm::default()
        }
        .into_request(ToolKind::Calculator)
        .unwrap();
        assert_eq!(
            request,
            ToolRequest::Calculator {
                expression: "1+1".to_string(),
                angle: AngleMode::Degrees,
            }
        );
    }

    #[test]
    fn unknown_options_are_rejected() {
        let form = ToolForm {
            case: "shouting".to_string(),
            ..ToolForm::default()
        };
        assert!(matches!(
            form.into_request(ToolKind::CaseConverter),
            Err(FormError::InvalidOption("case"))
        ));

        let form = ToolForm {
            count: "many".to_string(),
            ..ToolForm::default()
        };
        assert!(matches!(
            form.into_request(ToolKind::UuidGenerator),
            Err(FormError::InvalidNumber("count"))
        ));
    }
}
