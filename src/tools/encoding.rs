use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::tools::{ToolError, ToolResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Base64Direction {
    #[default]
    Encode,
    Decode,
}

impl Base64Direction {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" | "encode" => Some(Self::Encode),
            "decode" => Some(Self::Decode),
            _ => None,
        }
    }
}

pub fn base64(input: &str, direction: Base64Direction) -> ToolResult {
    match direction {
        Base64Direction::Encode => Ok(STANDARD.encode(input.as_bytes())),
        Base64Direction::Decode => {
            let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = STANDARD
                .decode(compact.as_bytes())
                .map_err(|_| ToolError::InvalidInput)?;
            String::from_utf8(bytes).map_err(|_| ToolError::InvalidInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_utf8() {
        assert_eq!(
            base64("héllo", Base64Direction::Encode).unwrap(),
            "aMOpbGxv"
        );
    }

    #[test]
    fn decodes_ignoring_line_breaks() {
        assert_eq!(
            base64("aGVs\nbG8=", Base64Direction::Decode).unwrap(),
            "hello"
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            base64("%%%", Base64Direction::Decode),
            Err(ToolError::InvalidInput)
        );
        // Valid base64 for bytes that are not UTF-8.
        assert_eq!(
            base64("/w==", Base64Direction::Decode),
            Err(ToolError::InvalidInput)
        );
    }
}
