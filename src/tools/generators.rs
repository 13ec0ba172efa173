//! Random identifiers and passwords.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tools::{ToolError, ToolResult};

pub const MAX_UUIDS: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Newline-separated v4 UUIDs.
pub fn uuids(count: usize) -> ToolResult {
    if !(1..=MAX_UUIDS).contains(&count) {
        return Err(ToolError::InvalidInput);
    }
    let ids: Vec<String> = (0..count).map(|_| Uuid::new_v4().to_string()).collect();
    Ok(ids.join("\n"))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

/// Generates a password containing at least one character of every enabled
/// class. Lowercase letters are always included.
pub fn password(options: &PasswordOptions) -> ToolResult {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(ToolError::InvalidInput);
    }

    let mut classes: Vec<&[u8]> = vec![LOWERCASE];
    if options.uppercase {
        classes.push(UPPERCASE);
    }
    if options.digits {
        classes.push(DIGITS);
    }
    if options.symbols {
        classes.push(SYMBOLS);
    }
    let alphabet: Vec<u8> = classes.concat();

    let mut rng = rand::rng();
    let mut chars: Vec<u8> = classes
        .iter()
        .filter_map(|class| class.choose(&mut rng).copied())
        .collect();
    while chars.len() < options.length {
        chars.push(alphabet[rng.random_range(0..alphabet.len())]);
    }
    chars.shuffle(&mut rng);

    String::from_utf8(chars).map_err(|_| ToolError::InvalidInput)
}
