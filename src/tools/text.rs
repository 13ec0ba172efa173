//! Text transformers: case conversion, statistics and HTML sanitizing.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
    Constant,
}

impl TextCase {
    pub const ALL: [TextCase; 9] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Title,
        TextCase::Sentence,
        TextCase::Camel,
        TextCase::Pascal,
        TextCase::Snake,
        TextCase::Kebab,
        TextCase::Constant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextCase::Upper => "upper",
            TextCase::Lower => "lower",
            TextCase::Title => "title",
            TextCase::Sentence => "sentence",
            TextCase::Camel => "camel",
            TextCase::Pascal => "pascal",
            TextCase::Snake => "snake",
            TextCase::Kebab => "kebab",
            TextCase::Constant => "constant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|case| case.as_str() == value)
    }
}

pub fn convert_case(input: &str, case: TextCase) -> String {
    match case {
        TextCase::Upper => input.to_uppercase(),
        TextCase::Lower => input.to_lowercase(),
        TextCase::Title => title_case(input),
        TextCase::Sentence => sentence_case(input),
        TextCase::Camel => {
            let words = words(input);
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_lowercase());
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
        TextCase::Pascal => words(input).iter().map(|w| capitalize(w)).collect(),
        TextCase::Snake => join_lower(input, "_"),
        TextCase::Kebab => join_lower(input, "-"),
        TextCase::Constant => words(input)
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
    }
}

/// Splits identifiers and prose into words on separators and on
/// lower-to-upper case boundaries (`fooBar` → `foo`, `Bar`).
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }
        if c.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        previous_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn join_lower(input: &str, separator: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;
    for c in input.chars() {
        if capitalize_next && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
        if matches!(c, '.' | '!' | '?') {
            capitalize_next = true;
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

impl Display for TextStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Words: {}", self.words)?;
        writeln!(f, "Characters: {}", self.characters)?;
        writeln!(f, "Characters (no spaces): {}", self.characters_no_spaces)?;
        writeln!(f, "Lines: {}", self.lines)?;
        writeln!(f, "Sentences: {}", self.sentences)?;
        writeln!(f, "Paragraphs: {}", self.paragraphs)?;
        write!(f, "Reading time: {} min", self.reading_minutes)
    }
}

pub fn count(input: &str) -> TextStats {
    let words = input.split_whitespace().count();
    let sentences = input
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count();
    let paragraphs = input
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .count();

    TextStats {
        words,
        characters: input.chars().count(),
        characters_no_spaces: input.chars().filter(|c| !c.is_whitespace()).count(),
        lines: input.lines().count(),
        sentences,
        paragraphs,
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

/// Removes scripts, event handlers and other unsafe markup, keeping the
/// whitelisted formatting tags.
pub fn sanitize_html(input: &str) -> String {
    ammonia::clean(input)
}
