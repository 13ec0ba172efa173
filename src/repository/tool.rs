use crate::domain::tool::{Tool, ToolKind};
use crate::domain::types::ToolSlug;
use crate::repository::ToolReader;
use crate::repository::errors::RepositoryResult;
use crate::tools::units::Dimension;

struct ToolDefinition {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    kind: ToolKind,
    featured: bool,
}

const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        slug: "json-formatter",
        title: "JSON Formatter",
        description: "Pretty-print, minify and validate JSON documents.",
        category: "Developer",
        kind: ToolKind::JsonFormatter,
        featured: true,
    },
    ToolDefinition {
        slug: "base64",
        title: "Base64 Encoder / Decoder",
        description: "Encode text to Base64 or decode Base64 back to text.",
        category: "Developer",
        kind: ToolKind::Base64,
        featured: false,
    },
    ToolDefinition {
        slug: "html-sanitizer",
        title: "HTML Sanitizer",
        description: "Strip scripts and unsafe attributes from HTML snippets.",
        category: "Developer",
        kind: ToolKind::HtmlSanitizer,
        featured: false,
    },
    ToolDefinition {
        slug: "uuid-generator",
        title: "UUID Generator",
        description: "Generate random version 4 UUIDs in bulk.",
        category: "Generators",
        kind: ToolKind::UuidGenerator,
        featured: true,
    },
    ToolDefinition {
        slug: "password-generator",
        title: "Password Generator",
        description: "Create strong random passwords with the character sets you need.",
        category: "Generators",
        kind: ToolKind::PasswordGenerator,
        featured: true,
    },
    ToolDefinition {
        slug: "case-converter",
        title: "Case Converter",
        description: "Switch text between upper, lower, title, camel, snake and kebab case.",
        category: "Text",
        kind: ToolKind::CaseConverter,
        featured: true,
    },
    ToolDefinition {
        slug: "word-counter",
        title: "Word Counter",
        description: "Count words, characters, sentences and estimate reading time.",
        category: "Text",
        kind: ToolKind::WordCounter,
        featured: true,
    },
    ToolDefinition {
        slug: "text-diff",
        title: "Text Diff",
        description: "Compare two texts line by line and highlight the changes.",
        category: "Text",
        kind: ToolKind::TextDiff,
        featured: false,
    },
    ToolDefinition {
        slug: "length-converter",
        title: "Length Converter",
        description: "Convert between metres, feet, inches, miles and more.",
        category: "Converters",
        kind: ToolKind::UnitConverter(Dimension::Length),
        featured: true,
    },
    ToolDefinition {
        slug: "weight-converter",
        title: "Weight Converter",
        description: "Convert between grams, kilograms, pounds, ounces and stones.",
        category: "Converters",
        kind: ToolKind::UnitConverter(Dimension::Weight),
        featured: false,
    },
    ToolDefinition {
        slug: "temperature-converter",
        title: "Temperature Converter",
        description: "Convert between Celsius, Fahrenheit and Kelvin.",
        category: "Converters",
        kind: ToolKind::UnitConverter(Dimension::Temperature),
        featured: false,
    },
    ToolDefinition {
        slug: "data-size-converter",
        title: "Data Size Converter",
        description: "Convert between bytes, kilobytes, mebibytes and other storage units.",
        category: "Converters",
        kind: ToolKind::UnitConverter(Dimension::DataSize),
        featured: false,
    },
    ToolDefinition {
        slug: "scientific-calculator",
        title: "Scientific Calculator",
        description: "Evaluate expressions with powers, factorials, logarithms and trigonometry.",
        category: "Math",
        kind: ToolKind::Calculator,
        featured: true,
    },
    ToolDefinition {
        slug: "date-difference",
        title: "Date Difference Calculator",
        description: "Count the days, weeks, months and years between two dates.",
        category: "Date & Time",
        kind: ToolKind::DateDifference,
        featured: false,
    },
    ToolDefinition {
        slug: "age-calculator",
        title: "Age Calculator",
        description: "Work out an exact age in years, months and days.",
        category: "Date & Time",
        kind: ToolKind::AgeCalculator,
        featured: false,
    },
    ToolDefinition {
        slug: "csv-to-json",
        title: "CSV to JSON",
        description: "Turn a CSV table with a header row into a JSON array.",
        category: "Documents",
        kind: ToolKind::CsvToJson,
        featured: false,
    },
    ToolDefinition {
        slug: "json-to-csv",
        title: "JSON to CSV",
        description: "Flatten a JSON array of objects into a CSV table.",
        category: "Documents",
        kind: ToolKind::JsonToCsv,
        featured: false,
    },
];

impl ToolDefinition {
    fn to_tool(&self) -> RepositoryResult<Tool> {
        Ok(Tool {
            slug: ToolSlug::new(self.slug)?,
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            kind: self.kind,
            featured: self.featured,
        })
    }
}

/// Serves the built-in tool table.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticToolRepository;

impl StaticToolRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ToolReader for StaticToolRepository {
    fn list_tools(&self) -> RepositoryResult<Vec<Tool>> {
        TOOLS.iter().map(ToolDefinition::to_tool).collect()
    }

    fn get_tool_by_slug(&self, slug: &ToolSlug) -> RepositoryResult<Option<Tool>> {
        TOOLS
            .iter()
            .find(|definition| definition.slug == slug.as_str())
            .map(ToolDefinition::to_tool)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_definition_is_valid_and_unique() {
        let tools = StaticToolRepository::new().list_tools().unwrap();
        assert_eq!(tools.len(), TOOLS.len());

        let slugs: HashSet<_> = tools.iter().map(|t| t.slug.clone()).collect();
        assert_eq!(slugs.len(), tools.len());
    }

    #[test]
    fn finds_tool_by_slug() {
        let repo = StaticToolRepository::new();
        let slug = ToolSlug::new("scientific-calculator").unwrap();

        let tool = repo.get_tool_by_slug(&slug).unwrap().unwrap();

        assert_eq!(tool.kind, ToolKind::Calculator);
        assert_eq!(tool.link(), "/tools/scientific-calculator");
    }

    #[test]
    fn unknown_slug_is_none() {
        let repo = StaticToolRepository::new();
        let slug = ToolSlug::new("flux-capacitor").unwrap();
        assert!(repo.get_tool_by_slug(&slug).unwrap().is_none());
    }
}
