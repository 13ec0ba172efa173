use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogItem;
use crate::domain::filter::Filterable;
use crate::domain::types::ToolSlug;
use crate::tools::units::Dimension;

/// Which engine backs a tool and which input form its page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "dimension", rename_all = "kebab-case")]
pub enum ToolKind {
    JsonFormatter,
    Base64,
    UuidGenerator,
    PasswordGenerator,
    CaseConverter,
    WordCounter,
    TextDiff,
    HtmlSanitizer,
    UnitConverter(Dimension),
    Calculator,
    DateDifference,
    AgeCalculator,
    CsvToJson,
    JsonToCsv,
}

/// A utility listed in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tool {
    pub slug: ToolSlug,
    pub title: String,
    pub description: String,
    pub category: String,
    pub kind: ToolKind,
    /// Shown on the marketing home page.
    pub featured: bool,
}

impl Tool {
    pub fn link(&self) -> String {
        format!("/tools/{}", self.slug)
    }
}

impl From<&Tool> for CatalogItem {
    fn from(tool: &Tool) -> Self {
        Self {
            id: tool.slug.to_string(),
            title: tool.title.clone(),
            description: tool.description.clone(),
            category: tool.category.clone(),
            link: tool.link(),
        }
    }
}

/// Row of the admin tools table; searchable by title and category only.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ToolEntry {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub link: String,
    pub featured: bool,
}

impl From<&Tool> for ToolEntry {
    fn from(tool: &Tool) -> Self {
        Self {
            slug: tool.slug.to_string(),
            title: tool.title.clone(),
            category: tool.category.clone(),
            link: tool.link(),
            featured: tool.featured,
        }
    }
}

impl Filterable for ToolEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.category]
    }

    fn category(&self) -> &str {
        &self.category
    }
}
