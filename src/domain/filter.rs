//! Free-text and category filtering shared by every listing.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Keyword that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Records that can be narrowed down by a search query and a category.
pub trait Filterable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Category tag compared against the selected category.
    fn category(&self) -> &str;
}

/// Selected category: either everything or a single tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// Parses user input; blank input and `all` (any case) select everything.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Tag(trimmed.to_string())
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tag.to_lowercase() == category.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Tag(tag) => tag,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

/// Current search text and category selection of a listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into().trim().to_string(),
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        matches(item, &self.query, &self.category)
    }
}

/// Returns `true` when `item` passes both the text and category dimension.
///
/// The query is matched case-insensitively as a substring of any search
/// field; an empty query matches everything.
pub fn matches<T: Filterable + ?Sized>(item: &T, query: &str, category: &CategoryFilter) -> bool {
    if !category.accepts(item.category()) {
        return false;
    }

    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
