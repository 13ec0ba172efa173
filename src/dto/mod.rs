//! DTO modules that bridge services with templates and APIs.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod tools;

use serde::Deserialize;

use crate::domain::filter::{CategoryFilter, FilterState};

/// Query parameters shared by every filterable listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Free-text search entered by the user.
    #[serde(default)]
    pub q: Option<String>,
    /// Selected category; absent or `all` selects everything.
    #[serde(default)]
    pub category: Option<String>,
    /// Page number requested by the user interface.
    #[serde(default)]
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(
            self.q.clone().unwrap_or_default(),
            CategoryFilter::parse(self.category.as_deref().unwrap_or_default()),
        )
    }

    pub fn page_or_first(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}
