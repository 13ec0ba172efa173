use serde::Serialize;

use crate::domain::catalog::CatalogItem;
use crate::domain::filter::FilterState;
use crate::pagination::Paginated;

/// Data required to render the tool catalog.
#[derive(Debug, Serialize)]
pub struct CatalogPageData {
    pub tools: Paginated<CatalogItem>,
    pub filter: FilterState,
    pub categories: Vec<String>,
}

/// Data required to render the marketing home page.
#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub featured: Vec<CatalogItem>,
    pub categories: Vec<String>,
    pub tool_count: usize,
}
