//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::catalog::CatalogItem;
use crate::pagination::PageToken;

/// Response of `GET /api/v1/tools`.
#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    /// Number of tools matching the filter.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<PageToken>,
    pub tools: Vec<CatalogItem>,
}
