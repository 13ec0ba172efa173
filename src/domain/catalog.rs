use serde::{Deserialize, Serialize};

use crate::domain::filter::Filterable;

/// One card of the public tool catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: String,
}

impl Filterable for CatalogItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.category]
    }

    fn category(&self) -> &str {
        &self.category
    }
}
