use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::filter::Filterable;
use crate::domain::types::ConnectionId;

/// A contact request submitted through the marketing site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    /// Service the visitor asked about; used as the category.
    pub service: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Filterable for Connection {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.subject]
    }

    fn category(&self) -> &str {
        &self.service
    }
}
