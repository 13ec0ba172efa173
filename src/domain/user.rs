use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::filter::Filterable;
use crate::domain::types::UserId;

/// Registered account as reported by the external API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Filterable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn category(&self) -> &str {
        &self.role
    }
}
