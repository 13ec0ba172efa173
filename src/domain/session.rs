//! Identity of the admin using the dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::types::EmailAddress;

/// Signed-in admin, passed explicitly to every service that needs it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: EmailAddress,
    pub name: String,
    pub roles: Vec<String>,
}

impl SessionUser {
    pub fn new(email: EmailAddress, roles: Vec<String>) -> Self {
        let name = email
            .as_str()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        Self { email, name, roles }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
