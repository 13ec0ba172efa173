//! Payloads exchanged with the external admin API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::connection::Connection as DomainConnection;
use crate::domain::types::{ConnectionId, TypeConstraintError, UserId};
use crate::domain::user::User as DomainUser;

/// Envelope wrapping every API response: `{ success, data, message }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<Connection> for DomainConnection {
    type Error = TypeConstraintError;

    fn try_from(value: Connection) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ConnectionId::new(value.id)?,
            name: value.name.trim().to_string(),
            email: value.email.trim().to_lowercase(),
            phone: value
                .phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            subject: value.subject.trim().to_string(),
            message: value.message,
            service: value.service.trim().to_string(),
            created_at: value.created_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_role() -> String {
    "user".to_string()
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(value.id)?,
            name: value.name.trim().to_string(),
            email: value.email.trim().to_lowercase(),
            role: value.role.trim().to_string(),
            created_at: value.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_connection_list_envelope() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "65f0",
                "name": " Ada ",
                "email": "ADA@example.com",
                "phone": "",
                "subject": "Pricing",
                "message": "Hello",
                "service": "Web Development",
                "createdAt": "2024-05-01T10:00:00Z"
            }]
        }"#;

        let envelope: ApiEnvelope<Vec<Connection>> = serde_json::from_str(body).unwrap();
        assert!(envelope.success);

        let connection =
            DomainConnection::try_from(envelope.data.unwrap().remove(0)).unwrap();
        assert_eq!(connection.id.as_str(), "65f0");
        assert_eq!(connection.name, "Ada");
        assert_eq!(connection.email, "ada@example.com");
        assert_eq!(connection.phone, None);
        assert!(connection.created_at.is_some());
    }

    #[test]
    fn failure_envelope_has_no_data() {
        let envelope: ApiEnvelope<Vec<User>> =
            serde_json::from_str(r#"{"success": false, "message": "forbidden"}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("forbidden"));
    }

    #[test]
    fn envelope_decodes_for_payloads_without_default() {
        // `Connection` has no `Default`; the envelope must not require one.
        let envelope: ApiEnvelope<Connection> =
            serde_json::from_str(r#"{"success": true, "data": {"id": "c1"}}"#).unwrap();
        assert_eq!(envelope.data.unwrap().id, "c1");

        let envelope: ApiEnvelope<Connection> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn user_without_id_is_rejected() {
        let user: User = serde_json::from_str(r#"{"id": " ", "name": "x"}"#).unwrap();
        assert_eq!(
            DomainUser::try_from(user),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
