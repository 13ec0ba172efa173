use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::connection::Connection;
use crate::domain::types::ConnectionId;
use crate::domain::user::User;
use crate::models::api::{ApiEnvelope, Connection as ApiConnection, User as ApiUser};
use crate::models::config::ServerConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ConnectionReader, ConnectionWriter, UserReader};

/// Header carrying the shared secret on every API call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the external admin API.
#[derive(Clone)]
pub struct ApiRepository {
    client: Client,
    base_url: String,
    secret: String,
}

impl ApiRepository {
    pub fn new(base_url: &str, secret: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret: secret.to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> RepositoryResult<Self> {
        Self::new(
            &config.api_base_url,
            &config.api_secret,
            Duration::from_secs(config.api_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.secret)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope<T> = response.json().await?;
        unwrap_envelope(envelope)?.ok_or_else(|| {
            RepositoryError::DecodeError(format!("Response to {path} carried no data"))
        })
    }

    async fn delete(&self, path: &str) -> RepositoryResult<()> {
        let response = self
            .client
            .delete(self.url(path))
            .header(API_KEY_HEADER, &self.secret)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ApiEnvelope<serde_json::Value> = response.json().await?;
        unwrap_envelope(envelope).map(|_| ())
    }
}

/// Turns a `success: false` envelope into an error carrying the API message.
fn unwrap_envelope<T>(envelope: ApiEnvelope<T>) -> RepositoryResult<Option<T>> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(RepositoryError::ApiError(
            envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string()),
        ))
    }
}

impl ConnectionReader for ApiRepository {
    async fn list_connections(&self) -> RepositoryResult<Vec<Connection>> {
        let records: Vec<ApiConnection> = self.get("connections").await?;
        records
            .into_iter()
            .map(|record| Connection::try_from(record).map_err(RepositoryError::from))
            .collect()
    }
}

impl ConnectionWriter for ApiRepository {
    async fn delete_connection(&self, id: &ConnectionId) -> RepositoryResult<()> {
        self.delete(&format!("connections/{id}")).await
    }
}

impl UserReader for ApiRepository {
    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        let records: Vec<ApiUser> = self.get("users").await?;
        records
            .into_iter()
            .map(|record| User::try_from(record).map_err(RepositoryError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_under_api_prefix() {
        let repo =
            ApiRepository::new("https://api.example.com/", "s", Duration::from_secs(1)).unwrap();
        assert_eq!(
            repo.url("/connections/7"),
            "https://api.example.com/api/connections/7"
        );
    }

    #[test]
    fn unsuccessful_envelope_becomes_api_error() {
        let envelope: ApiEnvelope<Vec<u8>> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("Unauthorized".to_string()),
        };
        assert!(matches!(
            unwrap_envelope(envelope),
            Err(RepositoryError::ApiError(message)) if message == "Unauthorized"
        ));
    }
}
