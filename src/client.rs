use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::debug;

use crate::error::{Result, UserListError};
use crate::types::User;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Anything the widget can pull a user list from.
#[async_trait]
pub trait UserSource {
    async fn fetch_users(&self) -> Result<Vec<User>>;
}

#[derive(Clone)]
pub struct UsersClient {
    http: Client,
    endpoint: String,
}

impl UsersClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl UserSource for UsersClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        debug!(endpoint = %self.endpoint, "requesting users");

        let response = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserListError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
