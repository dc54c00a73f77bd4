use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::info;

use crate::error::RelayError;
use crate::types::*;

pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Error)]
pub enum SlackApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered {status}: {body}")]
    Status {
        endpoint: String,
        status: StatusCode,
        body: String,
    },
    #[error("{endpoint} returned error: {error}")]
    Api { endpoint: String, error: String },
}

/// Rejects a request whose token differs from the configured verification token.
pub fn verify_token(token: &str, verification_token: &str) -> Result<(), RelayError> {
    if token == verification_token {
        Ok(())
    } else {
        Err(RelayError::InvalidToken)
    }
}

pub struct SlackClient {
    client: Client,
    base_url: String,
    oauth_token: String,
}

impl SlackClient {
    pub fn new(oauth_token: String) -> Self {
        Self::with_base_url(SLACK_API_BASE_URL.to_string(), oauth_token)
    }

    pub fn with_base_url(base_url: String, oauth_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            oauth_token,
        }
    }

    /// `users.list` without pagination: large workspaces only see the first page.
    pub async fn list_users(&self) -> Result<Vec<SlackUser>, SlackApiError> {
        let endpoint = "users.list";
        let response: ListUsersResponse = self.get(endpoint, &[]).await?;

        if !response.ok {
            return Err(SlackApiError::Api {
                endpoint: endpoint.to_string(),
                error: response.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }

        Ok(response.members)
    }

    pub async fn list_user_groups(&self) -> Result<Vec<SlackUserGroup>, SlackApiError> {
        let endpoint = "usergroups.list";
        let response: ListUserGroupsResponse =
            self.get(endpoint, &[("include_users", "true")]).await?;

        if !response.ok {
            return Err(SlackApiError::Api {
                endpoint: endpoint.to_string(),
                error: response.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }

        Ok(response.usergroups)
    }

    pub async fn post_webhook(&self, webhook_url: &str, text: &str) -> Result<(), SlackApiError> {
        let message = WebhookMessage {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|source| SlackApiError::Transport {
                endpoint: "webhook".to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(SlackApiError::Status {
                endpoint: "webhook".to_string(),
                status,
                body,
            });
        }

        info!("Webhook answered: '{}'", body);
        Ok(())
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, SlackApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let transport = |source| SlackApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        info!("Issuing '{}' call to Slack...", endpoint);

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .bearer_auth(&self.oauth_token)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackApiError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(transport)
    }
}
