use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::models::{MessageRequest, MessageResponse};
use crate::api::{AlertSink, ApiError};

/// Pushover API client for push notifications
pub struct PushoverClient {
    http_client: HttpClient,
    app_token: String,
    user_key: String,
    base_url: String,
}

impl PushoverClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.pushover.net";
    pub const TITLE: &'static str = "🚨 Gold Price Alert";
    /// High priority: bypasses the user's quiet hours
    pub const PRIORITY: i8 = 1;

    /// Create a new client with custom base URL
    pub fn with_base_url(app_token: String, user_key: String, base_url: String) -> Self {
        Self::with_http_client(HttpClient::new(), app_token, user_key, base_url)
    }

    pub fn with_http_client(
        http_client: HttpClient,
        app_token: String,
        user_key: String,
        base_url: String,
    ) -> Self {
        Self {
            http_client,
            app_token,
            user_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /1/messages.json
    ///
    /// Sends `message` to the configured user. Any status other than 200 is an
    /// error; the response body is kept in the error for the logs.
    pub async fn send_message(&self, message: &str) -> Result<(), ApiError> {
        let url = format!("{}/1/messages.json", self.base_url);

        let form = MessageRequest {
            token: &self.app_token,
            user: &self.user_key,
            title: Self::TITLE,
            message,
            priority: Self::PRIORITY,
        };

        let response = self
            .http_client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(ApiError::from_send)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        // The receipt is informational only
        if let Ok(receipt) = response.json::<MessageResponse>().await {
            debug!(
                "Pushover accepted message (status {}, request {})",
                receipt.status, receipt.request
            );
        }

        Ok(())
    }
}

#[async_trait]
impl AlertSink for PushoverClient {
    async fn send(&self, message: &str) -> Result<(), ApiError> {
        self.send_message(message).await
    }
}
