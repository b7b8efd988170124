//! HTTP client for the saunalog API.

pub mod favorites;
pub mod health;
pub mod posts;
pub mod saunas;
pub mod users;

use reqwest::Url;
use serde::Deserialize;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the saunalog API.
#[derive(Debug, Clone)]
pub struct SaunalogClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl SaunalogClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (SAUNALOG_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SAUNALOG_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint, percent-encoding each path segment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Decode a success body or turn the server's `detail` into an error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice(&body)
                .map_err(|e| ClientError::InvalidResponse(e.to_string()));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_from_body(status.as_u16(), &body))
    }
}

/// Maps an error response to a [`ClientError`], preferring the `detail` field.
pub(crate) fn error_from_body(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| body.to_string());

    if status == 404 {
        ClientError::NotFound { resource: message }
    } else {
        ClientError::ServerError { status, message }
    }
}
