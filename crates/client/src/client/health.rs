//! Health check operations.

use super::SaunalogClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Backends reported by `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub storage: String,
    pub places: String,
}

impl SaunalogClient {
    /// Liveness probe; true when the server answers 200.
    pub async fn livez(&self) -> Result<bool> {
        let response = self.client.get(self.url(&["livez"])?).send().await?;
        Ok(response.status().is_success())
    }

    pub async fn healthz(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url(&["healthz"])?).send().await?;
        self.handle_response(response).await
    }
}
