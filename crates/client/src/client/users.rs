//! User API operations.

use super::SaunalogClient;
use crate::error::Result;
use saunalog_core::sauna::{CreateUserRequest, User};

impl SaunalogClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.client.get(self.url(&["users"])?).send().await?;
        self.handle_response(response).await
    }

    /// Create or overwrite a user by id.
    pub async fn upsert_user(&self, request: &CreateUserRequest) -> Result<User> {
        let response = self
            .client
            .post(self.url(&["users"])?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        let response = self.client.get(self.url(&["users", id])?).send().await?;
        self.handle_response(response).await
    }
}
