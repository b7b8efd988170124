//! Post API operations.

use super::SaunalogClient;
use crate::error::Result;
use saunalog_core::sauna::{CreatePostRequest, ListPostsQuery, MessageResponse, Post, PostView};

impl SaunalogClient {
    /// List posts, optionally filtered by sauna and/or user.
    pub async fn list_posts(&self, query: &ListPostsQuery) -> Result<Vec<PostView>> {
        let response = self
            .client
            .get(self.url(&["posts"])?)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post> {
        let response = self
            .client
            .post(self.url(&["posts"])?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&["posts", &id.to_string()])?)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
