//! Favorite API operations.

use super::SaunalogClient;
use crate::error::Result;
use saunalog_core::sauna::{
    CreateFavoriteRequest, Favorite, FavoriteCreatedResponse, FavoritesResponse, MessageResponse,
    RemoveFavoriteQuery,
};

impl SaunalogClient {
    pub async fn add_favorite(
        &self,
        request: &CreateFavoriteRequest,
    ) -> Result<FavoriteCreatedResponse> {
        let response = self
            .client
            .post(self.url(&["favorites"])?)
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List every favorite.
    pub async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        let response = self.client.get(self.url(&["favorites"])?).send().await?;
        self.handle_response(response).await
    }

    /// List the saunas a user has favorited.
    pub async fn list_user_favorites(&self, user_id: &str) -> Result<FavoritesResponse> {
        let response = self
            .client
            .get(self.url(&["favorites", user_id])?)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Remove the favorite for a (user, sauna) pair.
    pub async fn remove_favorite(&self, query: &RemoveFavoriteQuery) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&["favorites"])?)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn remove_favorite_by_id(&self, id: i64) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&["favorites", &id.to_string()])?)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
