use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use saunalog_core::sauna::{
    CreateFavoriteRequest, Favorite, FavoriteCreatedResponse, FavoritesResponse, MessageResponse,
    RemoveFavoriteQuery,
};

use crate::{handlers::AppError, state::AppState};

const FAVORITE_REMOVED: &str = "Favorite removed successfully.";

/// List every favorite (GET /favorites).
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    let favorites = state.favorites.list_favorites().await?;
    Ok(Json(favorites))
}

/// Favorite a sauna, materialising it on first reference (POST /favorites).
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteCreatedResponse>), AppError> {
    let Json(payload) = payload?;
    let favorite = state
        .guard()
        .create_favorite(payload.into_new_favorite())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedResponse::new(favorite)),
    ))
}

/// Remove the favorite for a (user, sauna) pair (DELETE /favorites?user_id=&sauna_id=).
pub async fn remove_favorite(
    State(state): State<AppState>,
    query: Result<Query<RemoveFavoriteQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Query(query) = query?;
    state
        .guard()
        .remove_favorite(&query.user_id, &query.sauna_id)
        .await?;

    Ok(Json(MessageResponse::new(FAVORITE_REMOVED)))
}

/// Remove a favorite by id (DELETE /favorites/{favorite_id}).
pub async fn remove_favorite_by_id(
    State(state): State<AppState>,
    favorite_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(favorite_id) = favorite_id?;
    state.guard().remove_favorite_by_id(favorite_id).await?;

    Ok(Json(MessageResponse::new(FAVORITE_REMOVED)))
}

/// The saunas a user has favorited (GET /favorites/{user_id}).
///
/// An unknown user simply has no favorites.
pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favorites = state.favorites.list_favorites_for_user(&user_id).await?;
    Ok(Json(FavoritesResponse { favorites }))
}
