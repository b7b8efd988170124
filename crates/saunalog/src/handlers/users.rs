use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use saunalog_core::sauna::{validate_user, CreateUserRequest, User};
use saunalog_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List all users (GET /users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// Create or overwrite a user by id (POST /users).
pub async fn upsert_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(payload) = payload?;
    let user = payload.into_user();
    validate_user(&user)?;

    let user = state.users.upsert_user(&user).await?;
    tracing::info!(user_id = %user.id, "Upserted user");

    Ok(Json(user))
}

/// Get a single user by id (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    match state.users.get_user(&id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(RepositoryError::not_found("User", id).into()),
    }
}
