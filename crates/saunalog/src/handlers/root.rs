use axum::Json;

use saunalog_core::sauna::MessageResponse;

/// Handler for GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Sauna App API"))
}
