use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use saunalog_core::places::{place_error_to_status_code, PlaceError};
use saunalog_core::sauna::SaunaError;
use saunalog_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::services::{service_error_to_status_code, ServiceError};

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(e) = self.0.downcast_ref::<ServiceError>() {
            service_error_to_status_code(e)
        } else if let Some(e) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(e)
        } else if let Some(e) = self.0.downcast_ref::<PlaceError>() {
            place_error_to_status_code(e)
        } else if self.0.downcast_ref::<SaunaError>().is_some() {
            400
        } else if let Some(e) = self.0.downcast_ref::<JsonRejection>() {
            e.status().as_u16()
        } else if let Some(e) = self.0.downcast_ref::<QueryRejection>() {
            e.status().as_u16()
        } else if let Some(e) = self.0.downcast_ref::<PathRejection>() {
            e.status().as_u16()
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let detail = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = ?self.0, "Request failed");
        } else {
            tracing::warn!(status = status_code.as_u16(), %detail, "Request rejected");
        }

        (status_code, Json(ErrorBody { detail })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
