use thiserror::Error;

use saunalog_core::places::{place_error_to_status_code, PlaceError};
use saunalog_core::sauna::SaunaError;
use saunalog_core::storage::{repository_error_to_status_code, RepositoryError};

/// Errors raised while reconciling saunas or guarding relationships.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("This sauna is already in favorites.")]
    AlreadyFavorited { user_id: String, sauna_id: String },

    #[error(transparent)]
    Validation(#[from] SaunaError),

    #[error(transparent)]
    Provider(#[from] PlaceError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// A duplicate favorite is a client error (400) rather than a conflict, as
/// `POST /favorites` has always reported it.
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::NotFound { .. } => 404,
        ServiceError::AlreadyFavorited { .. } => 400,
        ServiceError::Validation(_) => 400,
        ServiceError::Provider(e) => place_error_to_status_code(e),
        ServiceError::Repository(e) => repository_error_to_status_code(e),
    }
}
