use thiserror::Error;

/// Validation errors raised before any storage or provider call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaunaError {
    #[error("At least one of prefecture or keyword is required")]
    MissingSearchFilter,

    #[error("User id must not be empty")]
    EmptyUserId,

    #[error("Email must not be empty")]
    EmptyEmail,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Sauna id must not be empty")]
    EmptyPlaceId,
}
