use thiserror::Error;

/// Failures talking to the external places provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// The provider answered with a non-success HTTP status.
    #[error("Places provider returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The provider answered 200 but refused the request in its payload.
    #[error("Places provider rejected the request ({status}): {message}")]
    Rejected { status: String, message: String },

    #[error("Places provider request timed out: {0}")]
    Timeout(String),

    #[error("Places provider request failed: {0}")]
    Transport(String),

    #[error("Invalid places provider payload: {0}")]
    Decode(String),
}
