use super::PlaceError;

/// Map a PlaceError to an HTTP status code.
///
/// The provider is an upstream dependency, so its failures surface as
/// gateway errors rather than internal ones.
pub fn place_error_to_status_code(error: &PlaceError) -> u16 {
    match error {
        PlaceError::Timeout(_) => 504,
        PlaceError::Upstream { .. }
        | PlaceError::Rejected { .. }
        | PlaceError::Transport(_)
        | PlaceError::Decode(_) => 502,
    }
}
