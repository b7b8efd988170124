use chrono::{DateTime, FixedOffset, Offset, Utc};

use super::{SaunaError, User};

const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// The fixed +09:00 offset used for every stored timestamp.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// The current wall-clock time at +09:00.
pub fn jst_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Checks the fields a client must supply when registering a user.
pub fn validate_user(user: &User) -> Result<(), SaunaError> {
    if user.id.trim().is_empty() {
        return Err(SaunaError::EmptyUserId);
    }
    if user.email.trim().is_empty() {
        return Err(SaunaError::EmptyEmail);
    }
    if !user.email.contains('@') {
        return Err(SaunaError::InvalidEmail(user.email.clone()));
    }
    Ok(())
}

pub fn validate_place_id(place_id: &str) -> Result<(), SaunaError> {
    if place_id.trim().is_empty() {
        return Err(SaunaError::EmptyPlaceId);
    }
    Ok(())
}
