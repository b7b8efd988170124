//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use rusqlite::Row;

use saunalog_core::sauna::{
    Favorite, Post, PostView, Sauna, SaunaSummary, User, UserSummary,
};

// ============================================================================
// Row conversions
// ============================================================================

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, name
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
    })
}

/// Convert a SQLite row to a Sauna.
///
/// Expected columns: id, name, address, prefecture, latitude, longitude
pub fn row_to_sauna(row: &Row) -> rusqlite::Result<Sauna> {
    Ok(Sauna {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        prefecture: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
    })
}

/// Convert a SQLite row to a Post.
///
/// Expected columns: id, user_id, sauna_id, content, created_at
pub fn row_to_post(row: &Row) -> rusqlite::Result<Post> {
    let created_at: String = row.get(4)?;

    Ok(Post {
        id: row.get(0)?,
        user_id: row.get(1)?,
        sauna_id: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_datetime(&created_at, 4)?,
    })
}

/// Convert a joined row to a PostView.
///
/// Expected columns: id, user_id, sauna_id, content, created_at, user name, sauna name
pub fn row_to_post_view(row: &Row) -> rusqlite::Result<PostView> {
    let post = row_to_post(row)?;
    let user = UserSummary {
        id: post.user_id.clone(),
        name: row.get(5)?,
    };
    let sauna = SaunaSummary {
        id: post.sauna_id.clone(),
        name: row.get(6)?,
    };

    Ok(PostView { post, user, sauna })
}

/// Convert a SQLite row to a Favorite.
///
/// Expected columns: id, user_id, sauna_id
pub fn row_to_favorite(row: &Row) -> rusqlite::Result<Favorite> {
    Ok(Favorite {
        id: row.get(0)?,
        user_id: row.get(1)?,
        sauna_id: row.get(2)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse a datetime from RFC 3339 string, keeping its offset.
fn parse_datetime(s: &str, column: usize) -> rusqlite::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a timestamp for SQLite storage.
///
/// Fixed microsecond precision keeps the text lexically ordered for
/// timestamps sharing an offset.
pub fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, false)
}
