//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use saunalog_core::sauna::{Favorite, NewFavorite, NewPost, Post, PostView, Sauna, User};
use saunalog_core::storage::{
    FavoriteRepository, PostFilter, PostRepository, RepositoryError, Result, SaunaRepository,
    UserRepository,
};

use super::conversions::{
    format_datetime, row_to_favorite, row_to_post, row_to_post_view, row_to_sauna, row_to_user,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Runs a single-row lookup, turning "no rows" into `None`.
fn query_optional<T, P, F>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
    f: F,
) -> std::result::Result<Option<T>, tokio_rusqlite::Error>
where
    P: rusqlite::Params,
    F: FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
    match stmt.query_row(params, f) {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(wrap_err(e)),
    }
}

/// Collects every row of a query.
fn query_all<T, P, F>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
    f: F,
) -> std::result::Result<Vec<T>, tokio_rusqlite::Error>
where
    P: rusqlite::Params,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
    let rows = stmt.query_map(params, f).map_err(wrap_err)?;

    let mut items = Vec::new();
    for row_result in rows {
        items.push(row_result.map_err(wrap_err)?);
    }
    Ok(items)
}

/// Executes a delete by primary key, failing with "no rows" when nothing matched.
fn delete_by_id<P: rusqlite::Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
) -> std::result::Result<(), tokio_rusqlite::Error> {
    let rows = conn.execute(sql, params).map_err(wrap_err)?;
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Enable foreign keys and create the schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let id = id.to_string();
        let id_for_err = id.clone();

        self.conn
            .call(move |conn| query_optional(conn, schema::SELECT_USER_BY_ID, [&id], row_to_user))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id_for_err))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| query_all(conn, schema::SELECT_USERS, [], row_to_user))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn upsert_user(&self, user: &User) -> Result<User> {
        let stored = user.clone();
        let email_for_err = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_USER,
                    rusqlite::params![stored.id, stored.email, stored.name],
                )
                .map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", email_for_err))
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        let id_for_err = id.clone();

        self.conn
            .call(move |conn| delete_by_id(conn, schema::DELETE_USER, [&id]))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id_for_err))
    }
}

// ============================================================================
// SaunaRepository implementation
// ============================================================================

#[async_trait]
impl SaunaRepository for SqliteRepository {
    async fn get_sauna(&self, id: &str) -> Result<Option<Sauna>> {
        let id = id.to_string();
        let id_for_err = id.clone();

        self.conn
            .call(move |conn| {
                query_optional(conn, schema::SELECT_SAUNA_BY_ID, [&id], row_to_sauna)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Sauna", id_for_err))
    }

    async fn list_saunas(&self) -> Result<Vec<Sauna>> {
        self.conn
            .call(|conn| query_all(conn, schema::SELECT_SAUNAS, [], row_to_sauna))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Sauna"))
    }

    async fn create_sauna(&self, sauna: &Sauna) -> Result<()> {
        let sauna = sauna.clone();
        let id_for_err = sauna.id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_SAUNA,
                    rusqlite::params![
                        sauna.id,
                        sauna.name,
                        sauna.address,
                        sauna.prefecture,
                        sauna.latitude,
                        sauna.longitude
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Sauna", id_for_err))
    }

    async fn update_sauna(&self, sauna: &Sauna) -> Result<()> {
        let sauna = sauna.clone();
        let id_for_err = sauna.id.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_SAUNA,
                        rusqlite::params![
                            sauna.id,
                            sauna.name,
                            sauna.address,
                            sauna.prefecture,
                            sauna.latitude,
                            sauna.longitude
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Sauna", id_for_err))
    }

    async fn delete_sauna(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        let id_for_err = id.clone();

        self.conn
            .call(move |conn| delete_by_id(conn, schema::DELETE_SAUNA, [&id]))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Sauna", id_for_err))
    }
}

// ============================================================================
// PostRepository implementation
// ============================================================================

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        self.conn
            .call(move |conn| query_optional(conn, schema::SELECT_POST_BY_ID, [id], row_to_post))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }

    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostView>> {
        let sauna_id = filter.sauna_id.clone();
        let user_id = filter.user_id.clone();

        self.conn
            .call(move |conn| {
                query_all(
                    conn,
                    schema::SELECT_POST_VIEWS,
                    rusqlite::params![sauna_id, user_id],
                    row_to_post_view,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Post"))
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        let post = post.clone();
        let created_at = format_datetime(&post.created_at);
        let ref_for_err = format!("{}/{}", post.user_id, post.sauna_id);

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_POST,
                    rusqlite::params![post.user_id, post.sauna_id, post.content, created_at],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                let created = tx
                    .query_row(schema::SELECT_POST_BY_ID, [id], row_to_post)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(created)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", ref_for_err))
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| delete_by_id(conn, schema::DELETE_POST, [id]))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Post", id.to_string()))
    }
}

// ============================================================================
// FavoriteRepository implementation
// ============================================================================

#[async_trait]
impl FavoriteRepository for SqliteRepository {
    async fn get_favorite(&self, id: i64) -> Result<Option<Favorite>> {
        self.conn
            .call(move |conn| {
                query_optional(conn, schema::SELECT_FAVORITE_BY_ID, [id], row_to_favorite)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Favorite", id.to_string()))
    }

    async fn find_favorite(&self, user_id: &str, sauna_id: &str) -> Result<Option<Favorite>> {
        let user_id = user_id.to_string();
        let sauna_id = sauna_id.to_string();
        let pair_for_err = format!("{user_id}/{sauna_id}");

        self.conn
            .call(move |conn| {
                query_optional(
                    conn,
                    schema::SELECT_FAVORITE_BY_PAIR,
                    [&user_id, &sauna_id],
                    row_to_favorite,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Favorite", pair_for_err))
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        self.conn
            .call(|conn| query_all(conn, schema::SELECT_FAVORITES, [], row_to_favorite))
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Favorite"))
    }

    async fn list_favorites_for_user(&self, user_id: &str) -> Result<Vec<Sauna>> {
        let user_id = user_id.to_string();
        let id_for_err = user_id.clone();

        self.conn
            .call(move |conn| {
                query_all(
                    conn,
                    schema::SELECT_FAVORITE_SAUNAS_FOR_USER,
                    [&user_id],
                    row_to_sauna,
                )
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Favorite", id_for_err))
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite> {
        let favorite = favorite.clone();
        let pair_for_err = format!("{}/{}", favorite.user_id, favorite.sauna_id);

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_FAVORITE,
                    rusqlite::params![favorite.user_id, favorite.sauna_id],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(favorite.into_favorite(id))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Favorite", pair_for_err))
    }

    async fn delete_favorite(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| delete_by_id(conn, schema::DELETE_FAVORITE, [id]))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Favorite", id.to_string()))
    }
}
