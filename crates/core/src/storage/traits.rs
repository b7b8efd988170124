use async_trait::async_trait;

use crate::sauna::{Favorite, NewFavorite, NewPost, Post, PostView, Sauna, User};

use super::{PostFilter, Result};

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Lists every user, ordered by ID.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Inserts the user, or overwrites email and name when the ID exists.
    ///
    /// Fails with `AlreadyExists` when the email belongs to another user.
    async fn upsert_user(&self, user: &User) -> Result<User>;

    /// Deletes a user together with their posts and favorites.
    async fn delete_user(&self, id: &str) -> Result<()>;
}

/// Repository for locally cached saunas.
#[async_trait]
pub trait SaunaRepository: Send + Sync {
    /// Gets a sauna by its place ID.
    async fn get_sauna(&self, id: &str) -> Result<Option<Sauna>>;

    /// Lists every cached sauna, ordered by ID.
    async fn list_saunas(&self) -> Result<Vec<Sauna>>;

    /// Creates a new sauna. Fails with `AlreadyExists` when the ID is taken.
    async fn create_sauna(&self, sauna: &Sauna) -> Result<()>;

    /// Updates an existing sauna.
    async fn update_sauna(&self, sauna: &Sauna) -> Result<()>;

    /// Deletes a sauna together with the posts and favorites referencing it.
    async fn delete_sauna(&self, id: &str) -> Result<()>;
}

/// Repository for post operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Gets a post by its ID.
    async fn get_post(&self, id: i64) -> Result<Option<Post>>;

    /// Lists posts matching the filter, newest first.
    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostView>>;

    /// Creates a post and returns it with its assigned ID.
    async fn create_post(&self, post: &NewPost) -> Result<Post>;

    /// Deletes a post by its ID.
    async fn delete_post(&self, id: i64) -> Result<()>;
}

/// Repository for favorite operations.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Gets a favorite by its ID.
    async fn get_favorite(&self, id: i64) -> Result<Option<Favorite>>;

    /// Gets the favorite for a (user, sauna) pair.
    async fn find_favorite(&self, user_id: &str, sauna_id: &str) -> Result<Option<Favorite>>;

    /// Lists every favorite, ordered by ID.
    async fn list_favorites(&self) -> Result<Vec<Favorite>>;

    /// Lists the saunas a user has favorited, in the order they were added.
    async fn list_favorites_for_user(&self, user_id: &str) -> Result<Vec<Sauna>>;

    /// Creates a favorite. Fails with `AlreadyExists` when the pair exists.
    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite>;

    /// Deletes a favorite by its ID.
    async fn delete_favorite(&self, id: i64) -> Result<()>;
}
