//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use saunalog_core::sauna::{Favorite, NewFavorite, NewPost, Post, PostView, Sauna, User};
use saunalog_core::storage::{
    FavoriteRepository, PostFilter, PostRepository, RepositoryError, Result, SaunaRepository,
    UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, User>,
    saunas: BTreeMap<String, Sauna>,
    posts: BTreeMap<i64, Post>,
    favorites: BTreeMap<i64, Favorite>,
    last_post_id: i64,
    last_favorite_id: i64,
}

impl Tables {
    fn require_user(&self, user_id: &str) -> Result<()> {
        if self.users.contains_key(user_id) {
            Ok(())
        } else {
            Err(RepositoryError::ReferentialIntegrity(format!(
                "user {user_id} does not exist"
            )))
        }
    }

    fn require_sauna(&self, sauna_id: &str) -> Result<()> {
        if self.saunas.contains_key(sauna_id) {
            Ok(())
        } else {
            Err(RepositoryError::ReferentialIntegrity(format!(
                "sauna {sauna_id} does not exist"
            )))
        }
    }

    fn post_view(&self, post: &Post) -> Result<PostView> {
        let user = self.users.get(&post.user_id).ok_or_else(|| {
            RepositoryError::ReferentialIntegrity(format!(
                "post {} references missing user {}",
                post.id, post.user_id
            ))
        })?;
        let sauna = self.saunas.get(&post.sauna_id).ok_or_else(|| {
            RepositoryError::ReferentialIntegrity(format!(
                "post {} references missing sauna {}",
                post.id, post.sauna_id
            ))
        })?;

        Ok(PostView {
            post: post.clone(),
            user: user.summary(),
            sauna: sauna.summary(),
        })
    }
}

/// In-memory storage backend for tests and local development.
///
/// Uses a single `Arc<RwLock<_>>` over every table for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().cloned().collect())
    }

    async fn upsert_user(&self, user: &User) -> Result<User> {
        let mut tables = self.tables.write().await;
        let email_taken = tables
            .users
            .values()
            .any(|existing| existing.email == user.email && existing.id != user.id);
        if email_taken {
            return Err(RepositoryError::already_exists("User", &user.email));
        }
        tables.users.insert(user.id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(id).is_none() {
            return Err(RepositoryError::not_found("User", id));
        }
        tables.posts.retain(|_, post| post.user_id != id);
        tables.favorites.retain(|_, favorite| favorite.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl SaunaRepository for InMemoryRepository {
    async fn get_sauna(&self, id: &str) -> Result<Option<Sauna>> {
        let tables = self.tables.read().await;
        Ok(tables.saunas.get(id).cloned())
    }

    async fn list_saunas(&self) -> Result<Vec<Sauna>> {
        let tables = self.tables.read().await;
        Ok(tables.saunas.values().cloned().collect())
    }

    async fn create_sauna(&self, sauna: &Sauna) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.saunas.contains_key(&sauna.id) {
            return Err(RepositoryError::already_exists("Sauna", &sauna.id));
        }
        tables.saunas.insert(sauna.id.clone(), sauna.clone());
        Ok(())
    }

    async fn update_sauna(&self, sauna: &Sauna) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.saunas.contains_key(&sauna.id) {
            return Err(RepositoryError::not_found("Sauna", &sauna.id));
        }
        tables.saunas.insert(sauna.id.clone(), sauna.clone());
        Ok(())
    }

    async fn delete_sauna(&self, id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.saunas.remove(id).is_none() {
            return Err(RepositoryError::not_found("Sauna", id));
        }
        tables.posts.retain(|_, post| post.sauna_id != id);
        tables.favorites.retain(|_, favorite| favorite.sauna_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn list_posts(&self, filter: &PostFilter) -> Result<Vec<PostView>> {
        let tables = self.tables.read().await;
        let mut posts: Vec<&Post> = tables
            .posts
            .values()
            .filter(|post| filter.matches(post))
            .collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        posts.into_iter().map(|post| tables.post_view(post)).collect()
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        let mut tables = self.tables.write().await;
        tables.require_user(&post.user_id)?;
        tables.require_sauna(&post.sauna_id)?;

        tables.last_post_id += 1;
        let created = post.clone().into_post(tables.last_post_id);
        tables.posts.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Post", id));
        }
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryRepository {
    async fn get_favorite(&self, id: i64) -> Result<Option<Favorite>> {
        let tables = self.tables.read().await;
        Ok(tables.favorites.get(&id).cloned())
    }

    async fn find_favorite(&self, user_id: &str, sauna_id: &str) -> Result<Option<Favorite>> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .values()
            .find(|f| f.user_id == user_id && f.sauna_id == sauna_id)
            .cloned())
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>> {
        let tables = self.tables.read().await;
        Ok(tables.favorites.values().cloned().collect())
    }

    async fn list_favorites_for_user(&self, user_id: &str) -> Result<Vec<Sauna>> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| tables.saunas.get(&f.sauna_id).cloned())
            .collect())
    }

    async fn create_favorite(&self, favorite: &NewFavorite) -> Result<Favorite> {
        let mut tables = self.tables.write().await;
        tables.require_user(&favorite.user_id)?;
        tables.require_sauna(&favorite.sauna_id)?;

        let duplicate = tables
            .favorites
            .values()
            .any(|f| f.user_id == favorite.user_id && f.sauna_id == favorite.sauna_id);
        if duplicate {
            return Err(RepositoryError::already_exists(
                "Favorite",
                format!("{}/{}", favorite.user_id, favorite.sauna_id),
            ));
        }

        tables.last_favorite_id += 1;
        let created = favorite.clone().into_favorite(tables.last_favorite_id);
        tables.favorites.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_favorite(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.favorites.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Favorite", id));
        }
        Ok(())
    }
}
