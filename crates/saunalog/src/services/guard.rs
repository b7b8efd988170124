//! Reference checks in front of post and favorite writes.
//!
//! Every write that points at a user or sauna verifies the user exists and
//! materialises the sauna first, so the store never sees a dangling key.

use saunalog_core::sauna::{Favorite, NewFavorite, NewPost, Post};
use saunalog_core::storage::{FavoriteRepository, PostRepository, UserRepository};

use super::{SaunaReconciler, ServiceError};

pub struct RelationshipGuard<'a> {
    users: &'a dyn UserRepository,
    posts: &'a dyn PostRepository,
    favorites: &'a dyn FavoriteRepository,
    reconciler: SaunaReconciler<'a>,
}

impl<'a> RelationshipGuard<'a> {
    pub fn new(
        users: &'a dyn UserRepository,
        posts: &'a dyn PostRepository,
        favorites: &'a dyn FavoriteRepository,
        reconciler: SaunaReconciler<'a>,
    ) -> Self {
        Self {
            users,
            posts,
            favorites,
            reconciler,
        }
    }

    async fn require_user(&self, user_id: &str) -> Result<(), ServiceError> {
        match self.users.get_user(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("User", user_id)),
        }
    }

    /// Creates a post after checking its user and reconciling its sauna.
    pub async fn create_post(&self, post: NewPost) -> Result<Post, ServiceError> {
        self.require_user(&post.user_id).await?;
        self.reconciler.ensure_sauna(&post.sauna_id).await?;

        let created = self.posts.create_post(&post).await?;
        tracing::info!(
            post_id = created.id,
            user_id = %created.user_id,
            sauna_id = %created.sauna_id,
            "Post created"
        );
        Ok(created)
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<(), ServiceError> {
        if self.posts.get_post(post_id).await?.is_none() {
            return Err(ServiceError::not_found("Post", post_id));
        }
        self.posts.delete_post(post_id).await?;
        tracing::info!(post_id, "Post deleted");
        Ok(())
    }

    /// Creates a favorite; a second favorite for the same pair is rejected.
    pub async fn create_favorite(&self, favorite: NewFavorite) -> Result<Favorite, ServiceError> {
        self.require_user(&favorite.user_id).await?;
        self.reconciler.ensure_sauna(&favorite.sauna_id).await?;

        let already_favorited = || ServiceError::AlreadyFavorited {
            user_id: favorite.user_id.clone(),
            sauna_id: favorite.sauna_id.clone(),
        };

        if self
            .favorites
            .find_favorite(&favorite.user_id, &favorite.sauna_id)
            .await?
            .is_some()
        {
            return Err(already_favorited());
        }

        match self.favorites.create_favorite(&favorite).await {
            Ok(created) => {
                tracing::info!(
                    favorite_id = created.id,
                    user_id = %created.user_id,
                    sauna_id = %created.sauna_id,
                    "Favorite created"
                );
                Ok(created)
            }
            Err(error) if error.is_already_exists() => Err(already_favorited()),
            Err(error) => Err(error.into()),
        }
    }

    /// Removes the favorite for a (user, sauna) pair.
    pub async fn remove_favorite(&self, user_id: &str, sauna_id: &str) -> Result<(), ServiceError> {
        let favorite = self
            .favorites
            .find_favorite(user_id, sauna_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Favorite", format!("{user_id}/{sauna_id}")))?;

        self.favorites.delete_favorite(favorite.id).await?;
        tracing::info!(favorite_id = favorite.id, user_id, sauna_id, "Favorite removed");
        Ok(())
    }

    pub async fn remove_favorite_by_id(&self, favorite_id: i64) -> Result<(), ServiceError> {
        if self.favorites.get_favorite(favorite_id).await?.is_none() {
            return Err(ServiceError::not_found("Favorite", favorite_id));
        }
        self.favorites.delete_favorite(favorite_id).await?;
        tracing::info!(favorite_id, "Favorite removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saunalog_core::sauna::{Sauna, User};
    use saunalog_core::storage::{PostFilter, RepositoryError, SaunaRepository};

    use crate::places::fake::FakePlaceResolver;
    use crate::storage::InMemoryRepository;

    async fn repo_with_user() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.upsert_user(&User::new("user-1", "aki@example.com"))
            .await
            .unwrap();
        repo
    }

    fn places() -> FakePlaceResolver {
        FakePlaceResolver::new().with_place("ChIJabc", "Spa X", "1 Main St")
    }

    fn guard<'a>(repo: &'a InMemoryRepository, places: &'a FakePlaceResolver) -> RelationshipGuard<'a> {
        RelationshipGuard::new(repo, repo, repo, SaunaReconciler::new(repo, places))
    }

    #[tokio::test]
    async fn test_create_post_materialises_sauna() {
        let repo = repo_with_user().await;
        let places = places();

        let post = guard(&repo, &places)
            .create_post(NewPost::new("user-1", "ChIJabc", Some("Great!".to_string())))
            .await
            .unwrap();

        assert_eq!(post.sauna_id, "ChIJabc");
        assert_eq!(post.content.as_deref(), Some("Great!"));
        assert!(repo.get_sauna("ChIJabc").await.unwrap().is_some());
        assert_eq!(places.resolve_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_post_missing_user_persists_nothing() {
        let repo = InMemoryRepository::new();
        let places = places();

        let error = guard(&repo, &places)
            .create_post(NewPost::new("ghost", "ChIJabc", None))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ServiceError::NotFound {
                entity_type: "User",
                ..
            }
        ));
        assert_eq!(places.resolve_calls(), 0);
        assert!(repo.list_posts(&PostFilter::default()).await.unwrap().is_empty());
        assert!(repo.list_saunas().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_unknown_sauna_is_not_found() {
        let repo = repo_with_user().await;
        let places = places();

        let error = guard(&repo, &places)
            .create_post(NewPost::new("user-1", "ChIJghost", None))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ServiceError::NotFound {
                entity_type: "Sauna",
                ..
            }
        ));
        assert!(repo.list_posts(&PostFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_favorite_twice_rejects_second() {
        let repo = repo_with_user().await;
        let places = places();
        let guard = guard(&repo, &places);

        guard
            .create_favorite(NewFavorite::new("user-1", "ChIJabc"))
            .await
            .unwrap();
        let error = guard
            .create_favorite(NewFavorite::new("user-1", "ChIJabc"))
            .await
            .unwrap_err();

        assert!(matches!(error, ServiceError::AlreadyFavorited { .. }));
        assert_eq!(repo.list_favorites().await.unwrap().len(), 1);
        assert_eq!(places.resolve_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_favorite_missing_user() {
        let repo = InMemoryRepository::new();
        let places = places();

        let error = guard(&repo, &places)
            .create_favorite(NewFavorite::new("ghost", "ChIJabc"))
            .await
            .unwrap_err();

        assert!(matches!(error, ServiceError::NotFound { .. }));
        assert!(repo.list_favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_favorite_by_pair() {
        let repo = repo_with_user().await;
        let places = places();
        let guard = guard(&repo, &places);
        guard
            .create_favorite(NewFavorite::new("user-1", "ChIJabc"))
            .await
            .unwrap();

        guard.remove_favorite("user-1", "ChIJabc").await.unwrap();

        assert!(repo.list_favorites().await.unwrap().is_empty());
        assert!(matches!(
            guard.remove_favorite("user-1", "ChIJabc").await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_favorite_by_id_missing() {
        let repo = repo_with_user().await;
        let places = places();

        let error = guard(&repo, &places)
            .remove_favorite_by_id(7)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Favorite not found: 7");
    }

    #[tokio::test]
    async fn test_delete_post() {
        let repo = repo_with_user().await;
        repo.create_sauna(&Sauna::new("ChIJabc", "Spa X", "1 Main St"))
            .await
            .unwrap();
        let places = FakePlaceResolver::new();
        let guard = guard(&repo, &places);
        let post = guard
            .create_post(NewPost::new("user-1", "ChIJabc", None))
            .await
            .unwrap();

        guard.delete_post(post.id).await.unwrap();

        assert!(repo.get_post(post.id).await.unwrap().is_none());
        assert!(matches!(
            guard.delete_post(post.id).await,
            Err(ServiceError::NotFound {
                entity_type: "Post",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_email_surfaces_as_repository_conflict() {
        let repo = repo_with_user().await;

        let error = repo
            .upsert_user(&User::new("user-2", "aki@example.com"))
            .await
            .map_err(ServiceError::from)
            .unwrap_err();

        assert!(matches!(
            error,
            ServiceError::Repository(RepositoryError::AlreadyExists { .. })
        ));
    }
}
