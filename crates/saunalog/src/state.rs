//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects for storage and the
//! place resolver, with the backend chosen via feature flags.

use std::sync::Arc;

use saunalog_core::places::PlaceResolver;
use saunalog_core::storage::{
    FavoriteRepository, PostRepository, SaunaRepository, UserRepository,
};

use crate::config::Config;
use crate::places::GooglePlacesResolver;
use crate::services::{RelationshipGuard, SaunaReconciler};

/// Shared application state.
///
/// Cloned for each request handler. All fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub saunas: Arc<dyn SaunaRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub places: Arc<dyn PlaceResolver>,
    /// Name of the storage backend, reported by `/healthz`.
    pub backend: &'static str,
}

impl AppState {
    /// Creates a new AppState from a repository implementing every store trait.
    fn build<R>(repo: Arc<R>, places: Arc<dyn PlaceResolver>, backend: &'static str) -> Self
    where
        R: UserRepository + SaunaRepository + PostRepository + FavoriteRepository + 'static,
    {
        Self {
            users: repo.clone(),
            saunas: repo.clone(),
            posts: repo.clone(),
            favorites: repo,
            places,
            backend,
        }
    }

    pub fn reconciler(&self) -> SaunaReconciler<'_> {
        SaunaReconciler::new(self.saunas.as_ref(), self.places.as_ref())
    }

    pub fn guard(&self) -> RelationshipGuard<'_> {
        RelationshipGuard::new(
            self.users.as_ref(),
            self.posts.as_ref(),
            self.favorites.as_ref(),
            self.reconciler(),
        )
    }
}

fn google_places(config: &Config) -> Result<Arc<dyn PlaceResolver>, anyhow::Error> {
    let resolver = GooglePlacesResolver::new(config.places_settings()?)?;
    tracing::info!(endpoint = %resolver.endpoint(), "Places resolver configured");
    Ok(Arc::new(resolver))
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "SQLite storage opened");
            Ok(Self::build(repo, google_places(config)?, "sqlite"))
        }
    }
}

#[cfg(all(feature = "inmemory", not(feature = "sqlite")))]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Data does not survive a restart.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            Ok(Self::build(repo, google_places(config)?, "inmemory"))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::places::fake::FakePlaceResolver;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// In-memory state wired to the given resolver.
        pub fn with_places(places: Arc<dyn PlaceResolver>) -> Self {
            Self::build(Arc::new(InMemoryRepository::new()), places, "inmemory")
        }
    }

    impl Default for AppState {
        fn default() -> Self {
            Self::with_places(Arc::new(FakePlaceResolver::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::fake::FakePlaceResolver;
    use saunalog_core::sauna::{NewPost, User};
    use saunalog_core::storage::PostFilter;

    #[tokio::test]
    async fn test_repositories_share_one_store() {
        let places = Arc::new(FakePlaceResolver::new().with_place("ChIJabc", "Spa X", "1 Main St"));
        let state = AppState::with_places(places.clone());

        state
            .users
            .upsert_user(&User::new("user-1", "aki@example.com"))
            .await
            .unwrap();
        state
            .guard()
            .create_post(NewPost::new("user-1", "ChIJabc", None))
            .await
            .unwrap();

        assert!(state.saunas.get_sauna("ChIJabc").await.unwrap().is_some());
        assert_eq!(
            state.posts.list_posts(&PostFilter::default()).await.unwrap().len(),
            1
        );
        assert_eq!(places.resolve_calls(), 1);
        assert_eq!(state.backend, "inmemory");
    }
}
