use serde::{Deserialize, Serialize};

use super::{NewFavorite, NewPost, SaunaError, User};
use crate::places::PlaceQuery;
use crate::serde::{deserialize_optional_string, deserialize_trimmed_string};
use crate::storage::PostFilter;

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

impl CreateUserRequest {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub sauna_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn into_new_post(self) -> NewPost {
        NewPost::new(self.user_id, self.sauna_id, self.content)
    }
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sauna_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub user_id: Option<String>,
}

impl ListPostsQuery {
    pub fn into_filter(self) -> PostFilter {
        PostFilter {
            sauna_id: self.sauna_id,
            user_id: self.user_id,
        }
    }
}

/// Query string of `GET /saunas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSaunasQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub prefecture: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub keyword: Option<String>,
}

impl SearchSaunasQuery {
    pub fn to_place_query(&self) -> Result<PlaceQuery, SaunaError> {
        PlaceQuery::new(self.prefecture.as_deref(), self.keyword.as_deref())
    }
}

/// Body of `POST /favorites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFavoriteRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub sauna_id: String,
}

impl CreateFavoriteRequest {
    pub fn into_new_favorite(self) -> NewFavorite {
        NewFavorite::new(self.user_id, self.sauna_id)
    }
}

/// Query string of `DELETE /favorites`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteQuery {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub sauna_id: String,
}
