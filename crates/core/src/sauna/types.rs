use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::operations::jst_now;
use crate::places::PlaceRecord;

/// Prefecture stored when the provider does not report an administrative area.
pub const UNKNOWN_PREFECTURE: &str = "Unknown Prefecture";

/// A registered user. The identifier is supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl User {
    /// Creates a user without a display name.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: None,
        }
    }

    /// Sets the display name for this user.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// A sauna cached locally. The identifier is the provider's place id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sauna {
    pub id: String,
    pub name: String,
    pub address: String,
    pub prefecture: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Sauna {
    /// Creates a sauna with an unknown prefecture and no coordinates.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            prefecture: UNKNOWN_PREFECTURE.to_string(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_prefecture(mut self, prefecture: impl Into<String>) -> Self {
        self.prefecture = prefecture.into();
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn summary(&self) -> SaunaSummary {
        SaunaSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl From<PlaceRecord> for Sauna {
    fn from(record: PlaceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            address: record.address,
            prefecture: record.prefecture,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// A sauna visit written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: String,
    pub sauna_id: String,
    pub content: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// A post that has not been persisted yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: String,
    pub sauna_id: String,
    pub content: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl NewPost {
    /// Creates a post stamped with the current time at +09:00.
    pub fn new(
        user_id: impl Into<String>,
        sauna_id: impl Into<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            sauna_id: sauna_id.into(),
            content,
            created_at: jst_now(),
        }
    }

    /// Overrides the creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<FixedOffset>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            user_id: self.user_id,
            sauna_id: self.sauna_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// A user's bookmark of a sauna. The (user, sauna) pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: String,
    pub sauna_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: String,
    pub sauna_id: String,
}

impl NewFavorite {
    pub fn new(user_id: impl Into<String>, sauna_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            sauna_id: sauna_id.into(),
        }
    }

    pub fn into_favorite(self, id: i64) -> Favorite {
        Favorite {
            id,
            user_id: self.user_id,
            sauna_id: self.sauna_id,
        }
    }
}

/// User fields embedded in post listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: Option<String>,
}

/// Sauna fields embedded in post listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaunaSummary {
    pub id: String,
    pub name: String,
}

/// A post together with the user and sauna it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub user: UserSummary,
    pub sauna: SaunaSummary,
}
