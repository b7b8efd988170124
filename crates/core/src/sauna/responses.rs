use serde::{Deserialize, Serialize};

use super::{Favorite, Sauna};

/// A bare `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteCreatedResponse {
    pub message: String,
    pub favorite: Favorite,
}

impl FavoriteCreatedResponse {
    pub fn new(favorite: Favorite) -> Self {
        Self {
            message: "Favorite added successfully.".to_string(),
            favorite,
        }
    }
}

/// The saunas a user has bookmarked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Sauna>,
}
