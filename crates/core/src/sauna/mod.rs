mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::SaunaError;
pub use operations::{jst, jst_now, validate_place_id, validate_user};
pub use requests::{
    CreateFavoriteRequest, CreatePostRequest, CreateUserRequest, ListPostsQuery,
    RemoveFavoriteQuery, SearchSaunasQuery,
};
pub use responses::{FavoriteCreatedResponse, FavoritesResponse, MessageResponse};
pub use types::{
    Favorite, NewFavorite, NewPost, Post, PostView, Sauna, SaunaSummary, User, UserSummary,
    UNKNOWN_PREFECTURE,
};
