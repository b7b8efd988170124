pub mod error;
pub mod favorites;
pub mod health;
pub mod posts;
pub mod root;
pub mod saunas;
pub mod users;

pub use error::AppError;
