//! External place resolver implementations.

#[cfg(test)]
pub mod fake;
mod google;

pub use google::{GooglePlacesResolver, GooglePlacesSettings};
