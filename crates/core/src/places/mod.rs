//! External place provider: normalised records, pure payload decoding and
//! the resolver trait implemented by the server's HTTP adapter.

pub mod dto;
mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::PlaceError;
pub use http_mapping::place_error_to_status_code;
pub use traits::PlaceResolver;
pub use types::{PlacePhoto, PlaceQuery, PlaceRecord, PlaceSummaries, PlaceSummary, UNKNOWN_ADDRESS};
