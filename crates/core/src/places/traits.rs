use async_trait::async_trait;

use super::{PlaceError, PlaceQuery, PlaceRecord, PlaceSummaries};

/// Lookup against the external system of record for sauna metadata.
///
/// Each call issues exactly one outbound request. Implementations do not
/// retry; a failure is returned to the caller as-is.
#[async_trait]
pub trait PlaceResolver: Send + Sync {
    /// Fetch the full record for a place id.
    ///
    /// Returns `Ok(None)` when the provider does not know the id.
    async fn resolve(&self, place_id: &str) -> Result<Option<PlaceRecord>, PlaceError>;

    /// Run a free-text search. An empty sequence means nothing matched.
    async fn search(&self, query: &PlaceQuery) -> Result<PlaceSummaries, PlaceError>;

    /// Human-readable description of the endpoint, for health reporting.
    fn endpoint(&self) -> String;
}
