//! Sauna search and lookup operations.

use serde::{Deserialize, Serialize};

use super::SaunalogClient;
use crate::error::Result;
use saunalog_core::places::{PlaceRecord, PlaceSummary};
use saunalog_core::sauna::{MessageResponse, SearchSaunasQuery};

/// Outcome of `GET /saunas`: a list of hits, or a message when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SaunaSearch {
    Hits(Vec<PlaceSummary>),
    NoMatch(MessageResponse),
}

impl SaunalogClient {
    /// Search the provider by prefecture and/or keyword.
    pub async fn search_saunas(&self, query: &SearchSaunasQuery) -> Result<SaunaSearch> {
        let response = self
            .client
            .get(self.url(&["saunas"])?)
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch the provider's record for a place.
    pub async fn get_sauna(&self, place_id: &str) -> Result<PlaceRecord> {
        let response = self
            .client
            .get(self.url(&["saunas", place_id])?)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
