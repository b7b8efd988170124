//! Scripted resolver for tests.
//!
//! Detail payloads are raw provider JSON decoded through the same
//! normalisation as the real adapter.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use saunalog_core::places::{
    dto, PlaceError, PlaceQuery, PlaceRecord, PlaceResolver, PlaceSummaries, PlaceSummary,
};

#[derive(Debug, Default)]
pub struct FakePlaceResolver {
    details: HashMap<String, String>,
    summaries: Vec<PlaceSummary>,
    failure: Option<PlaceError>,
    latency: Option<Duration>,
    resolve_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl FakePlaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` as the provider's details payload for `place_id`.
    pub fn with_details_json(mut self, place_id: &str, body: &str) -> Self {
        self.details.insert(place_id.to_string(), body.to_string());
        self
    }

    /// Serves a minimal details payload for `place_id`.
    pub fn with_place(self, place_id: &str, name: &str, address: &str) -> Self {
        let body = serde_json::json!({
            "status": "OK",
            "result": {
                "place_id": place_id,
                "name": name,
                "formatted_address": address,
                "geometry": { "location": { "lat": 35.6895, "lng": 139.6917 } },
                "address_components": [
                    { "long_name": "東京都", "types": ["administrative_area_level_1", "political"] }
                ]
            }
        });
        self.with_details_json(place_id, &body.to_string())
    }

    pub fn with_summaries(mut self, summaries: Vec<PlaceSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    /// Every call fails with `error`.
    pub fn failing(mut self, error: PlaceError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Each lookup sleeps for `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceResolver for FakePlaceResolver {
    async fn resolve(&self, place_id: &str) -> Result<Option<PlaceRecord>, PlaceError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        match self.details.get(place_id) {
            Some(body) => dto::parse_details(place_id, body.as_bytes()),
            None => Ok(None),
        }
    }

    async fn search(&self, _query: &PlaceQuery) -> Result<PlaceSummaries, PlaceError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self.summaries.iter().cloned().collect())
    }

    fn endpoint(&self) -> String {
        "fake://places".to_string()
    }
}
