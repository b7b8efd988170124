//! Reqwest-backed Google Places adapter.
//!
//! This adapter owns transport details only: request parameters, timeout and
//! HTTP error mapping. Payload decoding lives in `saunalog_core::places::dto`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use saunalog_core::places::{dto, PlaceError, PlaceQuery, PlaceRecord, PlaceResolver, PlaceSummaries};

/// Connection settings for the Places API.
#[derive(Debug, Clone)]
pub struct GooglePlacesSettings {
    /// Base URL, e.g. `https://maps.googleapis.com/maps/api/place`.
    pub base_url: Url,
    pub api_key: String,
    /// Response language for names and addresses.
    pub language: String,
    /// `lat,lng` bias centre for text search.
    pub search_location: String,
    /// Bias radius for text search, in metres.
    pub search_radius_m: u32,
    pub timeout: Duration,
}

/// Place resolver that issues one GET per call against the Places API.
pub struct GooglePlacesResolver {
    client: Client,
    settings: GooglePlacesSettings,
}

impl GooglePlacesResolver {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(settings: GooglePlacesSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, PlaceError> {
        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                PlaceError::Transport(format!(
                    "base URL {} cannot carry a path",
                    self.settings.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<u8>, PlaceError> {
        let url = self.endpoint_url(&[endpoint, "json"])?;
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.settings.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        tracing::debug!(
            endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            "Places provider responded"
        );

        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl PlaceResolver for GooglePlacesResolver {
    async fn resolve(&self, place_id: &str) -> Result<Option<PlaceRecord>, PlaceError> {
        let body = self
            .fetch(
                "details",
                &[
                    ("place_id", place_id),
                    ("language", self.settings.language.as_str()),
                ],
            )
            .await?;
        dto::parse_details(place_id, &body)
    }

    async fn search(&self, query: &PlaceQuery) -> Result<PlaceSummaries, PlaceError> {
        let radius = self.settings.search_radius_m.to_string();
        let body = self
            .fetch(
                "textsearch",
                &[
                    ("query", query.text()),
                    ("location", self.settings.search_location.as_str()),
                    ("radius", radius.as_str()),
                    ("language", self.settings.language.as_str()),
                ],
            )
            .await?;
        dto::parse_text_search(&body)
    }

    fn endpoint(&self) -> String {
        self.settings.base_url.to_string()
    }
}

/// reqwest includes the request URL (and so the API key) in its messages,
/// so it is stripped before the error leaves the adapter.
fn map_transport_error(error: reqwest::Error) -> PlaceError {
    let error = error.without_url();
    if error.is_timeout() {
        PlaceError::Timeout(error.to_string())
    } else if error.is_decode() {
        PlaceError::Decode(error.to_string())
    } else {
        PlaceError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PlaceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PlaceError::Timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => PlaceError::Upstream {
            status: status.as_u16(),
            message,
        },
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::{extract::Query, http::StatusCode as AxumStatus, routing::get, Router};
    use rstest::rstest;
    use saunalog_core::sauna::UNKNOWN_PREFECTURE;

    type SeenParams = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Serves canned Places payloads on an ephemeral port and records the
    /// query parameters of every request.
    async fn spawn_provider(status: AxumStatus, body: &'static str) -> (Url, SeenParams) {
        let seen: SeenParams = Arc::default();
        let recorder = seen.clone();
        let handler = move |Query(params): Query<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(params);
                (status, body)
            }
        };
        let app = Router::new()
            .route("/maps/api/place/details/json", get(handler.clone()))
            .route("/maps/api/place/textsearch/json", get(handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let base = Url::parse(&format!("http://{addr}/maps/api/place")).unwrap();
        (base, seen)
    }

    fn resolver(base_url: Url) -> GooglePlacesResolver {
        GooglePlacesResolver::new(GooglePlacesSettings {
            base_url,
            api_key: "test-key".to_string(),
            language: "ja".to_string(),
            search_location: "35.6895,139.6917".to_string(),
            search_radius_m: 50_000,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_sends_place_id_key_and_language() {
        let (base, seen) = spawn_provider(
            AxumStatus::OK,
            r#"{"status": "OK", "result": {"name": "Spa X", "formatted_address": "1 Main St"}}"#,
        )
        .await;

        let record = resolver(base).resolve("ChIJexternal123").await.unwrap().unwrap();

        assert_eq!(record.id, "ChIJexternal123");
        assert_eq!(record.prefecture, UNKNOWN_PREFECTURE);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "exactly one outbound request");
        assert_eq!(seen[0]["place_id"], "ChIJexternal123");
        assert_eq!(seen[0]["key"], "test-key");
        assert_eq!(seen[0]["language"], "ja");
    }

    #[tokio::test]
    async fn test_search_sends_query_location_and_radius() {
        let (base, seen) = spawn_provider(
            AxumStatus::OK,
            r#"{"status": "OK", "results": [{"place_id": "a", "name": "Spa A", "vicinity": "Near"}]}"#,
        )
        .await;
        let query = PlaceQuery::new(Some("東京都"), None).unwrap();

        let summaries: Vec<_> = resolver(base).search(&query).await.unwrap().collect();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].address, "Near");
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0]["query"], "東京都 サウナ");
        assert_eq!(seen[0]["location"], "35.6895,139.6917");
        assert_eq!(seen[0]["radius"], "50000");
    }

    #[tokio::test]
    async fn test_resolve_server_error_maps_to_upstream() {
        let (base, _) = spawn_provider(AxumStatus::INTERNAL_SERVER_ERROR, "boom").await;

        let error = resolver(base).resolve("ChIJabc").await.unwrap_err();

        assert_eq!(
            error,
            PlaceError::Upstream {
                status: 500,
                message: "boom".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_key() {
        // Nothing listens on port 9 locally.
        let base = Url::parse("http://127.0.0.1:9/maps/api/place").unwrap();

        let error = resolver(base).resolve("ChIJabc").await.unwrap_err();

        assert!(matches!(error, PlaceError::Transport(_) | PlaceError::Timeout(_)));
        assert!(!error.to_string().contains("test-key"));
    }

    #[test]
    fn test_endpoint_url_appends_segments() {
        let base = Url::parse("https://maps.googleapis.com/maps/api/place/").unwrap();
        let url = resolver(base).endpoint_url(&["details", "json"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/details/json"
        );
    }

    #[rstest]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Upstream")]
    #[case::forbidden(StatusCode::FORBIDDEN, "Upstream")]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    fn maps_http_statuses_to_place_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"{\"error_message\": \"unavailable\"}");
        match expected {
            "Upstream" => assert!(
                matches!(error, PlaceError::Upstream { status: s, .. } if s == status.as_u16()),
                "{status} should map to Upstream"
            ),
            "Timeout" => assert!(
                matches!(error, PlaceError::Timeout(_)),
                "{status} should map to Timeout"
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn test_body_preview_truncates_long_bodies() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(
            error,
            PlaceError::Upstream {
                status: 503,
                message: "Service Unavailable".to_string(),
            }
        );
    }
}
