use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use saunalog_core::places::{PlaceRecord, PlaceSummary};
use saunalog_core::sauna::{validate_place_id, MessageResponse, SearchSaunasQuery};

use crate::{handlers::AppError, services::ServiceError, state::AppState};

/// Search the provider by prefecture and/or keyword (GET /saunas).
///
/// Results are not persisted; saunas are stored only when referenced.
pub async fn search_saunas(
    State(state): State<AppState>,
    query: Result<Query<SearchSaunasQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let place_query = query.to_place_query()?;

    let summaries: Vec<PlaceSummary> = state.places.search(&place_query).await?.collect();
    tracing::debug!(query = %place_query, hits = summaries.len(), "Sauna search finished");

    if summaries.is_empty() {
        return Ok(Json(MessageResponse::new("No saunas matched the search.")).into_response());
    }

    Ok(Json(summaries).into_response())
}

/// Fetch the provider's record for one place (GET /saunas/{place_id}).
pub async fn get_sauna(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> Result<Json<PlaceRecord>, AppError> {
    validate_place_id(&place_id)?;

    match state.places.resolve(&place_id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ServiceError::not_found("Sauna", place_id).into()),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::http::{Method, StatusCode};
    use saunalog_core::places::{PlaceError, PlaceSummary};

    use crate::{
        app::create_app, handlers::test_support::send, places::fake::FakePlaceResolver,
        state::AppState,
    };

    fn summary(id: &str, name: &str) -> PlaceSummary {
        PlaceSummary {
            id: id.to_string(),
            name: name.to_string(),
            address: "1 Main St".to_string(),
            rating: Some(4.5),
        }
    }

    #[tokio::test]
    async fn test_search_requires_a_filter() {
        let places = Arc::new(FakePlaceResolver::new());
        let app = create_app(AppState::with_places(places.clone()), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas?keyword=%20", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "At least one of prefecture or keyword is required");
        assert_eq!(places.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_search_without_hits_returns_message() {
        let app = create_app(AppState::default(), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas?prefecture=Tokyo", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No saunas matched the search.");
    }

    #[tokio::test]
    async fn test_search_returns_summaries_without_persisting() {
        let places = Arc::new(
            FakePlaceResolver::new()
                .with_summaries(vec![summary("ChIJabc", "Spa X"), summary("ChIJdef", "Spa Y")]),
        );
        let state = AppState::with_places(places.clone());
        let app = create_app(state.clone(), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas?keyword=rouryu", None).await;

        assert_eq!(status, StatusCode::OK);
        let hits = body.as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["id"], "ChIJabc");
        assert_eq!(hits[0]["rating"], 4.5);
        assert_eq!(places.search_calls(), 1);
        assert!(state.saunas.list_saunas().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_sauna_returns_record_without_persisting() {
        let places = Arc::new(FakePlaceResolver::new().with_place("ChIJabc", "Spa X", "1 Main St"));
        let state = AppState::with_places(places);
        let app = create_app(state.clone(), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas/ChIJabc", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Spa X");
        assert_eq!(body["address"], "1 Main St");
        assert_eq!(body["prefecture"], "東京都");
        assert!(state.saunas.get_sauna("ChIJabc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_sauna_not_found() {
        let app = create_app(AppState::default(), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas/ChIJghost", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Sauna not found: ChIJghost");
    }

    #[tokio::test]
    async fn test_get_sauna_provider_failure_is_bad_gateway() {
        let places = Arc::new(FakePlaceResolver::new().failing(PlaceError::Upstream {
            status: 503,
            message: "Service Unavailable".to_string(),
        }));
        let app = create_app(AppState::with_places(places), Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/saunas/ChIJabc", None).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(
            body["detail"],
            "Places provider returned HTTP 503: Service Unavailable"
        );
    }
}
