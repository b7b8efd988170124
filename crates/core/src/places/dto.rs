//! Wire shapes of the Google Places (legacy) JSON API and their
//! normalisation into [`PlaceRecord`] and [`PlaceSummary`].
//!
//! Decoding is pure so the adapter only owns transport concerns.

use serde::Deserialize;

use super::{PlaceError, PlacePhoto, PlaceRecord, PlaceSummaries, PlaceSummary, UNKNOWN_ADDRESS};
use crate::sauna::UNKNOWN_PREFECTURE;

const ADMINISTRATIVE_AREA_LEVEL_1: &str = "administrative_area_level_1";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";
const STATUS_NOT_FOUND: &str = "NOT_FOUND";
const STATUS_INVALID_REQUEST: &str = "INVALID_REQUEST";

#[derive(Debug, Deserialize)]
pub struct DetailsResponseDto {
    #[serde(default)]
    pub result: Option<PlaceResultDto>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextSearchResponseDto {
    #[serde(default)]
    pub results: Vec<PlaceResultDto>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaceResultDto {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub geometry: Option<GeometryDto>,
    #[serde(default)]
    pub address_components: Vec<AddressComponentDto>,
    #[serde(default)]
    pub photos: Vec<PhotoDto>,
}

#[derive(Debug, Deserialize)]
pub struct GeometryDto {
    #[serde(default)]
    pub location: Option<LatLngDto>,
}

#[derive(Debug, Deserialize)]
pub struct LatLngDto {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponentDto {
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoDto {
    pub photo_reference: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

impl PlaceResultDto {
    fn address(&self) -> String {
        self.formatted_address
            .clone()
            .or_else(|| self.vicinity.clone())
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string())
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        self.geometry
            .as_ref()
            .and_then(|geometry| geometry.location.as_ref())
            .map(|location| (location.lat, location.lng))
    }

    /// Normalise a details result. `requested_id` is used when the payload
    /// omits its own place id.
    pub fn into_record(self, requested_id: &str) -> Result<PlaceRecord, PlaceError> {
        let address = self.address();
        let coordinates = self.coordinates();
        let prefecture = extract_prefecture(&self.address_components)
            .unwrap_or_else(|| UNKNOWN_PREFECTURE.to_string());
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| PlaceError::Decode(format!("place {requested_id} has no name")))?;

        Ok(PlaceRecord {
            id: self.place_id.unwrap_or_else(|| requested_id.to_string()),
            name,
            address,
            prefecture,
            latitude: coordinates.map(|(lat, _)| lat),
            longitude: coordinates.map(|(_, lng)| lng),
            rating: self.rating,
            photos: self.photos.into_iter().map(PhotoDto::into_photo).collect(),
        })
    }

    /// Normalise a search hit. Hits without a place id cannot be referenced
    /// later and are dropped.
    pub fn into_summary(self) -> Option<PlaceSummary> {
        let address = self.address();
        let id = self.place_id?;
        Some(PlaceSummary {
            id,
            name: self.name.unwrap_or_default(),
            address,
            rating: self.rating,
        })
    }
}

impl PhotoDto {
    fn into_photo(self) -> PlacePhoto {
        PlacePhoto {
            reference: self.photo_reference,
            width: self.width,
            height: self.height,
            attributions: self.html_attributions,
        }
    }
}

/// Returns the long name of the first component tagged as a first-level
/// administrative area (the prefecture, for Japanese addresses).
pub fn extract_prefecture(components: &[AddressComponentDto]) -> Option<String> {
    components
        .iter()
        .find(|component| {
            component
                .types
                .iter()
                .any(|kind| kind == ADMINISTRATIVE_AREA_LEVEL_1)
        })
        .map(|component| component.long_name.clone())
}

fn rejected(status: String, error_message: Option<String>) -> PlaceError {
    PlaceError::Rejected {
        status,
        message: error_message.unwrap_or_default(),
    }
}

/// Decode a details payload.
///
/// `Ok(None)` means the provider does not know `place_id`.
pub fn parse_details(place_id: &str, body: &[u8]) -> Result<Option<PlaceRecord>, PlaceError> {
    let decoded: DetailsResponseDto = serde_json::from_slice(body)
        .map_err(|error| PlaceError::Decode(format!("invalid details JSON payload: {error}")))?;

    match decoded.status.as_deref() {
        None | Some(STATUS_OK) => {}
        Some(STATUS_ZERO_RESULTS | STATUS_NOT_FOUND | STATUS_INVALID_REQUEST) => return Ok(None),
        Some(other) => return Err(rejected(other.to_string(), decoded.error_message)),
    }

    decoded
        .result
        .map(|result| result.into_record(place_id))
        .transpose()
}

/// Decode a text-search payload into a lazy sequence of summaries.
pub fn parse_text_search(body: &[u8]) -> Result<PlaceSummaries, PlaceError> {
    let decoded: TextSearchResponseDto = serde_json::from_slice(body)
        .map_err(|error| PlaceError::Decode(format!("invalid search JSON payload: {error}")))?;

    match decoded.status.as_deref() {
        None | Some(STATUS_OK) => {}
        Some(STATUS_ZERO_RESULTS) => return Ok(PlaceSummaries::empty()),
        Some(other) => return Err(rejected(other.to_string(), decoded.error_message)),
    }

    Ok(PlaceSummaries::new(
        decoded
            .results
            .into_iter()
            .filter_map(PlaceResultDto::into_summary),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAILS_BODY: &str = r#"{
        "status": "OK",
        "result": {
            "place_id": "ChIJabc",
            "name": "Spa X",
            "formatted_address": "1-2-3 Shinjuku, Tokyo",
            "rating": 4.3,
            "geometry": { "location": { "lat": 35.69, "lng": 139.70 } },
            "address_components": [
                { "long_name": "Shinjuku", "short_name": "Shinjuku", "types": ["locality", "political"] },
                { "long_name": "東京都", "short_name": "東京都", "types": ["administrative_area_level_1", "political"] },
                { "long_name": "Other", "types": ["administrative_area_level_1"] }
            ],
            "photos": [
                { "photo_reference": "ref-1", "width": 800, "height": 600, "html_attributions": ["<a>Aki</a>"] }
            ]
        }
    }"#;

    #[test]
    fn test_parse_details_normalises_full_record() {
        let record = parse_details("ChIJabc", DETAILS_BODY.as_bytes())
            .unwrap()
            .unwrap();

        assert_eq!(record.id, "ChIJabc");
        assert_eq!(record.name, "Spa X");
        assert_eq!(record.address, "1-2-3 Shinjuku, Tokyo");
        assert_eq!(record.prefecture, "東京都");
        assert_eq!(record.latitude, Some(35.69));
        assert_eq!(record.longitude, Some(139.70));
        assert_eq!(record.rating, Some(4.3));
        assert_eq!(record.photos.len(), 1);
        assert_eq!(record.photos[0].reference, "ref-1");
    }

    #[test]
    fn test_parse_details_without_administrative_area_uses_sentinel() {
        let body = r#"{
            "status": "OK",
            "result": {
                "name": "Spa X",
                "formatted_address": "1 Main St",
                "address_components": [
                    { "long_name": "Somewhere", "types": ["locality"] }
                ]
            }
        }"#;

        let record = parse_details("ChIJexternal123", body.as_bytes())
            .unwrap()
            .unwrap();

        assert_eq!(record.id, "ChIJexternal123");
        assert_eq!(record.prefecture, UNKNOWN_PREFECTURE);
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
    }

    #[test]
    fn test_parse_details_falls_back_to_vicinity() {
        let body = r#"{ "result": { "name": "Spa Y", "vicinity": "Near the station" } }"#;

        let record = parse_details("ChIJy", body.as_bytes()).unwrap().unwrap();

        assert_eq!(record.address, "Near the station");
    }

    #[test]
    fn test_parse_details_missing_result_is_none() {
        let body = r#"{ "status": "OK" }"#;
        assert_eq!(parse_details("ChIJabc", body.as_bytes()).unwrap(), None);
    }

    #[test]
    fn test_parse_details_not_found_statuses_are_none() {
        for status in ["NOT_FOUND", "INVALID_REQUEST", "ZERO_RESULTS"] {
            let body = format!(r#"{{ "status": "{status}" }}"#);
            assert_eq!(
                parse_details("ChIJabc", body.as_bytes()).unwrap(),
                None,
                "{status} should mean the place is unknown"
            );
        }
    }

    #[test]
    fn test_parse_details_request_denied_is_rejected() {
        let body = r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid." }"#;

        let error = parse_details("ChIJabc", body.as_bytes()).unwrap_err();

        assert_eq!(
            error,
            PlaceError::Rejected {
                status: "REQUEST_DENIED".to_string(),
                message: "The provided API key is invalid.".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_details_without_name_is_decode_error() {
        let body = r#"{ "status": "OK", "result": { "place_id": "ChIJabc" } }"#;

        let error = parse_details("ChIJabc", body.as_bytes()).unwrap_err();

        assert!(matches!(error, PlaceError::Decode(_)));
    }

    #[test]
    fn test_parse_details_invalid_json_is_decode_error() {
        let error = parse_details("ChIJabc", b"<html>").unwrap_err();
        assert!(matches!(error, PlaceError::Decode(_)));
    }

    #[test]
    fn test_parse_text_search_maps_summaries() {
        let body = r#"{
            "status": "OK",
            "results": [
                { "place_id": "a", "name": "Spa A", "formatted_address": "Addr A", "rating": 4.0 },
                { "place_id": "b", "name": "Spa B", "vicinity": "Vicinity B" },
                { "place_id": "c", "name": "Spa C" },
                { "name": "No id" }
            ]
        }"#;

        let summaries: Vec<PlaceSummary> = parse_text_search(body.as_bytes()).unwrap().collect();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].address, "Addr A");
        assert_eq!(summaries[0].rating, Some(4.0));
        assert_eq!(summaries[1].address, "Vicinity B");
        assert_eq!(summaries[2].address, UNKNOWN_ADDRESS);
    }

    #[test]
    fn test_parse_text_search_zero_results_is_empty() {
        let body = r#"{ "status": "ZERO_RESULTS", "results": [] }"#;
        assert_eq!(parse_text_search(body.as_bytes()).unwrap().count(), 0);
    }

    #[test]
    fn test_parse_text_search_over_query_limit_is_rejected() {
        let body = r#"{ "status": "OVER_QUERY_LIMIT", "results": [] }"#;

        let error = parse_text_search(body.as_bytes()).unwrap_err();

        assert!(matches!(error, PlaceError::Rejected { ref status, .. } if status == "OVER_QUERY_LIMIT"));
    }

    #[test]
    fn test_extract_prefecture_picks_first_match() {
        let components = vec![
            AddressComponentDto {
                long_name: "Osaka".to_string(),
                short_name: None,
                types: vec!["locality".to_string()],
            },
            AddressComponentDto {
                long_name: "大阪府".to_string(),
                short_name: None,
                types: vec![ADMINISTRATIVE_AREA_LEVEL_1.to_string()],
            },
        ];

        assert_eq!(extract_prefecture(&components), Some("大阪府".to_string()));
        assert_eq!(extract_prefecture(&[]), None);
    }
}
