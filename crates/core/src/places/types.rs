use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sauna::SaunaError;

/// Address used when the provider returns neither a formatted address nor a vicinity.
pub const UNKNOWN_ADDRESS: &str = "Unknown Address";

const SEARCH_SUFFIX: &str = "サウナ";

/// The full, normalised record for a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub prefecture: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub reference: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub attributions: Vec<String>,
}

/// A lightweight search hit. Never persisted directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
}

/// Free-text search against the provider, built from the search filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    text: String,
}

impl PlaceQuery {
    /// Builds `"{prefecture} {keyword} サウナ"`, skipping absent parts.
    ///
    /// At least one of the two filters must be non-blank.
    pub fn new(prefecture: Option<&str>, keyword: Option<&str>) -> Result<Self, SaunaError> {
        let parts: Vec<&str> = [prefecture, keyword]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return Err(SaunaError::MissingSearchFilter);
        }

        let mut text = parts.join(" ");
        text.push(' ');
        text.push_str(SEARCH_SUFFIX);
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazy, finite sequence of search hits.
///
/// Summaries are produced from the decoded payload as the sequence is
/// consumed.
pub struct PlaceSummaries {
    inner: Box<dyn Iterator<Item = PlaceSummary> + Send>,
}

impl PlaceSummaries {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = PlaceSummary> + Send + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl Iterator for PlaceSummaries {
    type Item = PlaceSummary;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FromIterator<PlaceSummary> for PlaceSummaries {
    fn from_iter<T: IntoIterator<Item = PlaceSummary>>(iter: T) -> Self {
        let items: Vec<PlaceSummary> = iter.into_iter().collect();
        Self::new(items.into_iter())
    }
}

impl fmt::Debug for PlaceSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceSummaries")
            .field("size_hint", &self.inner.size_hint())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str) -> PlaceSummary {
        PlaceSummary {
            id: id.to_string(),
            name: format!("Sauna {id}"),
            address: UNKNOWN_ADDRESS.to_string(),
            rating: None,
        }
    }

    #[test]
    fn test_place_query_with_both_filters() {
        let query = PlaceQuery::new(Some("東京都"), Some("ととのい")).unwrap();
        assert_eq!(query.text(), "東京都 ととのい サウナ");
    }

    #[test]
    fn test_place_query_with_prefecture_only() {
        let query = PlaceQuery::new(Some("大阪府"), None).unwrap();
        assert_eq!(query.text(), "大阪府 サウナ");
    }

    #[test]
    fn test_place_query_with_keyword_only() {
        let query = PlaceQuery::new(None, Some(" spa ")).unwrap();
        assert_eq!(query.to_string(), "spa サウナ");
    }

    #[test]
    fn test_place_query_requires_a_filter() {
        assert_eq!(
            PlaceQuery::new(None, Some("  ")),
            Err(SaunaError::MissingSearchFilter)
        );
        assert_eq!(PlaceQuery::new(None, None), Err(SaunaError::MissingSearchFilter));
    }

    #[test]
    fn test_place_summaries_yield_in_order() {
        let summaries: PlaceSummaries = vec![summary("a"), summary("b")].into_iter().collect();
        let ids: Vec<String> = summaries.map(|s| s.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_place_summaries() {
        let mut summaries = PlaceSummaries::empty();
        assert!(summaries.next().is_none());
    }
}
