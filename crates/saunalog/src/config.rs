use std::{env, time::Duration};

use anyhow::{Context, Result};
use reqwest::Url;

use crate::places::GooglePlacesSettings;

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "saunalog.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    pub places_api_key: String,
    pub places_base_url: String,
    /// Outbound provider timeout in seconds (default: 10)
    pub places_timeout_seconds: u64,
    /// `lat,lng` centre biasing text search (default: central Tokyo)
    pub places_search_location: String,
    /// Text search bias radius in metres (default: 50,000)
    pub places_search_radius: u32,
    pub places_language: String,
    /// Inbound request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "saunalog.db")
    /// - `GOOGLE_PLACES_API_KEY` - Places API key (required)
    /// - `PLACES_BASE_URL` - Places API base URL
    /// - `PLACES_TIMEOUT_SECONDS` - outbound timeout (default: 10)
    /// - `PLACES_SEARCH_LOCATION` - search bias centre (default: "35.6895,139.6917")
    /// - `PLACES_SEARCH_RADIUS` - search bias radius in metres (default: 50000)
    /// - `PLACES_LANGUAGE` - response language (default: "ja")
    /// - `REQUEST_TIMEOUT_SECONDS` - inbound timeout (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let parsed = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let places_api_key = lookup("GOOGLE_PLACES_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .context("GOOGLE_PLACES_API_KEY must be set")?;

        Ok(Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "saunalog.db".to_string()),
            places_api_key,
            places_base_url: lookup("PLACES_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PLACES_BASE_URL.to_string()),
            places_timeout_seconds: parsed("PLACES_TIMEOUT_SECONDS", 10),
            places_search_location: lookup("PLACES_SEARCH_LOCATION")
                .unwrap_or_else(|| "35.6895,139.6917".to_string()),
            places_search_radius: lookup("PLACES_SEARCH_RADIUS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(50_000),
            places_language: lookup("PLACES_LANGUAGE").unwrap_or_else(|| "ja".to_string()),
            request_timeout_seconds: parsed("REQUEST_TIMEOUT_SECONDS", 30),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Build the Places adapter settings, validating the base URL.
    pub fn places_settings(&self) -> Result<GooglePlacesSettings> {
        let base_url = Url::parse(&self.places_base_url)
            .with_context(|| format!("invalid PLACES_BASE_URL: {}", self.places_base_url))?;

        Ok(GooglePlacesSettings {
            base_url,
            api_key: self.places_api_key.clone(),
            language: self.places_language.clone(),
            search_location: self.places_search_location.clone(),
            search_radius_m: self.places_search_radius,
            timeout: Duration::from_secs(self.places_timeout_seconds),
        })
    }
}
