//! Forward geocoding: turn a place name into coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    error::WeatherError,
    model::{Coordinate, LocationInput, ResolvedLocation},
    provider::{check_status, parse_body},
};

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    // Absent entirely when nothing matched.
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

impl GeocodingResult {
    /// "Paris, Île-de-France, France", skipping missing parts and repeats of the name.
    fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        for part in [self.admin1.as_deref(), self.country.as_deref()].into_iter().flatten() {
            if !part.is_empty() && !parts.contains(&part) {
                parts.push(part);
            }
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone)]
pub struct LocationResolver {
    http: Client,
    geocoding_url: String,
}

impl LocationResolver {
    pub fn new(http: Client, geocoding_url: impl Into<String>) -> Self {
        Self { http, geocoding_url: geocoding_url.into() }
    }

    pub fn from_config(http: Client, config: &Config) -> Self {
        Self::new(http, config.upstream.geocoding_url.clone())
    }

    pub async fn resolve(&self, input: &LocationInput) -> Result<ResolvedLocation, WeatherError> {
        match input {
            LocationInput::Coordinates(coord) => {
                let coordinate = Coordinate::new(coord.latitude(), coord.longitude())?;
                Ok(ResolvedLocation { coordinate, display_name: coordinate.to_string() })
            }
            LocationInput::City(name) => self.geocode(name).await,
        }
    }

    async fn geocode(&self, name: &str) -> Result<ResolvedLocation, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::InvalidInput("City name must not be empty".to_string()));
        }

        tracing::debug!("Geocoding '{}' via {}", name, self.geocoding_url);

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("name", name), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Geocoding request failed: {}", e))?;

        let body = check_status(res, "geocoding").await?;
        let parsed: GeocodingResponse = parse_body(&body, "geocoding")?;

        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(name.to_string()))?;

        let coordinate = Coordinate::new(first.latitude, first.longitude)?;
        let display_name = first.display_name();

        tracing::info!("Resolved '{}' to {} ({})", name, display_name, coordinate);

        Ok(ResolvedLocation { coordinate, display_name })
    }
}
