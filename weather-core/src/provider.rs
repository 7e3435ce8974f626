use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{Config, Coordinate, WeatherData, error::WeatherError};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Source of canonical weather data for a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, coord: Coordinate) -> Result<WeatherData, WeatherError>;
}

/// Construct the configured provider.
pub fn provider_from_config(
    http: reqwest::Client,
    config: &Config,
) -> Box<dyn WeatherProvider> {
    Box::new(OpenMeteoProvider::from_config(http, config))
}

/// Read the body, turning non-2xx statuses into `UpstreamUnavailable`.
pub(crate) async fn check_status(res: Response, what: &str) -> Result<String, WeatherError> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        tracing::warn!("{} request failed with status {}", what, status);
        return Err(WeatherError::UpstreamUnavailable(format!(
            "{} request failed with status {}: {}",
            what,
            status,
            truncate_body(&body),
        )));
    }

    Ok(body)
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, WeatherError> {
    serde_json::from_str(body)
        .map_err(|e| WeatherError::NoData(format!("Failed to parse {what} JSON: {e}")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_bodies_are_cut_on_char_boundary() {
        let body = "é".repeat(150); // 300 bytes
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.len(), 200 + 3);
    }

    #[test]
    fn parse_failure_is_no_data() {
        let err = parse_body::<serde_json::Value>("{not json", "forecast").unwrap_err();
        assert!(matches!(err, WeatherError::NoData(_)));
    }

    #[test]
    fn provider_from_config_builds_open_meteo() {
        let provider = provider_from_config(reqwest::Client::new(), &Config::default());
        assert!(format!("{provider:?}").contains("OpenMeteoProvider"));
    }
}
