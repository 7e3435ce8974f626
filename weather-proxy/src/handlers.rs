use actix_web::{HttpResponse, ResponseError, get, http::StatusCode, http::header::ContentType, web};
use serde::Deserialize;
use thiserror::Error;
use weather_core::{Coordinate, WeatherError};

use crate::{AppState, wire::WeatherResponse};

/// Errors are returned as plain text; the status code is the only structure.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(#[from] WeatherError),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    latitude: Option<String>,
    longitude: Option<String>,
}

impl WeatherQuery {
    fn coordinate(&self) -> Result<Coordinate, ProxyError> {
        let latitude = parse_param("latitude", self.latitude.as_deref())?;
        let longitude = parse_param("longitude", self.longitude.as_deref())?;

        Coordinate::new(latitude, longitude).map_err(|e| ProxyError::BadRequest(e.to_string()))
    }
}

fn parse_param(name: &str, value: Option<&str>) -> Result<f64, ProxyError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProxyError::BadRequest(format!("Missing query parameter: {name}")))?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProxyError::BadRequest(format!("Invalid {name}: '{raw}' is not a number")))
}

#[get("/weather")]
pub async fn weather(
    state: web::Data<AppState>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, ProxyError> {
    let coord = query.coordinate().inspect_err(|e| tracing::warn!("Rejected request: {}", e))?;

    let data = state
        .provider
        .fetch_weather(coord)
        .await
        .inspect_err(|e| tracing::warn!("Weather lookup for {} failed: {}", coord, e))?;

    Ok(HttpResponse::Ok().json(WeatherResponse::from(&data)))
}
