//! HTTP front for `weather-core`: a single `GET /weather` route that
//! forwards to the configured provider and returns the wire schema in
//! [`wire`].

use actix_web::web;
use std::sync::Arc;
use weather_core::WeatherProvider;

pub mod handlers;
pub mod wire;

/// Per-server state shared by all workers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

/// Register the proxy routes on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::weather);
}
