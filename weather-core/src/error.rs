use thiserror::Error;

/// Failures surfaced by the resolver and the weather adapter.
///
/// Every variant is terminal for the request that produced it.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Invalid coordinate ({latitude}, {longitude}): latitude must be within -90..90 and longitude within -180..180"
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("No weather data: {0}")]
    NoData(String),
}

impl WeatherError {
    /// True when the caller can fix the request and try again.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidCoordinate { .. })
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinate_message_names_values() {
        let err = WeatherError::InvalidCoordinate { latitude: 91.0, longitude: 0.0 };
        assert!(err.to_string().contains("(91, 0)"));
    }

    #[test]
    fn only_input_errors_are_user_correctable() {
        assert!(WeatherError::InvalidInput("x".into()).is_user_correctable());
        assert!(
            WeatherError::InvalidCoordinate { latitude: 0.0, longitude: 200.0 }
                .is_user_correctable()
        );
        assert!(!WeatherError::LocationNotFound("Atlantis".into()).is_user_correctable());
        assert!(!WeatherError::UpstreamUnavailable("503".into()).is_user_correctable());
        assert!(!WeatherError::NoData("missing daily".into()).is_user_correctable());
    }
}
