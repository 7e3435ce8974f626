//! Units the provider may report in, and conversions into the canonical
//! Celsius / metres-per-second pair used everywhere past the adapter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value of Open-Meteo's `temperature_unit` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    /// Parse a unit label from a provider `*_units` block, e.g. "°C".
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "°C" | "C" | "celsius" => Some(Self::Celsius),
            "°F" | "F" | "fahrenheit" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Kmh,
    Ms,
    Mph,
    Kn,
}

impl WindSpeedUnit {
    /// Value of Open-Meteo's `wind_speed_unit` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Kmh => "kmh",
            Self::Ms => "ms",
            Self::Mph => "mph",
            Self::Kn => "kn",
        }
    }

    pub const fn all() -> &'static [WindSpeedUnit] {
        &[WindSpeedUnit::Kmh, WindSpeedUnit::Ms, WindSpeedUnit::Mph, WindSpeedUnit::Kn]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "km/h" | "kmh" => Some(Self::Kmh),
            "m/s" | "ms" => Some(Self::Ms),
            "mp/h" | "mph" => Some(Self::Mph),
            "kn" | "kt" => Some(Self::Kn),
            _ => None,
        }
    }

    pub fn to_mps(&self, value: f64) -> f64 {
        match self {
            Self::Kmh => value / 3.6,
            Self::Ms => value,
            Self::Mph => value * 0.44704,
            Self::Kn => value * 0.514444,
        }
    }
}

impl std::fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}
