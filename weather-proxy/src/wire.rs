//! JSON shape served by `GET /weather`.
//!
//! Temperatures are Celsius and wind speed is m/s; the adapter has already
//! converted whatever the provider reported.

use serde::{Deserialize, Serialize};
use weather_core::WeatherData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub longitude: f64,
    pub latitude: f64,
    pub current: CurrentWire,
    pub daily: DailyWire,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWire {
    pub temperature: f64,
    pub relative_humidity: u8,
    /// 1 during daylight, 0 otherwise.
    pub is_daytime: u8,
    pub wind_speed: f64,
    pub weather_code: i32,
}

/// Parallel arrays, one slot per forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWire {
    pub time: Vec<String>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
    pub weather_code: Vec<i32>,
}

impl From<&WeatherData> for WeatherResponse {
    fn from(data: &WeatherData) -> Self {
        let current = &data.current;

        Self {
            longitude: data.coordinate.longitude(),
            latitude: data.coordinate.latitude(),
            current: CurrentWire {
                temperature: current.temperature_c,
                relative_humidity: current.humidity_pct,
                is_daytime: u8::from(current.is_day),
                wind_speed: current.wind_speed_mps,
                weather_code: current.weather_code,
            },
            daily: DailyWire {
                time: data.daily.iter().map(|d| d.date.format("%Y-%m-%d").to_string()).collect(),
                temperature_max: data.daily.iter().map(|d| d.high_c).collect(),
                temperature_min: data.daily.iter().map(|d| d.low_c).collect(),
                weather_code: data.daily.iter().map(|d| d.weather_code).collect(),
            },
        }
    }
}
