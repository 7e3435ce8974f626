use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    config::UnitsConfig,
    error::WeatherError,
    model::{Coordinate, CurrentConditions, DailyForecastEntry, WeatherData},
    units::{TemperatureUnit, WindSpeedUnit},
    wmo,
};

use super::{WeatherProvider, check_status, parse_body};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,is_day,wind_speed_10m,weather_code";
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const FORECAST_DAYS: &str = "7";

/// Number of days emitted after today's entry is dropped.
pub const DAILY_ENTRIES: usize = 5;

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
    forecast_url: String,
    units: UnitsConfig,
}

impl OpenMeteoProvider {
    pub fn new(http: Client, forecast_url: impl Into<String>, units: UnitsConfig) -> Self {
        Self { http, forecast_url: forecast_url.into(), units }
    }

    pub fn from_config(http: Client, config: &Config) -> Self {
        Self::new(http, config.upstream.forecast_url.clone(), config.units)
    }

    async fn fetch_forecast(&self, coord: Coordinate) -> Result<OmResponse, WeatherError> {
        let params = [
            ("latitude", coord.latitude().to_string()),
            ("longitude", coord.longitude().to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", FORECAST_DAYS.to_string()),
            ("temperature_unit", self.units.temperature.as_query().to_string()),
            ("wind_speed_unit", self.units.wind_speed.as_query().to_string()),
        ];

        tracing::debug!("Fetching forecast for {} via {}", coord, self.forecast_url);

        let res = self
            .http
            .get(&self.forecast_url)
            .query(&params)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("Forecast request failed: {}", e))?;

        let body = check_status(res, "Open-Meteo forecast").await?;

        parse_body(&body, "Open-Meteo forecast")
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch_weather(&self, coord: Coordinate) -> Result<WeatherData, WeatherError> {
        let raw = self.fetch_forecast(coord).await?;
        let data = into_weather_data(raw, coord, self.units)?;

        tracing::info!(
            "Fetched weather for {}: {:.1}°C, {} forecast days",
            data.coordinate,
            data.current.temperature_c,
            data.daily.len()
        );

        Ok(data)
    }
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    current_units: Option<OmCurrentUnits>,
    current: Option<OmCurrent>,
    daily_units: Option<OmDailyUnits>,
    daily: Option<OmDaily>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentUnits {
    temperature_2m: Option<String>,
    wind_speed_10m: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    is_day: u8,
    wind_speed_10m: f64,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct OmDailyUnits {
    temperature_2m_max: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<String>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

fn into_weather_data(
    raw: OmResponse,
    requested: Coordinate,
    units: UnitsConfig,
) -> Result<WeatherData, WeatherError> {
    let current = raw
        .current
        .ok_or_else(|| WeatherError::NoData("response has no current block".to_string()))?;
    let daily = raw
        .daily
        .ok_or_else(|| WeatherError::NoData("response has no daily block".to_string()))?;

    // Prefer the unit labels the provider reports over what we asked for.
    let current_units = raw.current_units.as_ref();
    let temp_unit = current_units
        .and_then(|u| u.temperature_2m.as_deref())
        .and_then(TemperatureUnit::from_label)
        .unwrap_or(units.temperature);
    let wind_unit = current_units
        .and_then(|u| u.wind_speed_10m.as_deref())
        .and_then(WindSpeedUnit::from_label)
        .unwrap_or(units.wind_speed);
    let daily_temp_unit = raw
        .daily_units
        .as_ref()
        .and_then(|u| u.temperature_2m_max.as_deref())
        .and_then(TemperatureUnit::from_label)
        .unwrap_or(units.temperature);

    // The provider snaps to its grid; keep its position when it is sane.
    let coordinate = match (raw.latitude, raw.longitude) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon).unwrap_or(requested),
        _ => requested,
    };

    Ok(WeatherData {
        coordinate,
        current: map_current(current, temp_unit, wind_unit)?,
        daily: map_daily(&daily, daily_temp_unit)?,
    })
}

fn map_current(
    current: OmCurrent,
    temp_unit: TemperatureUnit,
    wind_unit: WindSpeedUnit,
) -> Result<CurrentConditions, WeatherError> {
    let (category, description) = wmo::classify(current.weather_code);

    Ok(CurrentConditions {
        temperature_c: temp_unit.to_celsius(current.temperature_2m),
        humidity_pct: current.relative_humidity_2m.round().clamp(0.0, 100.0) as u8,
        wind_speed_mps: wind_unit.to_mps(current.wind_speed_10m),
        category,
        description: description.to_string(),
        weather_code: current.weather_code,
        is_day: current.is_day != 0,
        observed_at: parse_time(&current.time)?,
    })
}

/// Drops index 0 (today), keeps strictly increasing dates, takes the next five.
fn map_daily(
    daily: &OmDaily,
    temp_unit: TemperatureUnit,
) -> Result<Vec<DailyForecastEntry>, WeatherError> {
    let mut last = daily.time.first().map(String::as_str).map(parse_date).transpose()?;
    let mut entries = Vec::with_capacity(DAILY_ENTRIES);

    for (idx, time) in daily.time.iter().enumerate().skip(1) {
        if entries.len() == DAILY_ENTRIES {
            break;
        }

        let date = parse_date(time)?;
        if last.is_some_and(|prev| date <= prev) {
            continue;
        }

        let code = value_at(&daily.weather_code, idx, "weather_code", date)?;
        let high = value_at(&daily.temperature_2m_max, idx, "temperature_2m_max", date)?;
        let low = value_at(&daily.temperature_2m_min, idx, "temperature_2m_min", date)?;
        let (category, description) = wmo::classify(code);

        entries.push(DailyForecastEntry {
            date,
            high_c: temp_unit.to_celsius(high),
            low_c: temp_unit.to_celsius(low),
            category,
            description: description.to_string(),
            weather_code: code,
        });
        last = Some(date);
    }

    Ok(entries)
}

fn value_at<T: Copy>(
    series: &[Option<T>],
    idx: usize,
    name: &str,
    date: NaiveDate,
) -> Result<T, WeatherError> {
    series
        .get(idx)
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::NoData(format!("daily {name} has no value for {date}")))
}

fn parse_date(s: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| WeatherError::NoData(format!("invalid daily date '{s}': {e}")))
}

fn parse_time(s: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| WeatherError::NoData(format!("invalid observation time '{s}': {e}")))
}
