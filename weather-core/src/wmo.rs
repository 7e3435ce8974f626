//! WMO present-weather codes as reported by Open-Meteo.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Condition category derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    Clear,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    Mist,
    Rain,
    ShowerRain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::FewClouds => "few clouds",
            Self::ScatteredClouds => "scattered clouds",
            Self::BrokenClouds => "broken clouds",
            Self::Mist => "mist",
            Self::Rain => "rain",
            Self::ShowerRain => "shower rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use WeatherCategory::*;

/// Every code the provider documents, in ascending order.
pub const WMO_CODES: &[(i32, WeatherCategory, &str)] = &[
    (0, Clear, "Clear sky"),
    (1, FewClouds, "Mainly clear"),
    (2, ScatteredClouds, "Partly cloudy"),
    (3, BrokenClouds, "Overcast"),
    (45, Mist, "Foggy"),
    (48, Mist, "Depositing rime fog"),
    (51, Rain, "Light drizzle"),
    (53, Rain, "Moderate drizzle"),
    (55, Rain, "Dense drizzle"),
    (56, Rain, "Light freezing drizzle"),
    (57, Rain, "Dense freezing drizzle"),
    (61, Rain, "Slight rain"),
    (63, Rain, "Moderate rain"),
    (65, Rain, "Heavy rain"),
    (66, Rain, "Light freezing rain"),
    (67, Rain, "Heavy freezing rain"),
    (71, Snow, "Slight snow fall"),
    (73, Snow, "Moderate snow fall"),
    (75, Snow, "Heavy snow fall"),
    (77, Snow, "Snow grains"),
    (80, ShowerRain, "Slight rain showers"),
    (81, ShowerRain, "Moderate rain showers"),
    (82, ShowerRain, "Violent rain showers"),
    (85, Snow, "Slight snow showers"),
    (86, Snow, "Heavy snow showers"),
    (95, Thunderstorm, "Thunderstorm"),
    (96, Thunderstorm, "Thunderstorm with slight hail"),
    (99, Thunderstorm, "Thunderstorm with heavy hail"),
];

/// Look up the category and description for a WMO code.
///
/// Codes outside the table classify as `Unknown` / "Unknown".
pub fn classify(code: i32) -> (WeatherCategory, &'static str) {
    WMO_CODES
        .binary_search_by_key(&code, |(c, _, _)| *c)
        .map(|idx| (WMO_CODES[idx].1, WMO_CODES[idx].2))
        .unwrap_or((Unknown, "Unknown"))
}

#[cfg(test)]
mod tests {
    use super::WeatherCategory::*;
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(WMO_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn every_table_entry_classifies_to_itself() {
        for (code, category, description) in WMO_CODES {
            assert_eq!(classify(*code), (*category, *description), "code {code}");
        }
    }

    #[test]
    fn clear_sky() {
        assert_eq!(classify(0), (Clear, "Clear sky"));
    }

    #[test]
    fn slight_rain() {
        assert_eq!(classify(61), (Rain, "Slight rain"));
    }

    #[test]
    fn fog_codes_share_mist_category() {
        assert_eq!(classify(45), (Mist, "Foggy"));
        assert_eq!(classify(48), (Mist, "Depositing rime fog"));
    }

    #[test]
    fn drizzle_and_freezing_variants_are_rain() {
        for code in [51, 53, 55, 56, 57, 61, 63, 65, 66, 67] {
            assert_eq!(classify(code).0, Rain, "code {code}");
        }
    }

    #[test]
    fn snow_showers_are_snow_not_shower_rain() {
        assert_eq!(classify(85).0, Snow);
        assert_eq!(classify(86).0, Snow);
        assert_eq!(classify(80).0, ShowerRain);
    }

    #[test]
    fn thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert_eq!(classify(code).0, Thunderstorm);
        }
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        assert_eq!(classify(999), (Unknown, "Unknown"));
        assert_eq!(classify(-1), (Unknown, "Unknown"));
        assert_eq!(classify(4), (Unknown, "Unknown"));
    }
}
