use weather_core::{ResolvedLocation, WeatherData};

/// Human-readable rendering of a resolved location and its weather.
pub fn format_weather(location: &ResolvedLocation, data: &WeatherData) -> String {
    let current = &data.current;

    let mut output = format!(
        "Weather for {}\nObserved: {}\n\n",
        location.display_name,
        current.observed_at.format("%a %d %b %Y, %H:%M"),
    );

    output.push_str(&format!(
        "Now ({}):\n  {:.1}\u{00b0}C, {}\n  Humidity: {}%\n  Wind: {:.1} m/s\n",
        if current.is_day { "day" } else { "night" },
        current.temperature_c,
        current.description,
        current.humidity_pct,
        current.wind_speed_mps,
    ));

    if data.daily.is_empty() {
        return output;
    }

    output.push_str("\nForecast:\n");
    for day in &data.daily {
        output.push_str(&format!(
            "  {}: {:.1}\u{00b0}C / {:.1}\u{00b0}C, {}\n",
            day.date.format("%a %d %b"),
            day.high_c,
            day.low_c,
            day.description,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weather_core::{
        Coordinate, CurrentConditions, DailyForecastEntry, WeatherCategory,
    };

    fn sample(daily: Vec<DailyForecastEntry>) -> (ResolvedLocation, WeatherData) {
        let coordinate = Coordinate::new(59.91, 10.75).unwrap();
        let location = ResolvedLocation { coordinate, display_name: "Oslo, Norway".into() };
        let data = WeatherData {
            coordinate,
            current: CurrentConditions {
                temperature_c: -3.25,
                humidity_pct: 80,
                wind_speed_mps: 10.0,
                category: WeatherCategory::Snow,
                description: "Moderate snow fall".into(),
                weather_code: 73,
                is_day: false,
                observed_at: NaiveDate::from_ymd_opt(2024, 12, 24)
                    .unwrap()
                    .and_hms_opt(18, 45, 0)
                    .unwrap(),
            },
            daily,
        };
        (location, data)
    }

    #[test]
    fn renders_current_and_forecast() {
        let (location, data) = sample(vec![DailyForecastEntry {
            date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            high_c: -1.0,
            low_c: -6.5,
            category: WeatherCategory::Clear,
            description: "Clear sky".into(),
            weather_code: 0,
        }]);

        let out = format_weather(&location, &data);

        assert!(out.starts_with("Weather for Oslo, Norway\n"));
        assert!(out.contains("Observed: Tue 24 Dec 2024, 18:45"));
        assert!(out.contains("Now (night):"));
        assert!(out.contains("Moderate snow fall"));
        assert!(out.contains("Wind: 10.0 m/s"));
        assert!(out.contains("Wed 25 Dec: -1.0\u{00b0}C / -6.5\u{00b0}C, Clear sky"));
    }

    #[test]
    fn omits_forecast_header_when_empty() {
        let (location, data) = sample(Vec::new());
        assert!(!format_weather(&location, &data).contains("Forecast:"));
    }
}
