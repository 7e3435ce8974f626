use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Select, Text};
use weather_core::{
    Config, Coordinate, LocationInput, LocationResolver, TemperatureUnit, WindSpeedUnit,
    provider_from_config,
};

use crate::format::format_weather;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively choose provider units, timeout and proxy bind address.
    Configure,

    /// Print the location of the config file.
    ConfigPath,

    /// Show current weather and a five-day forecast.
    Show {
        /// City or place name, e.g. "Lisbon".
        #[arg(conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in degrees, -90..90.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees, -180..180.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
            Command::Show { city, lat, lon } => {
                let input = location_input(city, lat, lon)?;
                show(&input).await
            }
        }
    }
}

fn location_input(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<LocationInput> {
    match (city, lat, lon) {
        (Some(city), None, None) => Ok(LocationInput::City(city)),
        (None, Some(lat), Some(lon)) => Ok(LocationInput::Coordinates(Coordinate::new(lat, lon)?)),
        _ => bail!("Provide either a city name or both --lat and --lon."),
    }
}

async fn show(input: &LocationInput) -> anyhow::Result<()> {
    let config = Config::load()?;
    let http = config.http_client()?;

    let resolver = LocationResolver::from_config(http.clone(), &config);
    let provider = provider_from_config(http, &config);

    let location = resolver.resolve(input).await?;
    let data = provider
        .fetch_weather(location.coordinate)
        .await
        .with_context(|| format!("Could not fetch weather for {}", location.display_name))?;

    print!("{}", format_weather(&location, &data));
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let temperature = Select::new(
        "Temperature unit to request from the provider:",
        TemperatureUnit::all().to_vec(),
    )
    .with_starting_cursor(starting_cursor(TemperatureUnit::all(), &config.units.temperature))
    .prompt()
    .context("Temperature unit selection cancelled")?;

    let wind_speed = Select::new(
        "Wind speed unit to request from the provider:",
        WindSpeedUnit::all().to_vec(),
    )
    .with_starting_cursor(starting_cursor(WindSpeedUnit::all(), &config.units.wind_speed))
    .prompt()
    .context("Wind speed unit selection cancelled")?;

    let timeout_secs = CustomType::<u64>::new("HTTP timeout in seconds:")
        .with_default(config.upstream.timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Timeout input cancelled")?;

    let bind = Text::new("Proxy bind address:")
        .with_default(&config.server.bind)
        .prompt()
        .context("Bind address input cancelled")?;

    config.units.temperature = temperature;
    config.units.wind_speed = wind_speed;
    config.upstream.timeout_secs = timeout_secs;
    config.server.bind = bind;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn starting_cursor<T: PartialEq>(options: &[T], current: &T) -> usize {
    options.iter().position(|o| o == current).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_argument_becomes_city_input() {
        let input = location_input(Some("Lisbon".into()), None, None).unwrap();
        assert_eq!(input, LocationInput::City("Lisbon".into()));
    }

    #[test]
    fn coordinates_are_validated() {
        let input = location_input(None, Some(38.72), Some(-9.14)).unwrap();
        assert!(matches!(input, LocationInput::Coordinates(c) if c.latitude() == 38.72));

        let err = location_input(None, Some(91.0), Some(0.0)).unwrap_err();
        assert!(err.to_string().contains("Invalid coordinate"));
    }

    #[test]
    fn nothing_given_is_an_error() {
        let err = location_input(None, None, None).unwrap_err();
        assert!(err.to_string().contains("either a city name"));
    }

    #[test]
    fn parses_show_with_negative_coordinates() {
        let cli = Cli::try_parse_from(["weather", "show", "--lat", "-33.9", "--lon", "18.4"])
            .expect("valid args");

        match cli.command {
            Command::Show { city, lat, lon } => {
                assert_eq!(city, None);
                assert_eq!(lat, Some(-33.9));
                assert_eq!(lon, Some(18.4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn city_conflicts_with_coordinates() {
        let res = Cli::try_parse_from(["weather", "show", "Paris", "--lat", "1", "--lon", "2"]);
        assert!(res.is_err());
    }

    #[test]
    fn lat_requires_lon() {
        let res = Cli::try_parse_from(["weather", "show", "--lat", "1"]);
        assert!(res.is_err());
    }

    #[test]
    fn starting_cursor_finds_current_unit() {
        assert_eq!(starting_cursor(WindSpeedUnit::all(), &WindSpeedUnit::Mph), 2);
        assert_eq!(starting_cursor(TemperatureUnit::all(), &TemperatureUnit::Celsius), 0);
    }
}
