//! Command-line configuration and its validated form

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{OpenWeatherClient, DEFAULT_BASE_URL};
use crate::location::{CityLocation, IpLocation, LocationProvider, StaticLocation};
use crate::state::Coordinates;

/// Weather screen options, flattened into the binary's argument parser
#[derive(clap::Args, Debug, Clone)]
pub struct WeatherArgs {
    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Fixed latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Fixed longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// City name to geocode instead of locating by IP
    #[arg(long, short, conflicts_with_all = ["lat", "lon"])]
    pub city: Option<String>,

    /// Answer the location permission prompt with "denied"
    #[arg(long, conflicts_with_all = ["city", "lat", "lon"])]
    pub deny_location: bool,

    /// Refresh interval in seconds (minimum 1); off when omitted
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval: Option<u64>,

    /// OpenWeather base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log file (the terminal belongs to the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("no OpenWeather API key; pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,
    #[error("--lat and --lon must be given together")]
    IncompleteCoordinates,
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// Where the position fix comes from
#[derive(Clone, Debug, PartialEq)]
pub enum LocationSource {
    Fixed(Coordinates),
    City(String),
    Ip { consent: bool },
}

/// Validated runtime configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub location: LocationSource,
    pub refresh_interval: Option<Duration>,
    pub log_file: PathBuf,
}

impl TryFrom<WeatherArgs> for Config {
    type Error = ConfigError;

    fn try_from(args: WeatherArgs) -> Result<Self, Self::Error> {
        let api_key = args
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let location = match (args.lat, args.lon, args.city) {
            (Some(lat), Some(lon), _) => {
                if !(-90.0..=90.0).contains(&lat) {
                    return Err(ConfigError::LatitudeOutOfRange(lat));
                }
                if !(-180.0..=180.0).contains(&lon) {
                    return Err(ConfigError::LongitudeOutOfRange(lon));
                }
                LocationSource::Fixed(Coordinates { lat, lon })
            }
            (Some(_), None, _) | (None, Some(_), _) => {
                return Err(ConfigError::IncompleteCoordinates)
            }
            (None, None, Some(city)) => LocationSource::City(city),
            (None, None, None) => LocationSource::Ip {
                consent: !args.deny_location,
            },
        };

        Ok(Config {
            api_key,
            base_url: args.base_url,
            location,
            refresh_interval: args.refresh_interval.map(Duration::from_secs),
            log_file: args.log_file.unwrap_or_else(default_log_file),
        })
    }
}

impl Config {
    pub fn weather_client(&self) -> OpenWeatherClient {
        OpenWeatherClient::with_base_url(self.api_key.clone(), self.base_url.clone())
    }

    pub fn location_provider(&self) -> Arc<dyn LocationProvider> {
        match &self.location {
            LocationSource::Fixed(coords) => Arc::new(StaticLocation::new(*coords)),
            LocationSource::City(city) => {
                Arc::new(CityLocation::new(self.weather_client(), city.clone()))
            }
            LocationSource::Ip { consent } => Arc::new(IpLocation::new(*consent)),
        }
    }
}

pub fn default_log_file() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|dir| dir.join("weatherview"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weatherview.log")
}
