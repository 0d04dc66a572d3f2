//! OpenWeather API client

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::state::{Coordinates, CurrentWeather, ForecastEntry, WeatherReport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Units flag sent with every weather request; conversion happens client-side.
const UNITS: &str = "metric";

/// Weather API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("could not parse {endpoint} response: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastItem {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwGeocodeResult {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(raw: OwCurrentResponse) -> Self {
        let (condition_main, condition_description) = raw
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.description))
            .unwrap_or_default();
        CurrentWeather {
            location_name: raw.name,
            temperature_celsius: raw.main.temp,
            condition_main,
            condition_description,
        }
    }
}

impl From<OwForecastItem> for ForecastEntry {
    fn from(raw: OwForecastItem) -> Self {
        ForecastEntry {
            timestamp: raw.dt,
            temperature_celsius: raw.main.temp,
            condition_main: raw
                .weather
                .into_iter()
                .next()
                .map(|w| w.main)
                .unwrap_or_default(),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Thin OpenWeather client; cheap to clone
#[derive(Clone, Debug)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Parse { endpoint, source })
    }

    fn coords_query(coords: Coordinates) -> [(&'static str, String); 3] {
        [
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("units", UNITS.to_string()),
        ]
    }

    /// Current conditions at `coords`
    pub async fn current(&self, coords: Coordinates) -> Result<CurrentWeather, ApiError> {
        let raw: OwCurrentResponse = self
            .get_json("current weather", "/data/2.5/weather", &Self::coords_query(coords))
            .await?;
        Ok(raw.into())
    }

    /// Full 3-hourly forecast list at `coords`, in provider order
    pub async fn forecast(&self, coords: Coordinates) -> Result<Vec<ForecastEntry>, ApiError> {
        let raw: OwForecastResponse = self
            .get_json("forecast", "/data/2.5/forecast", &Self::coords_query(coords))
            .await?;
        Ok(raw.list.into_iter().map(ForecastEntry::from).collect())
    }

    /// Both requests, run concurrently; fails if either fails.
    pub async fn report(&self, coords: Coordinates) -> Result<WeatherReport, ApiError> {
        let (current, forecast) = tokio::try_join!(self.current(coords), self.forecast(coords))?;
        Ok(WeatherReport { current, forecast })
    }

    /// Resolve a city name to its best match using direct geocoding
    pub(crate) async fn geocode(&self, city: &str) -> Result<Option<OwGeocodeResult>, ApiError> {
        let results: Vec<OwGeocodeResult> = self
            .get_json(
                "geocoding",
                "/geo/1.0/direct",
                &[("q", city.to_string()), ("limit", "1".to_string())],
            )
            .await?;
        Ok(results.into_iter().next())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
