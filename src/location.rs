//! Permission-gated location providers

use async_trait::async_trait;
use serde::Deserialize;

use crate::api::{ApiError, OpenWeatherClient};
use crate::state::Coordinates;

pub const IP_LOOKUP_URL: &str = "http://ip-api.com/json/";

/// Answer to a location permission request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location service unavailable: {0}")]
    Unavailable(String),
    #[error("location lookup failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no location found for '{0}'")]
    NotFound(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask for permission to read the current position.
    async fn request_permission(&self) -> Result<Permission, LocationError>;

    /// A single position fix. Only meaningful after a grant.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Fixed coordinates supplied by the user
#[derive(Clone, Copy, Debug)]
pub struct StaticLocation {
    coords: Coordinates,
}

impl StaticLocation {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

#[async_trait]
impl LocationProvider for StaticLocation {
    async fn request_permission(&self) -> Result<Permission, LocationError> {
        Ok(Permission::Granted)
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

/// City name resolved through OpenWeather geocoding
#[derive(Clone, Debug)]
pub struct CityLocation {
    client: OpenWeatherClient,
    city: String,
}

impl CityLocation {
    pub fn new(client: OpenWeatherClient, city: impl Into<String>) -> Self {
        Self {
            client,
            city: city.into(),
        }
    }
}

#[async_trait]
impl LocationProvider for CityLocation {
    async fn request_permission(&self) -> Result<Permission, LocationError> {
        Ok(Permission::Granted)
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let city = self.city.trim();
        if city.is_empty() {
            return Err(LocationError::NotFound(self.city.clone()));
        }
        let hit = self
            .client
            .geocode(city)
            .await?
            .ok_or_else(|| LocationError::NotFound(city.to_string()))?;
        tracing::debug!(
            name = %hit.name,
            country = hit.country.as_deref().unwrap_or("-"),
            "geocoded city"
        );
        Ok(Coordinates {
            lat: hit.lat,
            lon: hit.lon,
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Approximate position from the public IP address.
///
/// The permission answer is decided up front by the user's consent setting.
#[derive(Clone, Debug)]
pub struct IpLocation {
    http: reqwest::Client,
    endpoint: String,
    consent: bool,
}

impl IpLocation {
    pub fn new(consent: bool) -> Self {
        Self::with_endpoint(IP_LOOKUP_URL, consent)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, consent: bool) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            consent,
        }
    }
}

#[async_trait]
impl LocationProvider for IpLocation {
    async fn request_permission(&self) -> Result<Permission, LocationError> {
        Ok(if self.consent {
            Permission::Granted
        } else {
            Permission::Denied
        })
    }

    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let data: IpLookupResponse = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if data.status != "success" {
            return Err(LocationError::Unavailable(
                data.message.unwrap_or(data.status),
            ));
        }
        match (data.lat, data.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates { lat, lon }),
            _ => Err(LocationError::Unavailable(
                "lookup returned no coordinates".to_string(),
            )),
        }
    }
}
