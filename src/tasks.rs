//! Async task bodies spawned by the effect handler.
//!
//! Each task runs to completion and reports back with exactly one action.
//! Failures are logged here and handed to the reducer as plain strings.

use crate::action::Action;
use crate::api::OpenWeatherClient;
use crate::location::{LocationProvider, Permission};
use crate::state::Coordinates;

/// Ask for permission, then take a single position fix.
pub async fn locate(provider: &dyn LocationProvider) -> Action {
    match provider.request_permission().await {
        Ok(Permission::Granted) => {}
        Ok(Permission::Denied) => {
            tracing::warn!("permission to access location was denied");
            return Action::LocationDidDeny;
        }
        Err(e) => {
            tracing::error!(error = %e, "location permission request failed");
            return Action::LocationDidError(e.to_string());
        }
    }

    match provider.current_position().await {
        Ok(coords) => {
            tracing::info!(lat = coords.lat, lon = coords.lon, "location resolved");
            Action::LocationDidResolve(coords)
        }
        Err(e) => {
            tracing::error!(error = %e, "could not obtain a position fix");
            Action::LocationDidError(e.to_string())
        }
    }
}

/// Fetch current conditions and forecast; all or nothing.
pub async fn load_weather(client: &OpenWeatherClient, coords: Coordinates) -> Action {
    tracing::info!(lat = coords.lat, lon = coords.lon, "fetching weather");
    match client.report(coords).await {
        Ok(report) => {
            tracing::info!(
                location = %report.current.location_name,
                forecast_entries = report.forecast.len(),
                "weather loaded"
            );
            Action::WeatherDidLoad(report)
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching weather");
            Action::WeatherDidError(e.to_string())
        }
    }
}
