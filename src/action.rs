//! Actions: intents from the UI and results from async tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Coordinates, WeatherReport};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location category =====
    /// Intent: ask for permission and a position fix (dispatched on mount)
    LocationRequest,

    /// Result: permission granted and a position obtained
    LocationDidResolve(Coordinates),

    /// Result: permission denied
    LocationDidDeny,

    /// Result: permission granted but no position could be obtained
    LocationDidError(String),

    // ===== Weather category =====
    /// Intent: fetch current conditions and forecast for the known position
    WeatherFetch,

    /// Result: both requests succeeded
    WeatherDidLoad(WeatherReport),

    /// Result: either request failed
    WeatherDidError(String),

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Scroll the forecast strip one entry back
    UiForecastPrev,

    /// Scroll the forecast strip one entry forward
    UiForecastNext,

    // ===== Uncategorized (global) =====
    /// Local wall-clock hour changed (0-23)
    ClockSync(u8),

    /// Animation tick for the backdrop cross-fade
    Tick,

    /// Exit the application
    Quit,
}
