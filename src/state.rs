//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::backdrop::{self, Backdrop, Crossfade};
use crate::condition::ConditionCategory;
use crate::forecast::round_half_up;

/// A latitude/longitude pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions for the resolved location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub location_name: String,
    pub temperature_celsius: f64,
    /// Condition group as reported by the provider ("Clouds", "Rain", ...)
    pub condition_main: String,
    pub condition_description: String,
}

impl CurrentWeather {
    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::from_main(&self.condition_main)
    }
}

/// One forecast step
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastEntry {
    /// Epoch seconds
    pub timestamp: i64,
    pub temperature_celsius: f64,
    pub condition_main: String,
}

impl ForecastEntry {
    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::from_main(&self.condition_main)
    }
}

/// Result of one fetch cycle; the forecast is the provider's full list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub forecast: Vec<ForecastEntry>,
}

/// Where the location request stands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LocationStatus {
    #[default]
    Unknown,
    Requesting,
    Denied,
    Unavailable(String),
    Resolved(Coordinates),
}

impl LocationStatus {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationStatus::Resolved(coords) => Some(*coords),
            _ => None,
        }
    }
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn convert(&self, celsius: f64) -> f64 {
        match self {
            TempUnit::Celsius => celsius,
            TempUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Rounded display form, e.g. "29°"
    pub fn format(&self, celsius: f64) -> String {
        format!("{}°", round_half_up(self.convert(celsius)))
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Location", label = "Status", debug_fmt)]
    pub location: LocationStatus,

    /// Latest current conditions, replaced wholesale
    #[debug(section = "Weather", label = "Current", debug_fmt)]
    pub current: Option<CurrentWeather>,

    /// Decimated forecast, replaced together with `current`
    #[debug(section = "Weather", label = "Forecast", debug_fmt)]
    pub forecast: Vec<ForecastEntry>,

    #[debug(section = "Weather", label = "Fetching")]
    pub is_fetching: bool,

    /// Last failure, kept for the debug overlay only
    #[debug(section = "Weather", label = "Last error", debug_fmt)]
    pub last_error: Option<String>,

    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// Local wall-clock hour, 0-23
    #[debug(section = "Backdrop", label = "Hour")]
    pub local_hour: u8,

    #[debug(section = "Backdrop", label = "Fade", debug_fmt)]
    pub backdrop: Crossfade,

    /// First forecast entry shown in the strip
    #[debug(skip)]
    pub forecast_offset: usize,
}

impl AppState {
    pub fn new(local_hour: u8) -> Self {
        let mut state = Self {
            location: LocationStatus::Unknown,
            current: None,
            forecast: Vec::new(),
            is_fetching: false,
            last_error: None,
            unit: TempUnit::default(),
            local_hour: local_hour.min(23),
            backdrop: Crossfade::default(),
            forecast_offset: 0,
        };
        state.backdrop = Crossfade::new(state.desired_backdrop());
        state
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.coordinates()
    }

    pub fn category(&self) -> ConditionCategory {
        self.current
            .as_ref()
            .map(CurrentWeather::category)
            .unwrap_or(ConditionCategory::Unknown)
    }

    pub fn is_night(&self) -> bool {
        backdrop::is_night(self.local_hour)
    }

    /// Palette the current condition and hour call for.
    pub fn desired_backdrop(&self) -> Backdrop {
        backdrop::backdrop_for(self.category(), self.is_night())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(12)
    }
}
