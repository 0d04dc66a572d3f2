//! Coarse weather condition categories and their iconography

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weather condition categories, keyed off OpenWeather's `weather[].main`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Unknown,
}

impl ConditionCategory {
    pub const ALL: [ConditionCategory; 7] = [
        ConditionCategory::Clear,
        ConditionCategory::Clouds,
        ConditionCategory::Rain,
        ConditionCategory::Drizzle,
        ConditionCategory::Thunderstorm,
        ConditionCategory::Snow,
        ConditionCategory::Unknown,
    ];

    /// Map a provider condition group ("Clouds", "Rain", ...) to a category.
    ///
    /// Atmosphere groups (Mist, Haze, Fog, ...) and anything unrecognised fall
    /// back to `Unknown`.
    pub fn from_main(main: &str) -> Self {
        match main.trim().to_ascii_lowercase().as_str() {
            "clear" => ConditionCategory::Clear,
            "clouds" => ConditionCategory::Clouds,
            "rain" => ConditionCategory::Rain,
            "drizzle" => ConditionCategory::Drizzle,
            "thunderstorm" => ConditionCategory::Thunderstorm,
            "snow" => ConditionCategory::Snow,
            _ => ConditionCategory::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ConditionCategory::Clear => "\u{2600}\u{fe0f}",
            ConditionCategory::Clouds | ConditionCategory::Unknown => "\u{2601}\u{fe0f}",
            ConditionCategory::Drizzle => "\u{1f326}\u{fe0f}",
            ConditionCategory::Rain => "\u{1f327}\u{fe0f}",
            ConditionCategory::Snow => "\u{2744}\u{fe0f}",
            ConditionCategory::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}
