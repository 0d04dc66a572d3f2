pub mod backdrop_layer;
pub mod current_conditions;
pub mod forecast_strip;
pub mod weather_screen;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use backdrop_layer::{BackdropLayer, BackdropLayerProps};
pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use forecast_strip::{ForecastStrip, ForecastStripProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps, PLACEHOLDER};
