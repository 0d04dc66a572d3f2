//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the location provider for permission and a position fix
    RequestLocation,
    /// Fetch current conditions and forecast for the given coordinates
    FetchWeather { lat: f64, lon: f64 },
}
