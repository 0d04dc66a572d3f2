//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::forecast::decimate;
use crate::state::{AppState, LocationStatus};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location actions =====
        Action::LocationRequest => {
            // One fix per run; a denial is final
            if state.location != LocationStatus::Unknown {
                return DispatchResult::unchanged();
            }
            state.location = LocationStatus::Requesting;
            DispatchResult::changed_with(Effect::RequestLocation)
        }

        Action::LocationDidResolve(coords) => {
            state.location = LocationStatus::Resolved(coords);
            state.is_fetching = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                lat: coords.lat,
                lon: coords.lon,
            })
        }

        Action::LocationDidDeny => {
            state.location = LocationStatus::Denied;
            DispatchResult::changed()
        }

        Action::LocationDidError(msg) => {
            state.location = LocationStatus::Unavailable(msg.clone());
            state.last_error = Some(msg);
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            let Some(coords) = state.coordinates() else {
                return DispatchResult::unchanged();
            };
            state.is_fetching = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                lat: coords.lat,
                lon: coords.lon,
            })
        }

        Action::WeatherDidLoad(report) => {
            state.current = Some(report.current);
            state.forecast = decimate(&report.forecast);
            state.forecast_offset = 0;
            state.is_fetching = false;
            state.last_error = None;
            let target = state.desired_backdrop();
            state.backdrop.retarget(target);
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            state.is_fetching = false;
            state.last_error = Some(msg);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.unit = state.unit.toggle();
            DispatchResult::changed()
        }

        Action::UiForecastPrev => {
            if state.forecast_offset == 0 {
                return DispatchResult::unchanged();
            }
            state.forecast_offset -= 1;
            DispatchResult::changed()
        }

        Action::UiForecastNext => {
            if state.forecast_offset + 1 >= state.forecast.len() {
                return DispatchResult::unchanged();
            }
            state.forecast_offset += 1;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::ClockSync(hour) => {
            let hour = hour.min(23);
            if hour == state.local_hour {
                return DispatchResult::unchanged();
            }
            state.local_hour = hour;
            let target = state.desired_backdrop();
            state.backdrop.retarget(target);
            DispatchResult::changed()
        }

        Action::Tick => {
            if !state.backdrop.is_fading() {
                return DispatchResult::unchanged();
            }
            state.backdrop.advance();
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backdrop::{backdrop_for, FADE_TICKS, NIGHT};
    use crate::condition::ConditionCategory;
    use crate::state::{Coordinates, CurrentWeather, ForecastEntry, WeatherReport};

    fn report(main: &str, forecast_len: usize) -> WeatherReport {
        WeatherReport {
            current: CurrentWeather {
                location_name: "Accra".into(),
                temperature_celsius: 29.4,
                condition_main: main.into(),
                condition_description: "scattered clouds".into(),
            },
            forecast: (0..forecast_len)
                .map(|i| ForecastEntry {
                    timestamp: 1_704_067_200 + i as i64 * 10_800,
                    temperature_celsius: 20.0 + i as f64,
                    condition_main: main.into(),
                })
                .collect(),
        }
    }

    fn resolved_state() -> AppState {
        AppState {
            location: LocationStatus::Resolved(Coordinates { lat: 5.6, lon: -0.2 }),
            ..Default::default()
        }
    }

    #[test]
    fn test_location_request_emits_effect_once() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LocationRequest);
        assert!(result.changed);
        assert_eq!(state.location, LocationStatus::Requesting);
        assert_eq!(result.effects, vec![Effect::RequestLocation]);

        let result = reducer(&mut state, Action::LocationRequest);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_location_resolve_starts_fetch() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationRequest);

        let coords = Coordinates { lat: 5.6, lon: -0.2 };
        let result = reducer(&mut state, Action::LocationDidResolve(coords));

        assert!(result.changed);
        assert!(state.is_fetching);
        assert_eq!(state.coordinates(), Some(coords));
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather { lat: 5.6, lon: -0.2 }]
        );
    }

    #[test]
    fn test_denied_location_never_fetches() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationRequest);
        reducer(&mut state, Action::LocationDidDeny);

        assert_eq!(state.location, LocationStatus::Denied);

        // Neither a refresh nor a second request gets anywhere
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        let result = reducer(&mut state, Action::LocationRequest);
        assert!(result.effects.is_empty());

        assert!(state.current.is_none());
        assert!(state.forecast.is_empty());
    }

    #[test]
    fn test_location_error_is_kept_for_debugging() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LocationDidError("no fix".into()));

        assert_eq!(
            state.location,
            LocationStatus::Unavailable("no fix".into())
        );
        assert_eq!(state.last_error.as_deref(), Some("no fix"));
        assert!(state.current.is_none());
    }

    #[test]
    fn test_weather_did_load_replaces_and_decimates() {
        let mut state = resolved_state();
        state.is_fetching = true;

        let result = reducer(&mut state, Action::WeatherDidLoad(report("Clouds", 40)));

        assert!(result.changed);
        assert!(!state.is_fetching);
        assert_eq!(state.current.as_ref().unwrap().location_name, "Accra");
        assert_eq!(state.forecast.len(), 5);
        let stamps: Vec<_> = state.forecast.iter().map(|f| f.timestamp).collect();
        let expected: Vec<_> = (0..5).map(|i| 1_704_067_200 + i * 8 * 10_800).collect();
        assert_eq!(stamps, expected);
    }

    #[test]
    fn test_weather_error_preserves_prior_state() {
        let mut state = resolved_state();
        reducer(&mut state, Action::WeatherDidLoad(report("Rain", 16)));
        let before_current = state.current.clone();
        let before_forecast = state.forecast.clone();

        reducer(&mut state, Action::WeatherFetch);
        let result = reducer(&mut state, Action::WeatherDidError("timeout".into()));

        assert!(result.changed);
        assert!(!state.is_fetching);
        assert_eq!(state.current, before_current);
        assert_eq!(state.forecast, before_forecast);
        assert_eq!(state.last_error.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_weather_error_on_empty_state_stays_empty() {
        let mut state = resolved_state();
        reducer(&mut state, Action::WeatherDidError("boom".into()));
        assert!(state.current.is_none());
        assert!(state.forecast.is_empty());
    }

    #[test]
    fn test_weather_fetch_uses_known_coordinates() {
        let mut state = resolved_state();
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(state.is_fetching);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather { lat: 5.6, lon: -0.2 }]
        );
    }

    #[test]
    fn test_load_stages_backdrop_fade() {
        let mut state = resolved_state();
        state.local_hour = 14;

        reducer(&mut state, Action::WeatherDidLoad(report("Clouds", 8)));

        let clouds = backdrop_for(ConditionCategory::Clouds, false);
        assert_eq!(state.backdrop.staged, Some(clouds));
        assert_eq!(state.backdrop.target(), clouds);

        for _ in 0..FADE_TICKS {
            assert!(reducer(&mut state, Action::Tick).changed);
        }
        assert_eq!(state.backdrop.committed, clouds);
        assert!(!reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn test_clock_sync_switches_to_night() {
        let mut state = AppState::new(17);
        assert!(reducer(&mut state, Action::ClockSync(18)).changed);
        assert_eq!(state.backdrop.target(), NIGHT);

        // Same hour again is a no-op
        assert!(!reducer(&mut state, Action::ClockSync(18)).changed);
    }

    #[test]
    fn test_forecast_scroll_is_clamped() {
        let mut state = resolved_state();
        reducer(&mut state, Action::WeatherDidLoad(report("Clear", 17)));
        assert_eq!(state.forecast.len(), 3);

        assert!(!reducer(&mut state, Action::UiForecastPrev).changed);
        assert!(reducer(&mut state, Action::UiForecastNext).changed);
        assert!(reducer(&mut state, Action::UiForecastNext).changed);
        assert!(!reducer(&mut state, Action::UiForecastNext).changed);
        assert_eq!(state.forecast_offset, 2);

        // A fresh load resets the strip
        reducer(&mut state, Action::WeatherDidLoad(report("Clear", 17)));
        assert_eq!(state.forecast_offset, 0);
    }

    #[test]
    fn test_toggle_units() {
        let mut state = AppState::default();
        assert_eq!(state.unit, crate::state::TempUnit::Celsius);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, crate::state::TempUnit::Fahrenheit);

        reducer(&mut state, Action::UiToggleUnits);
        assert_eq!(state.unit, crate::state::TempUnit::Celsius);
    }
}
