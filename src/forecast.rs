//! Forecast shaping: daily decimation, weekday labels, display rounding

use chrono::{DateTime, TimeZone};

/// Source forecasts come in 3-hour steps; eight of them span one day.
pub const DECIMATION_STEP: usize = 8;

/// Keep every [`DECIMATION_STEP`]th entry starting at index 0.
///
/// This is a positional sample and does not align to calendar days.
pub fn decimate<T: Clone>(entries: &[T]) -> Vec<T> {
    entries.iter().step_by(DECIMATION_STEP).cloned().collect()
}

/// Full English weekday name ("Monday") for an epoch timestamp in `tz`.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn weekday_label<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(tz).format("%A").to_string())
}

/// Round half up, so -2.5 becomes -2 and 2.5 becomes 3.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
