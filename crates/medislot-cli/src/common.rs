//! Shared argument parsing helpers.

use chrono::NaiveTime;
use medislot_core::TimeInterval;

/// Parse an `HH:MM-HH:MM` interval argument.
pub fn parse_interval(raw: &str) -> Result<TimeInterval, String> {
    let (start_raw, end_raw) = raw
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got '{raw}'"))?;
    let start = parse_time(start_raw)?;
    let end = parse_time(end_raw)?;
    TimeInterval::new(start, end).ok_or_else(|| format!("interval '{raw}' ends at or before its start"))
}

/// Parse an `HH:MM` time argument.
pub fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|e| format!("invalid time '{raw}': {e}"))
}
