//! Core error types for medislot-core.
//!
//! Business rejections of a booking request are not errors -- see
//! [`RejectionReason`](crate::booking::RejectionReason). The types here cover
//! rejected settings writes and malformed data reaching the slot engine.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::availability::TimeInterval;

/// Core error type for medislot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A settings write was rejected by the mutation guards
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Malformed data reached the slot engine
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// A rejected settings write.
///
/// The offending intervals are carried by value so the caller can surface
/// exactly which pair collides. Nothing is persisted when one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Two intervals on the same weekday overlap
    #[error("{weekday}: intervals {first} and {second} overlap")]
    TemplateOverlap {
        weekday: Weekday,
        first: TimeInterval,
        second: TimeInterval,
    },

    /// A weekday is marked available but carries no intervals
    #[error("{weekday} is marked available but has no intervals")]
    EmptyAvailableDay { weekday: Weekday },

    /// A weekday is marked unavailable but still carries intervals
    #[error("{weekday} is marked unavailable but still has intervals")]
    UnavailableDayWithIntervals { weekday: Weekday },

    /// An interval ends at or before its own start
    #[error("interval {interval} ends at or before its start")]
    EmptyInterval { interval: TimeInterval },

    /// Two custom intervals on the same exception date overlap
    #[error("exception for {date}: intervals {first} and {second} overlap")]
    ExceptionOverlap {
        date: NaiveDate,
        first: TimeInterval,
        second: TimeInterval,
    },

    /// An exception must either block the whole day or provide custom hours
    #[error("exception for {date} must either block the whole day or provide custom intervals")]
    AmbiguousException { date: NaiveDate },

    /// A same-date exception already exists and replacement was not requested
    #[error("an exception for {date} already exists; request replacement to overwrite it")]
    DuplicateException { date: NaiveDate },

    /// A vacation window that ends before it starts
    #[error("vacation window ends {end} before it starts {start}")]
    InvalidVacationWindow { start: NaiveDate, end: NaiveDate },

    /// A booking-policy scalar outside its allowed range
    #[error("invalid booking policy: {field} {message}")]
    InvalidPolicyValue {
        field: &'static str,
        message: String,
    },
}

/// Malformed data reaching the slot engine unguarded.
///
/// Settings written through the mutation guards never trigger these; legacy
/// or hand-edited records fail fast here instead of producing wrong slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("malformed weekly template: {0}")]
    MalformedTemplate(#[source] SettingsError),

    #[error("malformed exception: {0}")]
    MalformedException(#[source] SettingsError),

    #[error("malformed vacation window: {0}")]
    MalformedVacationWindow(#[source] SettingsError),

    #[error("malformed booking policy: {0}")]
    MalformedPolicy(#[source] SettingsError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn umbrella_wraps_both_families() {
        let settings: CoreError = SettingsError::EmptyAvailableDay {
            weekday: Weekday::Mon,
        }
        .into();
        assert!(matches!(settings, CoreError::Settings(_)));

        let engine: CoreError = EngineError::MalformedTemplate(SettingsError::EmptyAvailableDay {
            weekday: Weekday::Mon,
        })
        .into();
        assert!(engine.to_string().contains("malformed weekly template"));
    }
}
