//! Vacation windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// A contiguous date range during which the provider accepts no bookings.
///
/// While a date is covered, the window overrides the weekly template and any
/// exception for that date: zero slots are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Optional away message surfaced to booking callers.
    #[serde(default)]
    pub message: Option<String>,
}

impl VacationWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.start > self.end {
            return Err(SettingsError::InvalidVacationWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// True if `date` falls inside the window, bounds inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True while the window covers today; used to surface the away message.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.covers(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let window = VacationWindow::new(date(2026, 7, 1), date(2026, 7, 14));
        assert!(window.covers(date(2026, 7, 1)));
        assert!(window.covers(date(2026, 7, 14)));
        assert!(!window.covers(date(2026, 6, 30)));
        assert!(!window.covers(date(2026, 7, 15)));
    }

    #[test]
    fn single_day_window() {
        let window = VacationWindow::new(date(2026, 7, 1), date(2026, 7, 1));
        assert!(window.validate().is_ok());
        assert!(window.covers(date(2026, 7, 1)));
    }

    #[test]
    fn inverted_window_is_rejected() {
        let window = VacationWindow::new(date(2026, 7, 14), date(2026, 7, 1));
        assert_eq!(
            window.validate(),
            Err(SettingsError::InvalidVacationWindow {
                start: date(2026, 7, 14),
                end: date(2026, 7, 1),
            })
        );
    }
}
