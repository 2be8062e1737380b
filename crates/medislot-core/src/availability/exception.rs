//! Date-specific availability overrides.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::interval::{find_internal_overlap, TimeInterval};
use crate::error::SettingsError;

/// A date-specific override.
///
/// An exception fully replaces the weekly template for its date: either the
/// whole day is blocked, or `custom_intervals` become the day's open hours.
/// It never merges with the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    pub date: NaiveDate,
    /// Shown to staff, e.g. "conference" or "afternoon off".
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub full_day_block: bool,
    /// Replacement open intervals; meaningful only when `full_day_block` is
    /// false.
    #[serde(default)]
    pub custom_intervals: Vec<TimeInterval>,
}

impl Exception {
    /// Block the entire date.
    pub fn block_day(date: NaiveDate, reason: impl Into<String>) -> Self {
        Self {
            date,
            reason: reason.into(),
            full_day_block: true,
            custom_intervals: Vec::new(),
        }
    }

    /// Replace the date's open hours with `intervals`.
    pub fn custom(
        date: NaiveDate,
        reason: impl Into<String>,
        intervals: Vec<TimeInterval>,
    ) -> Self {
        Self {
            date,
            reason: reason.into(),
            full_day_block: false,
            custom_intervals: intervals,
        }
    }

    /// Exactly one of full-day block or non-empty custom intervals must be
    /// set, and custom intervals obey the same non-overlap rule as day rules.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.full_day_block {
            if !self.custom_intervals.is_empty() {
                return Err(SettingsError::AmbiguousException { date: self.date });
            }
            return Ok(());
        }
        if self.custom_intervals.is_empty() {
            return Err(SettingsError::AmbiguousException { date: self.date });
        }
        for iv in &self.custom_intervals {
            if iv.is_empty() {
                return Err(SettingsError::EmptyInterval { interval: *iv });
            }
        }
        if let Some((first, second)) = find_internal_overlap(&self.custom_intervals) {
            return Err(SettingsError::ExceptionOverlap {
                date: self.date,
                first,
                second,
            });
        }
        Ok(())
    }

    pub(crate) fn normalize(&mut self) {
        self.custom_intervals.sort_by_key(|iv| iv.start);
    }
}

/// All exceptions for a provider, keyed by date. At most one per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionSet {
    by_date: BTreeMap<NaiveDate, Exception>,
}

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Exception> {
        self.by_date.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Exceptions in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Exception> {
        self.by_date.values()
    }

    /// Insert without guarding; settings writes go through
    /// [`AvailabilitySettings::add_exception`](super::AvailabilitySettings::add_exception).
    pub(crate) fn insert(&mut self, exception: Exception) {
        self.by_date.insert(exception.date, exception);
    }

    pub(crate) fn remove(&mut self, date: NaiveDate) -> Option<Exception> {
        self.by_date.remove(&date)
    }
}
