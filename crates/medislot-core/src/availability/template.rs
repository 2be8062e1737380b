//! The provider's recurring weekly schedule.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::interval::{find_internal_overlap, TimeInterval};
use crate::error::SettingsError;

/// Weekdays in template order (Monday-first).
pub(crate) const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One interval of a weekday's recurring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInterval {
    pub interval: TimeInterval,
    /// Breaks stay in the template for display but are never bookable.
    #[serde(default)]
    pub is_break: bool,
}

impl DayInterval {
    pub fn open(interval: TimeInterval) -> Self {
        Self {
            interval,
            is_break: false,
        }
    }

    pub fn rest(interval: TimeInterval) -> Self {
        Self {
            interval,
            is_break: true,
        }
    }
}

/// A weekday's recurring availability.
///
/// Invariant (enforced on save): an unavailable day carries no intervals; an
/// available day carries at least one, pairwise non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRule {
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub intervals: Vec<DayInterval>,
}

impl DayRule {
    /// A day the provider does not work at all.
    pub fn closed() -> Self {
        Self::default()
    }

    /// A working day with the given intervals.
    pub fn open(intervals: Vec<DayInterval>) -> Self {
        Self {
            is_available: true,
            intervals,
        }
    }

    /// The day's bookable intervals, sorted by start. Breaks are excluded.
    pub fn open_intervals(&self) -> Vec<TimeInterval> {
        if !self.is_available {
            return Vec::new();
        }
        let mut open: Vec<TimeInterval> = self
            .intervals
            .iter()
            .filter(|di| !di.is_break)
            .map(|di| di.interval)
            .collect();
        open.sort_by_key(|iv| iv.start);
        open
    }

    fn all_intervals(&self) -> Vec<TimeInterval> {
        self.intervals.iter().map(|di| di.interval).collect()
    }
}

/// The recurring weekly schedule: one [`DayRule`] per weekday, all seven
/// always present. Read-only to the slot engine; mutated only through
/// [`AvailabilitySettings`](super::AvailabilitySettings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeeklyTemplate {
    /// Indexed Monday-first (`Weekday::num_days_from_monday`).
    days: [DayRule; 7],
}

impl WeeklyTemplate {
    /// A template with every weekday closed.
    pub fn closed() -> Self {
        Self::default()
    }

    fn index(weekday: Weekday) -> usize {
        weekday.num_days_from_monday() as usize
    }

    pub fn day_rule(&self, weekday: Weekday) -> &DayRule {
        &self.days[Self::index(weekday)]
    }

    /// Replace one weekday's rule. No validation here; whole-template
    /// validation runs when the template is saved.
    pub fn set_day(&mut self, weekday: Weekday, rule: DayRule) {
        self.days[Self::index(weekday)] = rule;
    }

    /// Builder-style [`set_day`](Self::set_day).
    pub fn with_day(mut self, weekday: Weekday, rule: DayRule) -> Self {
        self.set_day(weekday, rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayRule)> {
        WEEKDAYS.iter().copied().zip(self.days.iter())
    }

    /// Check every weekday against the day-rule invariants.
    ///
    /// The first violation wins and identifies the weekday and, for
    /// overlaps, the colliding interval pair.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (weekday, rule) in self.iter() {
            if !rule.is_available {
                if !rule.intervals.is_empty() {
                    return Err(SettingsError::UnavailableDayWithIntervals { weekday });
                }
                continue;
            }
            if rule.intervals.is_empty() {
                return Err(SettingsError::EmptyAvailableDay { weekday });
            }
            for di in &rule.intervals {
                if di.interval.is_empty() {
                    return Err(SettingsError::EmptyInterval {
                        interval: di.interval,
                    });
                }
            }
            if let Some((first, second)) = find_internal_overlap(&rule.all_intervals()) {
                return Err(SettingsError::TemplateOverlap {
                    weekday,
                    first,
                    second,
                });
            }
        }
        Ok(())
    }

    /// Sort each day's intervals by start so persisted templates are ordered.
    pub(crate) fn normalize(&mut self) {
        for rule in &mut self.days {
            rule.intervals.sort_by_key(|di| di.interval.start);
        }
    }
}
