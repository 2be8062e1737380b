//! Time intervals and overlap detection.
//!
//! The shared primitive behind both the settings guards (reject a template
//! whose intervals collide) and booking validation (reject a request that
//! collides with existing appointments).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A minute-granularity wall-clock range within one calendar day.
///
/// `start` is inclusive, `end` exclusive. [`TimeInterval::new`] enforces
/// `start < end`; deserialized values are re-checked by the settings guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeInterval {
    /// Create an interval, or `None` if it would be empty or inverted.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Build from hour/minute pairs. Convenience for fixtures and parsing.
    pub fn from_hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Option<Self> {
        let start = NaiveTime::from_hms_opt(start_h, start_m, 0)?;
        let end = NaiveTime::from_hms_opt(end_h, end_m, 0)?;
        Self::new(start, end)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open overlap test: touching endpoints do not conflict.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if `other` lies entirely within this interval.
    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True for a degenerate or inverted interval (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Find the first pair of overlapping intervals.
///
/// Sorts by start and scans adjacent pairs, so the earliest collision is the
/// one reported. Returns the colliding intervals by value for error messages.
pub fn find_internal_overlap(intervals: &[TimeInterval]) -> Option<(TimeInterval, TimeInterval)> {
    let mut sorted: Vec<TimeInterval> = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.start);
    sorted
        .windows(2)
        .find(|pair| pair[0].overlaps(&pair[1]))
        .map(|pair| (pair[0], pair[1]))
}

/// True if any two intervals in the slice overlap.
pub fn has_internal_overlap(intervals: &[TimeInterval]) -> bool {
    find_internal_overlap(intervals).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval::from_hm(start_h, start_m, end_h, end_m).unwrap()
    }

    #[test]
    fn rejects_inverted_and_empty() {
        assert!(TimeInterval::from_hm(10, 0, 9, 0).is_none());
        assert!(TimeInterval::from_hm(10, 0, 10, 0).is_none());
    }

    #[test]
    fn overlap_is_half_open() {
        let morning = iv(9, 0, 12, 0);
        assert!(morning.overlaps(&iv(11, 0, 13, 0)));
        assert!(morning.overlaps(&iv(10, 0, 11, 0)));
        // Touching endpoints do not conflict
        assert!(!morning.overlaps(&iv(12, 0, 13, 0)));
        assert!(!morning.overlaps(&iv(8, 0, 9, 0)));
    }

    #[test]
    fn containment() {
        let day = iv(8, 0, 17, 0);
        assert!(day.contains(&iv(8, 0, 17, 0)));
        assert!(day.contains(&iv(10, 15, 11, 15)));
        assert!(!day.contains(&iv(7, 30, 8, 30)));
        assert!(!day.contains(&iv(16, 30, 17, 30)));
    }

    #[test]
    fn finds_overlap_in_unsorted_input() {
        let intervals = vec![iv(14, 0, 16, 0), iv(9, 0, 10, 0), iv(15, 30, 17, 0)];
        let (first, second) = find_internal_overlap(&intervals).unwrap();
        assert_eq!(first, iv(14, 0, 16, 0));
        assert_eq!(second, iv(15, 30, 17, 0));
    }

    #[test]
    fn back_to_back_is_not_an_overlap() {
        let intervals = vec![iv(9, 0, 12, 0), iv(12, 0, 17, 0)];
        assert!(!has_internal_overlap(&intervals));
    }

    #[test]
    fn display_is_hh_mm() {
        assert_eq!(iv(9, 5, 16, 30).to_string(), "09:05-16:30");
    }

    prop_compose! {
        fn arb_interval()(start in 0i64..1380, len in 1i64..120) -> TimeInterval {
            let base = NaiveTime::MIN + chrono::Duration::minutes(start);
            let end = base + chrono::Duration::minutes(len.min(1439 - start).max(1));
            TimeInterval::new(base, end).unwrap()
        }
    }

    proptest! {
        // The sorted adjacent-pair scan must agree with the quadratic check.
        #[test]
        fn scan_matches_pairwise_check(intervals in prop::collection::vec(arb_interval(), 0..8)) {
            let pairwise = intervals.iter().enumerate().any(|(i, a)| {
                intervals.iter().skip(i + 1).any(|b| a.overlaps(b))
            });
            prop_assert_eq!(has_internal_overlap(&intervals), pairwise);
        }
    }
}
