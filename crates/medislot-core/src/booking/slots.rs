//! Bookable slot derivation.
//!
//! Translates the provider's availability settings into concrete bookable
//! windows for a date range:
//! - a covering vacation window wipes the date entirely
//! - a date exception fully replaces the weekly template (no merging)
//! - remaining open intervals are tiled into fixed-length sessions separated
//!   by the policy buffer; trailing space shorter than one session is
//!   discarded
//!
//! Generation is a pure function of its inputs: the same settings, policy and
//! range always produce the same slots.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::policy::BookingPolicy;
use crate::availability::{AvailabilitySettings, TimeInterval};
use crate::error::EngineError;

/// Where a date's open intervals came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotSource {
    Template,
    Exception,
}

impl std::fmt::Display for SlotSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotSource::Template => write!(f, "template"),
            SlotSource::Exception => write!(f, "exception"),
        }
    }
}

/// A single bookable window of exactly one session length.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub date: NaiveDate,
    pub source: SlotSource,
    pub interval: TimeInterval,
}

impl Slot {
    pub fn start(&self) -> NaiveTime {
        self.interval.start
    }

    pub fn end(&self) -> NaiveTime {
        self.interval.end
    }
}

/// Derives bookable slots from availability settings and a booking policy.
pub struct SlotGenerator {
    policy: BookingPolicy,
}

impl SlotGenerator {
    pub fn new(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// A date's open intervals, sorted by start, each tagged with its source.
    ///
    /// Precedence: vacation wipes the date; otherwise an exception replaces
    /// the weekly template; otherwise the weekday's rule applies with breaks
    /// excluded. Malformed settings fail fast instead of producing wrong
    /// intervals.
    pub fn open_intervals_for(
        &self,
        settings: &AvailabilitySettings,
        date: NaiveDate,
    ) -> Result<Vec<(TimeInterval, SlotSource)>, EngineError> {
        if let Some(vacation) = &settings.vacation {
            vacation
                .validate()
                .map_err(EngineError::MalformedVacationWindow)?;
            if vacation.covers(date) {
                return Ok(Vec::new());
            }
        }

        if let Some(exception) = settings.exceptions.get(date) {
            exception
                .validate()
                .map_err(EngineError::MalformedException)?;
            if exception.full_day_block {
                return Ok(Vec::new());
            }
            let mut open: Vec<(TimeInterval, SlotSource)> = exception
                .custom_intervals
                .iter()
                .map(|iv| (*iv, SlotSource::Exception))
                .collect();
            open.sort_by_key(|(iv, _)| iv.start);
            return Ok(open);
        }

        settings
            .template
            .validate()
            .map_err(EngineError::MalformedTemplate)?;
        Ok(settings
            .template
            .day_rule(date.weekday())
            .open_intervals()
            .into_iter()
            .map(|iv| (iv, SlotSource::Template))
            .collect())
    }

    /// Generate every candidate slot for the inclusive date range, ordered by
    /// date, then by interval, then by start time.
    ///
    /// Occupancy is applied separately; see
    /// [`OccupancyIndex::bookable`](super::OccupancyIndex::bookable).
    pub fn generate(
        &self,
        settings: &AvailabilitySettings,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Vec<Slot>, EngineError> {
        self.policy.validate().map_err(EngineError::MalformedPolicy)?;

        let mut slots = Vec::new();
        let mut date = range_start;
        while date <= range_end {
            for (interval, source) in self.open_intervals_for(settings, date)? {
                self.tile_into(&mut slots, date, interval, source);
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        Ok(slots)
    }

    /// Tile one open interval into back-to-back session windows.
    ///
    /// For an interval of length L the slot count is floor((L + B) / (S + B))
    /// when L >= S, else zero; a trailing remainder shorter than one session
    /// is discarded, never rounded into a shorter slot.
    fn tile_into(
        &self,
        out: &mut Vec<Slot>,
        date: NaiveDate,
        interval: TimeInterval,
        source: SlotSource,
    ) {
        let session = self.policy.session_minutes as i64;
        let stride = self.policy.stride_minutes();
        let open_start = minutes_since_midnight(interval.start);
        let open_end = minutes_since_midnight(interval.end);

        let mut cursor = open_start;
        while cursor + session <= open_end {
            out.push(Slot {
                date,
                source,
                interval: TimeInterval {
                    start: time_at(cursor),
                    end: time_at(cursor + session),
                },
            });
            cursor += stride;
        }
    }
}

fn minutes_since_midnight(t: NaiveTime) -> i64 {
    t.signed_duration_since(NaiveTime::MIN).num_minutes()
}

// `m` stays within the day here (tiling never crosses the source interval's
// end), so the wrapping add cannot actually wrap.
fn time_at(m: i64) -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::minutes(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{DayInterval, DayRule, Exception, VacationWindow, WeeklyTemplate};
    use chrono::Weekday;
    use proptest::prelude::*;

    fn iv(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
        TimeInterval::from_hm(start_h, start_m, end_h, end_m).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2026-03-02 is a Monday.
    fn monday() -> NaiveDate {
        date(2026, 3, 2)
    }

    fn policy(session: u32, buffer: u32) -> BookingPolicy {
        BookingPolicy {
            session_minutes: session,
            buffer_minutes: buffer,
            ..Default::default()
        }
    }

    fn open_monday(template_interval: TimeInterval) -> AvailabilitySettings {
        let mut settings = AvailabilitySettings::new();
        settings
            .save_weekly_template(WeeklyTemplate::closed().with_day(
                Weekday::Mon,
                DayRule::open(vec![DayInterval::open(template_interval)]),
            ))
            .unwrap();
        settings
    }

    #[test]
    fn tiles_a_working_day() {
        let settings = open_monday(iv(9, 0, 17, 0));
        let generator = SlotGenerator::new(policy(60, 15));
        let slots = generator.generate(&settings, monday(), monday()).unwrap();

        let starts: Vec<String> = slots.iter().map(|s| s.start().format("%H:%M").to_string()).collect();
        assert_eq!(
            starts,
            vec!["09:00", "10:15", "11:30", "12:45", "14:00", "15:15"]
        );
        // Trailing 16:15-17:00 is too short for a session and is discarded.
        assert_eq!(slots.last().unwrap().interval, iv(15, 15, 16, 15));
        assert!(slots.iter().all(|s| s.source == SlotSource::Template));
    }

    #[test]
    fn session_equal_to_interval_yields_one_slot() {
        let settings = open_monday(iv(9, 0, 10, 0));
        let generator = SlotGenerator::new(policy(60, 15));
        let slots = generator.generate(&settings, monday(), monday()).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].interval, iv(9, 0, 10, 0));
    }

    #[test]
    fn interval_shorter_than_session_yields_nothing() {
        let settings = open_monday(iv(9, 0, 9, 45));
        let generator = SlotGenerator::new(policy(60, 15));
        assert!(generator.generate(&settings, monday(), monday()).unwrap().is_empty());
    }

    #[test]
    fn closed_day_yields_nothing() {
        let settings = open_monday(iv(9, 0, 17, 0));
        let generator = SlotGenerator::new(policy(60, 15));
        let tuesday = date(2026, 3, 3);
        assert!(generator.generate(&settings, tuesday, tuesday).unwrap().is_empty());
    }

    #[test]
    fn breaks_are_never_tiled() {
        let mut settings = AvailabilitySettings::new();
        settings
            .save_weekly_template(WeeklyTemplate::closed().with_day(
                Weekday::Mon,
                DayRule::open(vec![
                    DayInterval::open(iv(9, 0, 12, 0)),
                    DayInterval::rest(iv(12, 0, 13, 0)),
                    DayInterval::open(iv(13, 0, 15, 0)),
                ]),
            ))
            .unwrap();
        let generator = SlotGenerator::new(policy(60, 0));
        let slots = generator.generate(&settings, monday(), monday()).unwrap();
        assert_eq!(slots.len(), 3 + 2);
        assert!(slots.iter().all(|s| !s.interval.overlaps(&iv(12, 0, 13, 0))));
    }

    #[test]
    fn full_day_exception_wipes_the_date() {
        let mut settings = open_monday(iv(9, 0, 17, 0));
        settings
            .add_exception(Exception::block_day(monday(), "closed"), false)
            .unwrap();
        let generator = SlotGenerator::new(policy(60, 15));
        assert!(generator.generate(&settings, monday(), monday()).unwrap().is_empty());
    }

    #[test]
    fn exception_replaces_template_instead_of_merging() {
        let mut settings = open_monday(iv(8, 0, 17, 0));
        settings
            .add_exception(
                Exception::custom(monday(), "short day", vec![iv(9, 0, 10, 0)]),
                false,
            )
            .unwrap();
        let generator = SlotGenerator::new(policy(60, 15));
        let slots = generator.generate(&settings, monday(), monday()).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].interval, iv(9, 0, 10, 0));
        assert_eq!(slots[0].source, SlotSource::Exception);
    }

    #[test]
    fn vacation_dominates_template_and_exceptions() {
        let mut settings = open_monday(iv(9, 0, 17, 0));
        settings
            .add_exception(
                Exception::custom(monday(), "extra hours", vec![iv(8, 0, 20, 0)]),
                false,
            )
            .unwrap();
        settings
            .set_vacation(VacationWindow::new(date(2026, 3, 1), date(2026, 3, 31)))
            .unwrap();
        let generator = SlotGenerator::new(policy(60, 15));
        assert!(generator.generate(&settings, monday(), monday()).unwrap().is_empty());
    }

    #[test]
    fn generation_is_deterministic() {
        let mut settings = open_monday(iv(9, 0, 17, 0));
        settings
            .add_exception(
                Exception::custom(date(2026, 3, 3), "late", vec![iv(12, 0, 18, 0)]),
                false,
            )
            .unwrap();
        let generator = SlotGenerator::new(policy(50, 10));
        let first = generator.generate(&settings, monday(), date(2026, 3, 8)).unwrap();
        let second = generator.generate(&settings, monday(), date(2026, 3, 8)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_template_fails_fast() {
        // Bypass the save guard the way a legacy record would.
        let settings = AvailabilitySettings {
            template: WeeklyTemplate::closed().with_day(
                Weekday::Mon,
                DayRule::open(vec![
                    DayInterval::open(iv(9, 0, 12, 0)),
                    DayInterval::open(iv(11, 0, 13, 0)),
                ]),
            ),
            ..Default::default()
        };
        let generator = SlotGenerator::new(policy(60, 15));
        let err = generator.generate(&settings, monday(), monday()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedTemplate(_)));
    }

    #[test]
    fn malformed_vacation_fails_fast() {
        let settings = AvailabilitySettings {
            vacation: Some(VacationWindow::new(date(2026, 3, 31), date(2026, 3, 1))),
            ..Default::default()
        };
        let generator = SlotGenerator::new(policy(60, 15));
        let err = generator.generate(&settings, monday(), monday()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedVacationWindow(_)));
    }

    #[test]
    fn zero_session_policy_fails_fast() {
        let settings = open_monday(iv(9, 0, 17, 0));
        let generator = SlotGenerator::new(policy(0, 15));
        let err = generator.generate(&settings, monday(), monday()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedPolicy(_)));
    }

    #[test]
    fn multi_day_output_is_date_ordered() {
        let mut settings = open_monday(iv(9, 0, 11, 0));
        settings
            .add_exception(
                Exception::custom(date(2026, 3, 4), "extra", vec![iv(9, 0, 11, 0)]),
                false,
            )
            .unwrap();
        let generator = SlotGenerator::new(policy(60, 0));
        let slots = generator.generate(&settings, monday(), date(2026, 3, 8)).unwrap();
        let dates: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    proptest! {
        // floor((L + B) / (S + B)) slots when L >= S, else none.
        #[test]
        fn tiling_count_matches_closed_form(
            len in 1i64..720,
            session in 1u32..180,
            buffer in 0u32..60,
        ) {
            let start = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
            let open = TimeInterval::new(start, start + chrono::Duration::minutes(len)).unwrap();
            let settings = open_monday(open);
            let generator = SlotGenerator::new(policy(session, buffer));
            let slots = generator.generate(&settings, monday(), monday()).unwrap();

            let s = session as i64;
            let b = buffer as i64;
            let expected = if len >= s { (len + b) / (s + b) } else { 0 };
            prop_assert_eq!(slots.len() as i64, expected);
        }
    }
}
