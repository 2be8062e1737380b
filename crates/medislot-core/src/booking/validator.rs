//! Booking request validation.
//!
//! A request passes through a fixed sequence of checks; the first failure
//! wins, so the caller always gets the most fundamental reason. Rejections
//! are expected business outcomes and are returned as data, never as errors;
//! each kind maps to a different next step (pick another time, retry, wait).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::occupancy::OccupancyIndex;
use super::policy::BookingPolicy;
use super::slots::SlotGenerator;
use crate::availability::{AvailabilitySettings, TimeInterval};
use crate::error::EngineError;

/// A requested booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub interval: TimeInterval,
}

/// Why a booking request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The date lies outside the advance-booking window.
    OutOfWindow,
    /// The provider is away on the requested date.
    Vacation,
    /// The requested duration does not match the session length.
    DurationMismatch {
        expected_minutes: u32,
        actual_minutes: i64,
    },
    /// The requested time is not within the provider's open hours.
    OutsideAvailability,
    /// The time collides with an existing appointment.
    Conflict,
    /// The daily appointment cap for the date is already reached.
    CapacityReached,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::OutOfWindow => {
                write!(f, "this date is outside the booking window; pick a nearer date")
            }
            RejectionReason::Vacation => {
                write!(f, "the provider is away on the requested date")
            }
            RejectionReason::DurationMismatch {
                expected_minutes,
                actual_minutes,
            } => write!(
                f,
                "sessions are {expected_minutes} minutes, the request spans {actual_minutes}"
            ),
            RejectionReason::OutsideAvailability => {
                write!(f, "this time is outside the provider's availability")
            }
            RejectionReason::Conflict => {
                write!(f, "this slot was just booked by someone else; pick another time")
            }
            RejectionReason::CapacityReached => {
                write!(f, "the provider is fully booked on this date")
            }
        }
    }
}

/// Outcome of validating a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Validates booking requests against settings, policy and occupancy.
///
/// Stateless and side-effect-free: `today` is an explicit input, so the same
/// arguments always yield the same verdict. The caller performing the insert
/// is expected to re-run [`validate`](Self::validate) against fresh occupancy
/// inside the same transaction or lock; a failing re-check yields a
/// [`RejectionReason::Conflict`] verdict, never a crash.
pub struct BookingValidator {
    policy: BookingPolicy,
    today: NaiveDate,
}

impl BookingValidator {
    pub fn new(policy: BookingPolicy, today: NaiveDate) -> Self {
        Self { policy, today }
    }

    pub fn validate(
        &self,
        request: &BookingRequest,
        settings: &AvailabilitySettings,
        occupancy: &OccupancyIndex,
    ) -> Result<Verdict, EngineError> {
        self.policy.validate().map_err(EngineError::MalformedPolicy)?;

        // 1. Advance-booking window.
        let beyond_horizon = match self
            .today
            .checked_add_days(Days::new(self.policy.advance_booking_days as u64))
        {
            Some(horizon) => request.date > horizon,
            None => false,
        };
        if request.date < self.today || beyond_horizon {
            return Ok(Verdict::Rejected(RejectionReason::OutOfWindow));
        }

        // 2. Vacation.
        if let Some(vacation) = &settings.vacation {
            vacation
                .validate()
                .map_err(EngineError::MalformedVacationWindow)?;
            if vacation.covers(request.date) {
                return Ok(Verdict::Rejected(RejectionReason::Vacation));
            }
        }

        // 3. Session duration.
        let actual_minutes = request.interval.duration_minutes();
        if actual_minutes != self.policy.session_minutes as i64 {
            return Ok(Verdict::Rejected(RejectionReason::DurationMismatch {
                expected_minutes: self.policy.session_minutes,
                actual_minutes,
            }));
        }

        // 4. Entirely within one open interval for the date.
        let generator = SlotGenerator::new(self.policy);
        let open = generator.open_intervals_for(settings, request.date)?;
        if !open.iter().any(|(iv, _)| iv.contains(&request.interval)) {
            return Ok(Verdict::Rejected(RejectionReason::OutsideAvailability));
        }

        // 5. No collision with occupied time.
        if occupancy.conflicts_with(request.date, &request.interval) {
            return Ok(Verdict::Rejected(RejectionReason::Conflict));
        }

        // 6. Daily cap.
        if occupancy.count_on(request.date) >= self.policy.max_daily_appointments as usize {
            return Ok(Verdict::Rejected(RejectionReason::CapacityReached));
        }

        Ok(Verdict::Accepted)
    }
}
