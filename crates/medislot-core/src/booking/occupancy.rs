//! Appointments and the occupancy index.
//!
//! Appointments are owned by the surrounding appointment lifecycle; this
//! module only reads them. The [`OccupancyIndex`] is the engine's view of
//! already-consumed time: it removes taken slots and enforces the daily cap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::policy::BookingPolicy;
use super::slots::Slot;
use crate::availability::TimeInterval;

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    /// Cancelled appointments stop occupying time.
    pub fn occupies(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

/// A booked appointment for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub status: AppointmentStatus,
    /// Patient name or reference.
    #[serde(default)]
    pub patient: String,
    pub interval: TimeInterval,
}

impl Appointment {
    /// Create a newly scheduled appointment.
    pub fn new(date: NaiveDate, interval: TimeInterval, patient: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            status: AppointmentStatus::Scheduled,
            patient: patient.into(),
            interval,
        }
    }

    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
    }
}

/// A time range already consumed by a non-cancelled appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedInterval {
    pub date: NaiveDate,
    pub interval: TimeInterval,
}

/// Per-date index of occupied time for one provider.
///
/// Built fresh from the caller's appointment data before each query; the
/// engine never mutates the underlying appointments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyIndex {
    by_date: BTreeMap<NaiveDate, Vec<TimeInterval>>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every appointment that still occupies time.
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut index = Self::new();
        for appointment in appointments.iter().filter(|a| a.status.occupies()) {
            index.insert(appointment.date, appointment.interval);
        }
        index
    }

    pub fn from_intervals(intervals: impl IntoIterator<Item = OccupiedInterval>) -> Self {
        let mut index = Self::new();
        for occupied in intervals {
            index.insert(occupied.date, occupied.interval);
        }
        index
    }

    pub fn insert(&mut self, date: NaiveDate, interval: TimeInterval) {
        let day = self.by_date.entry(date).or_default();
        day.push(interval);
        day.sort_by_key(|iv| iv.start);
    }

    /// Occupied intervals on `date`, sorted by start.
    pub fn occupied_on(&self, date: NaiveDate) -> &[TimeInterval] {
        self.by_date.get(&date).map_or(&[], |day| day.as_slice())
    }

    /// Number of occupying appointments on `date`.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.by_date.get(&date).map_or(0, |day| day.len())
    }

    /// True if `interval` collides with any occupied time on `date`.
    pub fn conflicts_with(&self, date: NaiveDate, interval: &TimeInterval) -> bool {
        self.occupied_on(date).iter().any(|o| o.overlaps(interval))
    }

    /// Remove taken and capped slots from a generated candidate list.
    ///
    /// Overlap removal runs before the capacity cap so an overlap conflict is
    /// never masked by a cap that has not been reached yet.
    pub fn bookable(&self, slots: Vec<Slot>, policy: &BookingPolicy) -> Vec<Slot> {
        slots
            .into_iter()
            .filter(|slot| !self.conflicts_with(slot.date, &slot.interval))
            .filter(|slot| self.count_on(slot.date) < policy.max_daily_appointments as usize)
            .collect()
    }
}
