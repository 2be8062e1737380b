//! Slot derivation and booking validation.
//!
//! The pure half of the booking pipeline: settings and policy go in, a
//! conflict-free bookable slot list and per-request verdicts come out.
//! Nothing here mutates settings or appointments.

mod occupancy;
mod policy;
mod slots;
mod validator;

pub use occupancy::{Appointment, AppointmentStatus, OccupancyIndex, OccupiedInterval};
pub use policy::BookingPolicy;
pub use slots::{Slot, SlotGenerator, SlotSource};
pub use validator::{BookingRequest, BookingValidator, RejectionReason, Verdict};
