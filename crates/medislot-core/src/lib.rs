//! # Medislot Core Library
//!
//! Core booking-slot engine for the medislot practice tools: translates a
//! provider's recurring weekly schedule, date exceptions, vacation window and
//! booking policy into a concrete, conflict-free set of bookable windows, and
//! validates incoming booking requests against that derived state.
//!
//! ## Architecture
//!
//! - **Availability**: the provider-owned settings (weekly template, date
//!   exceptions, vacation window) plus the mutation guards that keep interval
//!   sets well-formed on every write
//! - **Booking**: the pure derivation pipeline -- slot generation, occupancy
//!   filtering and request validation. No hidden state: callers fetch the
//!   current settings and pass them in, so identical inputs always produce
//!   identical output and concurrent calls need no synchronization
//!
//! ## Key Components
//!
//! - [`WeeklyTemplate`] / [`ExceptionSet`] / [`VacationWindow`]: availability inputs
//! - [`SlotGenerator`]: settings -> ordered candidate slots
//! - [`OccupancyIndex`]: already-booked time; removes taken and capped slots
//! - [`BookingValidator`]: accepts or rejects a request with a typed reason

pub mod availability;
pub mod booking;
pub mod error;

pub use availability::{
    AvailabilitySettings, DayInterval, DayRule, Exception, ExceptionSet, TimeInterval,
    VacationWindow, WeeklyTemplate,
};
pub use booking::{
    Appointment, AppointmentStatus, BookingPolicy, BookingRequest, BookingValidator,
    OccupancyIndex, OccupiedInterval, RejectionReason, Slot, SlotGenerator, SlotSource, Verdict,
};
pub use error::{CoreError, EngineError, Result, SettingsError};
