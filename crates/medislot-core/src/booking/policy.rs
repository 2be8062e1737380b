//! Booking policy scalars.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Scalar booking parameters for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPolicy {
    /// Length of one session in minutes.
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    /// Idle time inserted after each session before the next can start.
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: u32,
    /// Confirmed appointments allowed per date, regardless of open time.
    #[serde(default = "default_max_daily_appointments")]
    pub max_daily_appointments: u32,
    /// How far ahead of today a booking may be placed, in days.
    #[serde(default = "default_advance_booking_days")]
    pub advance_booking_days: u32,
}

fn default_session_minutes() -> u32 {
    50
}
fn default_buffer_minutes() -> u32 {
    10
}
fn default_max_daily_appointments() -> u32 {
    8
}
fn default_advance_booking_days() -> u32 {
    30
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            session_minutes: default_session_minutes(),
            buffer_minutes: default_buffer_minutes(),
            max_daily_appointments: default_max_daily_appointments(),
            advance_booking_days: default_advance_booking_days(),
        }
    }
}

impl BookingPolicy {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.session_minutes == 0 {
            return Err(SettingsError::InvalidPolicyValue {
                field: "session_minutes",
                message: "must be greater than zero".into(),
            });
        }
        if self.max_daily_appointments == 0 {
            return Err(SettingsError::InvalidPolicyValue {
                field: "max_daily_appointments",
                message: "must be greater than zero".into(),
            });
        }
        if self.advance_booking_days == 0 {
            return Err(SettingsError::InvalidPolicyValue {
                field: "advance_booking_days",
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Distance between consecutive tiled session starts.
    pub(crate) fn stride_minutes(&self) -> i64 {
        self.session_minutes as i64 + self.buffer_minutes as i64
    }
}
