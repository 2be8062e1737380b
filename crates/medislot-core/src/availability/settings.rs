//! The provider's availability settings and their mutation guards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exception::{Exception, ExceptionSet};
use super::template::WeeklyTemplate;
use super::vacation::VacationWindow;
use crate::error::SettingsError;

/// The availability settings a provider (or an admin on their behalf) owns.
///
/// The slot engine only reads this bundle. All mutation goes through the
/// guarded methods below, so a malformed interval set is rejected before it
/// can persist -- there are no partial saves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySettings {
    #[serde(default)]
    pub template: WeeklyTemplate,
    #[serde(default)]
    pub exceptions: ExceptionSet,
    #[serde(default)]
    pub vacation: Option<VacationWindow>,
}

impl AvailabilitySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and atomically replace the weekly template.
    ///
    /// A rejected candidate leaves the previous template untouched; the error
    /// names the offending weekday and interval pair.
    pub fn save_weekly_template(
        &mut self,
        mut candidate: WeeklyTemplate,
    ) -> Result<(), SettingsError> {
        candidate.validate()?;
        candidate.normalize();
        self.template = candidate;
        Ok(())
    }

    /// Validate and add a date override.
    ///
    /// A same-date exception is rejected unless `replace` is set, in which
    /// case the old one is overwritten whole.
    pub fn add_exception(
        &mut self,
        mut candidate: Exception,
        replace: bool,
    ) -> Result<(), SettingsError> {
        candidate.validate()?;
        if !replace && self.exceptions.contains(candidate.date) {
            return Err(SettingsError::DuplicateException {
                date: candidate.date,
            });
        }
        candidate.normalize();
        self.exceptions.insert(candidate);
        Ok(())
    }

    pub fn remove_exception(&mut self, date: NaiveDate) -> Option<Exception> {
        self.exceptions.remove(date)
    }

    pub fn set_vacation(&mut self, window: VacationWindow) -> Result<(), SettingsError> {
        window.validate()?;
        self.vacation = Some(window);
        Ok(())
    }

    pub fn clear_vacation(&mut self) -> Option<VacationWindow> {
        self.vacation.take()
    }
}
