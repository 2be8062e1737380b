//! TOML-backed practice store.
//!
//! One file holds the provider's availability settings, booking policy and
//! appointment book. The engine itself never touches disk; every command
//! loads the store, hands plain data to the core library and saves the
//! result explicitly.
//!
//! Stored at `~/.config/medislot/practice.toml` unless `--store` overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use medislot_core::{Appointment, AvailabilitySettings, BookingPolicy, OccupancyIndex};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PracticeStore {
    #[serde(default)]
    pub settings: AvailabilitySettings,
    #[serde(default)]
    pub policy: BookingPolicy,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl PracticeStore {
    pub fn load_or_default(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Occupancy view over the stored appointments.
    pub fn occupancy(&self) -> OccupancyIndex {
        OccupancyIndex::from_appointments(&self.appointments)
    }
}

pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("medislot")
            .join("practice.toml")
    })
}
