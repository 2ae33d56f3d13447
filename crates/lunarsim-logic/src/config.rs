//! Run configuration and fixed domain timings.
//!
//! Only the fleet size is chosen per run. Every timing below is a property
//! of the mining operation itself and is never taken from the command line.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Length of a full run in hours.
pub const SIMULATION_HOURS: u32 = 72;

/// Length of a full run in minutes (one tick per minute).
pub const FULL_RUN_MINUTES: u32 = SIMULATION_HOURS * 60;

/// Shortest load at a mining site (1 hour).
pub const LOAD_MINUTES_MIN: u32 = 60;

/// Longest load at a mining site (5 hours).
pub const LOAD_MINUTES_MAX: u32 = 5 * 60;

/// Drive between a mining site and an unload station, either direction.
pub const TRAVEL_MINUTES: u32 = 30;

/// Time an unload station needs to empty one truck.
pub const UNLOAD_MINUTES: u32 = 5;

/// Fleet size and run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub num_trucks: usize,
    pub num_stations: usize,
    /// Minutes to simulate. Always [`FULL_RUN_MINUTES`] for a real run.
    pub duration_minutes: u32,
    /// Seed for load-time sampling (None = seeded from OS entropy).
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Validate raw counts. Trucks are checked before stations.
    pub fn new(num_trucks: i64, num_stations: i64) -> Result<Self, ConfigError> {
        let num_trucks = usize::try_from(num_trucks)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidTruckCount(num_trucks))?;
        let num_stations = usize::try_from(num_stations)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigError::InvalidStationCount(num_stations))?;

        Ok(Self {
            num_trucks,
            num_stations,
            duration_minutes: FULL_RUN_MINUTES,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shorten or extend the run. Used by tests and harnesses.
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Re-check a config that may have been built field by field or deserialized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_trucks == 0 {
            return Err(ConfigError::InvalidTruckCount(0));
        }
        if self.num_stations == 0 {
            return Err(ConfigError::InvalidStationCount(0));
        }
        Ok(())
    }
}
