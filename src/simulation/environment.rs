//! # Outdoor Environment
//!
//! Deterministic day/night model for outdoor temperature and daylight, plus
//! the occupancy schedule that drives the presence sensors.
//!
//! Both are pure functions of the time of day; there is no calendar, season
//! or randomness involved.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::domain::sensors::round_to_tenth;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Mean outdoor temperature over a day (°C)
const MEAN_TEMP_C: f64 = 20.0;
/// Half of the day/night temperature swing (°C)
const TEMP_AMPLITUDE_C: f64 = 10.0;
/// Peak daylight (%)
const PEAK_LIGHT_PCT: f64 = 100.0;

/// Outdoor conditions at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutdoorConditions {
    /// Outdoor air temperature (°C), one decimal
    pub temperature_c: f64,
    /// Daylight level (%), zero at night
    pub light_pct: u8,
}

impl OutdoorConditions {
    /// Conditions at `minute` minutes after midnight.
    ///
    /// Sinusoidal cycle: coldest and darkest at midnight, warmest and
    /// brightest at noon. Minutes beyond one day wrap around.
    pub fn at_minute(minute: u32) -> Self {
        let minute = (minute % MINUTES_PER_DAY) as f64;
        let phase = (minute - 360.0) * PI / 720.0;
        let temp = MEAN_TEMP_C + TEMP_AMPLITUDE_C * phase.sin();
        let light = (PEAK_LIGHT_PCT * phase.sin()).max(0.0);

        Self {
            temperature_c: round_to_tenth(temp),
            light_pct: light.trunc().min(PEAK_LIGHT_PCT) as u8,
        }
    }

    pub fn at_hour(hour: u32) -> Self {
        Self::at_minute(hour * 60)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Hour out of range (0..=24): {0}")]
    HourOutOfRange(u32),
    #[error("Away window is inverted: {from}..{until}")]
    Inverted { from: u32, until: u32 },
}

/// Daily occupancy pattern: occupants are away during
/// `[away_from_hour, away_until_hour)` and home otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceSchedule {
    pub away_from_hour: u32,
    pub away_until_hour: u32,
}

impl Default for PresenceSchedule {
    fn default() -> Self {
        Self {
            away_from_hour: 9,
            away_until_hour: 17,
        }
    }
}

impl PresenceSchedule {
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for hour in [self.away_from_hour, self.away_until_hour] {
            if hour > 24 {
                return Err(ScheduleError::HourOutOfRange(hour));
            }
        }
        if self.away_from_hour > self.away_until_hour {
            return Err(ScheduleError::Inverted {
                from: self.away_from_hour,
                until: self.away_until_hour,
            });
        }
        Ok(())
    }

    pub fn is_present(&self, hour: u32) -> bool {
        let hour = hour % 24;
        !(self.away_from_hour..self.away_until_hour).contains(&hour)
    }

    pub fn is_present_at_minute(&self, minute: u32) -> bool {
        self.is_present((minute % MINUTES_PER_DAY) / 60)
    }
}
