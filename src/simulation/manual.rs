use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::physics::DAYLIGHT_GAIN;
use crate::domain::{CurtainPosition, Room, Settable, Switchable};

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Manual temperature must be finite, got {0}")]
    NonFiniteTemperature(f64),
    #[error("Manual light level must be within 0..=100, got {0}")]
    LightOutOfRange(u8),
}

/// Fixed configuration applied to every room when running in manual mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualSettings {
    /// Forced indoor reading and AC setpoint (°C)
    pub temp: f64,
    /// Forced indoor light baseline (%)
    pub light: u8,
    /// OPEN admits daylight; anything else closes the curtain
    pub curtain: CurtainPosition,
    pub ac: bool,
    pub lamp: bool,
}

impl Default for ManualSettings {
    fn default() -> Self {
        Self {
            temp: 24.0,
            light: 70,
            curtain: CurtainPosition::Open,
            ac: true,
            lamp: true,
        }
    }
}

impl ManualSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.temp.is_finite() {
            return Err(SettingsError::NonFiniteTemperature(self.temp));
        }
        if self.light > 100 {
            return Err(SettingsError::LightOutOfRange(self.light));
        }
        Ok(())
    }

    /// Force the room's readings and devices to these settings.
    ///
    /// With the curtain open the light reading is additionally raised by the
    /// daylight gain, so manual rooms see the same outdoor contribution the
    /// physics step would give.
    pub fn apply(&self, room: &mut Room, outdoor_light: u8) {
        room.temp_sensor.set(self.temp);
        room.light_sensor.set(self.light);

        if self.ac {
            room.ac.turn_on(self.temp);
        } else {
            room.ac.turn_off();
        }

        if self.lamp {
            room.lamp.switch_on();
        } else {
            room.lamp.turn_off();
        }

        match self.curtain {
            CurtainPosition::Open => room.curtain.open(),
            CurtainPosition::Closed | CurtainPosition::Half => room.curtain.close(),
        }

        if room.curtain.admits_daylight() {
            let boost = (outdoor_light as f64 * DAYLIGHT_GAIN).trunc();
            room.light_sensor.set_level(room.light() as f64 + boost);
        }
    }
}
