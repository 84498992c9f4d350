//! Rule-based room controller.
//!
//! Decisions are evaluated in a fixed order each tick:
//! 1. **Presence gate**: an empty room goes to its energy-saving state (lamp
//!    off, curtain closed, AC in eco mode) and nothing else is evaluated.
//! 2. **Lighting**: too dark → daylight if the outdoor level is high enough,
//!    otherwise the lamp behind closed curtains. Bright enough → lamp off.
//! 3. **Temperature**: too warm → passive cooling through the curtain when it
//!    is cooler outside, otherwise AC at `temp_max`. Too cold → close the
//!    curtain and stop the AC (no heating is modeled). In band → AC off.
//!
//! Only actuators are touched; sensors are left for the physics step.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ComfortPolicy, ControllerPolicy};
use crate::domain::{Room, Switchable};

/// What the controller decided for the lighting of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingAction {
    Daylight,
    Lamp,
    LampOff,
}

/// What the controller decided for the temperature of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingAction {
    PassiveCooling,
    ActiveCooling,
    RetainHeat,
    Idle,
}

/// Outcome of one `control_room` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlDecision {
    EnergySaving,
    Occupied {
        lighting: LightingAction,
        cooling: CoolingAction,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AutoController {
    comfort: ComfortPolicy,
    policy: ControllerPolicy,
}

impl AutoController {
    pub fn new(comfort: ComfortPolicy, policy: ControllerPolicy) -> Self {
        Self { comfort, policy }
    }

    pub fn comfort(&self) -> &ComfortPolicy {
        &self.comfort
    }

    pub fn control_room(&self, room: &mut Room, outdoor_temp: f64, outdoor_light: u8) {
        self.decide(room, outdoor_temp, outdoor_light);
    }

    /// Same as [`control_room`](Self::control_room), returning the decision taken.
    pub fn decide(&self, room: &mut Room, outdoor_temp: f64, outdoor_light: u8) -> ControlDecision {
        if !room.presence() {
            room.lamp.turn_off();
            room.curtain.close();
            room.ac.set_eco(self.comfort.eco_temp);
            debug!(room = room.name(), "room empty, energy saving");
            return ControlDecision::EnergySaving;
        }

        let lighting = self.control_lighting(room, outdoor_light);
        let cooling = self.control_temperature(room, outdoor_temp);
        debug!(
            room = room.name(),
            temperature_c = room.temperature(),
            light_pct = room.light(),
            ?lighting,
            ?cooling,
            "room controlled"
        );
        ControlDecision::Occupied { lighting, cooling }
    }

    fn control_lighting(&self, room: &mut Room, outdoor_light: u8) -> LightingAction {
        if room.light() >= self.comfort.light_min {
            room.lamp.turn_off();
            return LightingAction::LampOff;
        }

        if outdoor_light > self.policy.daylight_threshold_pct {
            room.curtain.open();
            room.lamp.turn_off();
            LightingAction::Daylight
        } else {
            room.curtain.close();
            room.lamp.turn_on(self.policy.lamp_brightness_pct);
            LightingAction::Lamp
        }
    }

    fn control_temperature(&self, room: &mut Room, outdoor_temp: f64) -> CoolingAction {
        let indoor = room.temperature();

        if indoor > self.comfort.temp_max {
            if outdoor_temp < indoor {
                room.curtain.open();
                room.ac.turn_off();
                CoolingAction::PassiveCooling
            } else {
                room.curtain.close();
                room.ac.turn_on(self.comfort.temp_max);
                CoolingAction::ActiveCooling
            }
        } else if indoor < self.comfort.temp_min {
            room.curtain.close();
            room.ac.turn_off();
            CoolingAction::RetainHeat
        } else {
            room.ac.turn_off();
            CoolingAction::Idle
        }
    }
}
