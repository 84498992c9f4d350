use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::capability::{PoweredDevice, Switchable};

/// Ceiling or desk lamp with dimmable brightness (0-100 %)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lamp {
    on: bool,
    brightness: u8,
}

impl Lamp {
    /// Brightness used when the lamp is switched on without an explicit level
    pub const DEFAULT_BRIGHTNESS: u8 = 70;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self, brightness: u8) {
        self.on = true;
        self.brightness = brightness.min(100);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Switchable for Lamp {
    fn is_on(&self) -> bool {
        self.on
    }

    fn switch_on(&mut self) {
        self.turn_on(Self::DEFAULT_BRIGHTNESS);
    }

    fn turn_off(&mut self) {
        self.on = false;
        self.brightness = 0;
    }
}

impl PoweredDevice for Lamp {
    const POWER_WATT: f64 = 10.0;
}

/// Air conditioner operating mode
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum AcMode {
    #[default]
    Normal,
    Eco,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirConditioner {
    on: bool,
    target_temp: f64,
    mode: AcMode,
}

impl AirConditioner {
    pub const DEFAULT_TARGET_TEMP: f64 = 24.0;

    pub fn new() -> Self {
        Self {
            on: false,
            target_temp: Self::DEFAULT_TARGET_TEMP,
            mode: AcMode::Normal,
        }
    }

    pub fn turn_on(&mut self, target_temp: f64) {
        self.on = true;
        self.target_temp = target_temp;
        self.mode = AcMode::Normal;
    }

    /// Run at the energy-saving setpoint.
    pub fn set_eco(&mut self, eco_temp: f64) {
        self.on = true;
        self.mode = AcMode::Eco;
        self.target_temp = eco_temp;
    }

    pub fn target_temp(&self) -> f64 {
        self.target_temp
    }

    pub fn mode(&self) -> AcMode {
        self.mode
    }
}

impl Default for AirConditioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Switchable for AirConditioner {
    fn is_on(&self) -> bool {
        self.on
    }

    fn switch_on(&mut self) {
        self.turn_on(Self::DEFAULT_TARGET_TEMP);
    }

    // Target and mode survive a power cycle
    fn turn_off(&mut self) {
        self.on = false;
    }
}

impl PoweredDevice for AirConditioner {
    const POWER_WATT: f64 = 1500.0;
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CurtainPosition {
    Open,
    #[default]
    Closed,
    Half,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curtain {
    position: CurtainPosition,
}

impl Curtain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.position = CurtainPosition::Open;
    }

    pub fn close(&mut self) {
        self.position = CurtainPosition::Closed;
    }

    pub fn half(&mut self) {
        self.position = CurtainPosition::Half;
    }

    pub fn position(&self) -> CurtainPosition {
        self.position
    }

    /// Only a fully open curtain lets daylight into the room; HALF blocks it
    /// like CLOSED does.
    pub fn admits_daylight(&self) -> bool {
        self.position == CurtainPosition::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_lamp_off_zeroes_brightness() {
        let mut lamp = Lamp::new();
        lamp.turn_on(55);
        assert!(lamp.is_on());
        assert_eq!(lamp.brightness(), 55);

        lamp.turn_off();
        assert!(!lamp.is_on());
        assert_eq!(lamp.brightness(), 0);
    }

    #[test]
    fn test_lamp_switch_on_uses_default_brightness() {
        let mut lamp = Lamp::new();
        lamp.switch_on();
        assert_eq!(lamp.brightness(), Lamp::DEFAULT_BRIGHTNESS);
    }

    #[test]
    fn test_lamp_brightness_capped() {
        let mut lamp = Lamp::new();
        lamp.turn_on(250);
        assert_eq!(lamp.brightness(), 100);
    }

    #[test]
    fn test_ac_eco_then_normal() {
        let mut ac = AirConditioner::new();
        assert!(!ac.is_on());
        assert_eq!(ac.target_temp(), 24.0);

        ac.set_eco(26.0);
        assert!(ac.is_on());
        assert_eq!(ac.mode(), AcMode::Eco);
        assert_eq!(ac.target_temp(), 26.0);

        ac.turn_on(23.0);
        assert_eq!(ac.mode(), AcMode::Normal);
        assert_eq!(ac.target_temp(), 23.0);

        ac.turn_off();
        assert!(!ac.is_on());
        assert_eq!(ac.target_temp(), 23.0);
    }

    #[test]
    fn test_power_draw_follows_state() {
        let mut lamp = Lamp::new();
        let mut ac = AirConditioner::new();
        assert_eq!(lamp.power_draw_w() + ac.power_draw_w(), 0.0);

        lamp.switch_on();
        ac.switch_on();
        assert_eq!(lamp.power_draw_w() + ac.power_draw_w(), 1510.0);
        assert_eq!(ac.energy_wh(30.0), 750.0);
    }

    #[test]
    fn test_curtain_positions() {
        let mut curtain = Curtain::new();
        assert_eq!(curtain.position(), CurtainPosition::Closed);
        assert!(!curtain.admits_daylight());

        curtain.half();
        assert!(!curtain.admits_daylight());

        curtain.open();
        assert!(curtain.admits_daylight());
    }

    #[test]
    fn test_curtain_position_parse_and_display() {
        assert_eq!(CurtainPosition::from_str("OPEN").unwrap(), CurtainPosition::Open);
        assert_eq!(CurtainPosition::from_str("closed").unwrap(), CurtainPosition::Closed);
        assert!(CurtainPosition::from_str("AJAR").is_err());
        assert_eq!(CurtainPosition::Half.to_string(), "HALF");
        assert_eq!(AcMode::Eco.to_string(), "ECO");
    }
}
