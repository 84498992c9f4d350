//! # Energy Monitor
//!
//! Accumulates electrical energy (Wh) per device category and in total from
//! the on/off state of room actuators, and keeps a time series of snapshots
//! for charting.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{AirConditioner, Lamp, PoweredDevice, Room};

/// Running energy per device category (Wh)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceLog {
    pub lamp: f64,
    pub ac: f64,
}

/// Point-in-time copy of the monitor's totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergySnapshot {
    pub lamp: f64,
    pub ac: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyMonitor {
    total_energy_wh: f64,
    device_log: DeviceLog,
    history: Vec<EnergySnapshot>,
}

impl EnergyMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accrue `minutes` of consumption for every device of `room` that is on.
    pub fn update(&mut self, room: &Room, minutes: f64) {
        let lamp = room.lamp.energy_wh(minutes);
        let ac = room.ac.energy_wh(minutes);
        self.device_log.lamp += lamp;
        self.total_energy_wh += lamp;
        self.device_log.ac += ac;
        self.total_energy_wh += ac;
        trace!(room = room.name(), lamp_wh = lamp, ac_wh = ac, "energy accrued");
    }

    pub fn snapshot(&mut self) {
        self.history.push(EnergySnapshot {
            lamp: self.device_log.lamp,
            ac: self.device_log.ac,
            total: self.total_energy_wh,
        });
    }

    pub fn reset(&mut self) {
        self.total_energy_wh = 0.0;
        self.device_log = DeviceLog::default();
        self.history.clear();
    }

    pub fn total_energy_wh(&self) -> f64 {
        self.total_energy_wh
    }

    pub fn device_log(&self) -> &DeviceLog {
        &self.device_log
    }

    pub fn history(&self) -> &[EnergySnapshot] {
        &self.history
    }
}

/// Energy drawn by a room's devices over one hour (Wh).
///
/// Equal to the sum of the rated power of every device that is on.
pub fn hourly_energy_wh(room: &Room) -> f64 {
    room.lamp.energy_wh(60.0) + room.ac.energy_wh(60.0)
}

/// Rated power of the lamp and the AC together (W)
pub const ALL_DEVICES_WATT: f64 = Lamp::POWER_WATT + AirConditioner::POWER_WATT;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Switchable;
    use proptest::prelude::*;

    #[test]
    fn test_update_accrues_only_running_devices() {
        let mut room = Room::new("Living Room");
        room.lamp.switch_on();
        let mut monitor = EnergyMonitor::new();

        monitor.update(&room, 60.0);

        assert_eq!(monitor.total_energy_wh(), 10.0);
        assert_eq!(monitor.device_log().lamp, 10.0);
        assert_eq!(monitor.device_log().ac, 0.0);
    }

    #[test]
    fn test_ac_thirty_minutes() {
        let mut room = Room::new("Living Room");
        room.ac.set_eco(26.0);
        let mut monitor = EnergyMonitor::new();

        monitor.update(&room, 30.0);
        assert_eq!(monitor.total_energy_wh(), 750.0);
        assert_eq!(monitor.device_log().ac, 750.0);
    }

    #[test]
    fn test_snapshot_history_append_only() {
        let mut room = Room::new("Living Room");
        room.lamp.switch_on();
        room.ac.switch_on();
        let mut monitor = EnergyMonitor::new();

        monitor.snapshot();
        monitor.update(&room, 60.0);
        monitor.snapshot();

        assert_eq!(
            monitor.history(),
            &[
                EnergySnapshot::default(),
                EnergySnapshot {
                    lamp: 10.0,
                    ac: 1500.0,
                    total: 1510.0
                }
            ]
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut room = Room::new("Living Room");
        room.ac.switch_on();
        let mut monitor = EnergyMonitor::new();
        monitor.update(&room, 15.0);
        monitor.snapshot();

        monitor.reset();

        assert_eq!(monitor.total_energy_wh(), 0.0);
        assert_eq!(*monitor.device_log(), DeviceLog::default());
        assert!(monitor.history().is_empty());
    }

    #[test]
    fn test_hourly_energy_all_on() {
        let mut room = Room::new("Living Room");
        assert_eq!(hourly_energy_wh(&room), 0.0);
        room.lamp.switch_on();
        room.ac.switch_on();
        assert_eq!(hourly_energy_wh(&room), ALL_DEVICES_WATT);
    }

    proptest! {
        #[test]
        fn prop_lamp_energy_additive(ticks in 1u32..500, minutes in 1u32..=60) {
            let mut room = Room::new("Hall");
            room.lamp.switch_on();
            let mut monitor = EnergyMonitor::new();
            let mut previous = 0.0;

            for _ in 0..ticks {
                monitor.update(&room, minutes as f64);
                prop_assert!(monitor.total_energy_wh() >= previous);
                previous = monitor.total_energy_wh();
            }

            let expected = ticks as f64 * (minutes as f64 / 60.0) * Lamp::POWER_WATT;
            prop_assert!((monitor.total_energy_wh() - expected).abs() < 1e-6);
            prop_assert_eq!(monitor.device_log().ac, 0.0);
        }
    }
}
