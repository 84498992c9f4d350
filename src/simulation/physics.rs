//! Per-tick indoor physics.
//!
//! First-order relaxation toward an attractor: the AC setpoint while the AC
//! runs, the outdoor temperature otherwise. Light accumulates on top of the
//! current reading. The constants are per tick and are not scaled by tick
//! length, so the minute loop and the hour loop use the same formulas.

use tracing::trace;

use super::environment::OutdoorConditions;
use crate::domain::{Room, Settable, Switchable};

/// Fraction of the gap to the AC setpoint closed per tick
pub const AC_RELAXATION: f64 = 0.1;
/// Fraction of the gap to outdoor temperature closed per tick with the AC off
pub const PASSIVE_RELAXATION: f64 = 0.02;
/// Share of outdoor light entering through an open curtain
pub const DAYLIGHT_GAIN: f64 = 0.3;
/// Light added per point of lamp brightness
pub const LAMP_GAIN: f64 = 0.5;

/// Next indoor temperature after one tick toward `attractor` at `rate`.
pub fn relax(current: f64, attractor: f64, rate: f64) -> f64 {
    current + (attractor - current) * rate
}

pub fn step_temperature(room: &mut Room, outdoor_temp_c: f64) {
    let current = room.temperature();
    let next = if room.ac.is_on() {
        relax(current, room.ac.target_temp(), AC_RELAXATION)
    } else {
        relax(current, outdoor_temp_c, PASSIVE_RELAXATION)
    };
    room.temp_sensor.set(next);
}

pub fn step_light(room: &mut Room, outdoor_light_pct: u8) {
    let mut light = room.light() as f64;
    if room.curtain.admits_daylight() {
        light += outdoor_light_pct as f64 * DAYLIGHT_GAIN;
    }
    if room.lamp.is_on() {
        light += room.lamp.brightness() as f64 * LAMP_GAIN;
    }
    room.light_sensor.set_level(light);
}

/// Advance one room by one tick.
pub fn step_room(room: &mut Room, outdoor: &OutdoorConditions) {
    step_temperature(room, outdoor.temperature_c);
    step_light(room, outdoor.light_pct);
    trace!(
        room = room.name(),
        temperature_c = room.temperature(),
        light_pct = room.light(),
        "physics step"
    );
}
