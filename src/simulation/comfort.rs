use crate::config::ComfortPolicy;
use crate::domain::sensors::round_to_tenth;
use crate::domain::Room;

/// Score lost per °C outside the comfort band
const TEMP_PENALTY_PER_DEG: f64 = 20.0;
const TEMP_WEIGHT: f64 = 0.6;
const LIGHT_WEIGHT: f64 = 0.4;

pub const MAX_SCORE: f64 = 100.0;

/// Temperature adequacy in [0, 100].
pub fn temperature_score(temperature_c: f64, policy: &ComfortPolicy) -> f64 {
    if policy.temp_in_band(temperature_c) {
        return MAX_SCORE;
    }
    let distance = (temperature_c - policy.temp_min)
        .abs()
        .min((temperature_c - policy.temp_max).abs());
    (MAX_SCORE - distance * TEMP_PENALTY_PER_DEG).max(0.0)
}

/// Light adequacy in [0, 100].
pub fn light_score(light_pct: u8, policy: &ComfortPolicy) -> f64 {
    if light_pct >= policy.light_min {
        return MAX_SCORE;
    }
    (light_pct as f64 / policy.light_min as f64 * MAX_SCORE).max(0.0)
}

/// Perceived comfort of a room, rounded to one decimal.
///
/// An empty room cannot be uncomfortable and always scores 100.
pub fn comfort_score(room: &Room, policy: &ComfortPolicy) -> f64 {
    if !room.presence() {
        return MAX_SCORE;
    }
    let temp = temperature_score(room.temperature(), policy);
    let light = light_score(room.light(), policy);
    round_to_tenth(TEMP_WEIGHT * temp + LIGHT_WEIGHT * light)
}
