use serde::{Deserialize, Serialize};

use super::capability::Settable;

/// Lowest temperature the sensor will store (°C)
pub const MIN_TEMPERATURE_C: f64 = -20.0;
/// Highest temperature the sensor will store (°C)
pub const MAX_TEMPERATURE_C: f64 = 50.0;
/// Upper bound of the light percentage scale
pub const MAX_LIGHT_PCT: u8 = 100;

/// Indoor temperature in °C, stored with one decimal of precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSensor {
    value: f64,
}

impl TemperatureSensor {
    pub fn new(value: f64) -> Self {
        let mut sensor = Self { value: 0.0 };
        sensor.set(value);
        sensor
    }
}

impl Default for TemperatureSensor {
    fn default() -> Self {
        Self::new(22.0)
    }
}

impl Settable<f64> for TemperatureSensor {
    fn read(&self) -> f64 {
        self.value
    }

    fn set(&mut self, value: f64) {
        // NaN keeps the last good reading
        if value.is_nan() {
            return;
        }
        let clamped = value.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C);
        self.value = round_to_tenth(clamped);
    }
}

/// Indoor light level as an integer percentage (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightSensor {
    value: u8,
}

impl LightSensor {
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(MAX_LIGHT_PCT),
        }
    }

    /// Store a fractional light level, truncating toward zero and clamping
    /// into the 0-100 scale.
    pub fn set_level(&mut self, level: f64) {
        let truncated = if level.is_finite() { level.trunc() } else { 0.0 };
        self.value = truncated.clamp(0.0, MAX_LIGHT_PCT as f64) as u8;
    }
}

impl Default for LightSensor {
    fn default() -> Self {
        Self::new(50)
    }
}

impl Settable<u8> for LightSensor {
    fn read(&self) -> u8 {
        self.value
    }

    fn set(&mut self, value: u8) {
        self.value = value.min(MAX_LIGHT_PCT);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSensor {
    present: bool,
}

impl PresenceSensor {
    pub fn new(present: bool) -> Self {
        Self { present }
    }
}

impl Settable<bool> for PresenceSensor {
    fn read(&self) -> bool {
        self.present
    }

    fn set(&mut self, present: bool) {
        self.present = present;
    }
}

/// Round to one decimal on the exact binary value, ties to even.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_rounds_to_one_decimal() {
        let mut sensor = TemperatureSensor::default();
        sensor.set(23.456);
        assert_eq!(sensor.read(), 23.5);

        sensor.set(29.34);
        assert_eq!(sensor.read(), 29.3);
    }

    #[test]
    fn test_temperature_rounds_exact_value_ties_to_even() {
        let mut sensor = TemperatureSensor::default();
        for (raw, stored) in [(29.15, 29.1), (21.25, 21.2), (20.15, 20.1), (21.35, 21.4)] {
            sensor.set(raw);
            assert_eq!(sensor.read(), stored, "{raw}");
        }
    }

    #[test]
    fn test_temperature_clamped_to_physical_range() {
        let mut sensor = TemperatureSensor::default();
        sensor.set(120.0);
        assert_eq!(sensor.read(), MAX_TEMPERATURE_C);

        sensor.set(-80.0);
        assert_eq!(sensor.read(), MIN_TEMPERATURE_C);
    }

    #[test]
    fn test_temperature_ignores_nan() {
        let mut sensor = TemperatureSensor::new(21.0);
        sensor.set(f64::NAN);
        assert_eq!(sensor.read(), 21.0);
    }

    #[test]
    fn test_light_clamps_to_hundred() {
        let mut sensor = LightSensor::default();
        assert_eq!(sensor.read(), 50);

        sensor.set(180);
        assert_eq!(sensor.read(), 100);

        sensor.set_level(142.7);
        assert_eq!(sensor.read(), 100);
    }

    #[test]
    fn test_light_level_truncates() {
        let mut sensor = LightSensor::default();
        sensor.set_level(16.9);
        assert_eq!(sensor.read(), 16);

        sensor.set_level(-3.0);
        assert_eq!(sensor.read(), 0);
    }

    #[test]
    fn test_presence_defaults_to_absent() {
        let mut sensor = PresenceSensor::default();
        assert!(!sensor.read());
        sensor.set(true);
        assert!(sensor.read());
    }
}
