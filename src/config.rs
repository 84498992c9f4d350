use anyhow::{ensure, Result};
use chrono::{NaiveDate, NaiveDateTime};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::House;
use crate::simulation::{ManualSettings, PresenceSchedule};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "SHC__";

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Comfort band inverted: temp_min={temp_min} > temp_max={temp_max}")]
    InvertedBand { temp_min: f64, temp_max: f64 },
    #[error("light_min must be within 1..=100, got {0}")]
    LightMinOutOfRange(u8),
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub comfort: ComfortPolicy,
    pub controller: ControllerPolicy,
    pub simulation: SimulationConfig,
    pub manual: ManualSettings,
}

/// Comfort band shared by the controller and the comfort scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComfortPolicy {
    /// Lower edge of the comfortable temperature band (°C)
    pub temp_min: f64,
    /// Upper edge of the comfortable temperature band (°C); also the cooling setpoint
    pub temp_max: f64,
    /// Minimum acceptable light level (%)
    pub light_min: u8,
    /// AC setpoint for unoccupied rooms (°C)
    pub eco_temp: f64,
}

impl Default for ComfortPolicy {
    fn default() -> Self {
        Self {
            temp_min: 20.0,
            temp_max: 25.0,
            light_min: 40,
            eco_temp: 26.0,
        }
    }
}

impl ComfortPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (name, value) in [
            ("temp_min", self.temp_min),
            ("temp_max", self.temp_max),
            ("eco_temp", self.eco_temp),
        ] {
            if !value.is_finite() {
                return Err(PolicyError::NonFinite(name));
            }
        }
        if self.temp_min > self.temp_max {
            return Err(PolicyError::InvertedBand {
                temp_min: self.temp_min,
                temp_max: self.temp_max,
            });
        }
        if self.light_min == 0 || self.light_min > 100 {
            return Err(PolicyError::LightMinOutOfRange(self.light_min));
        }
        Ok(())
    }

    pub fn temp_in_band(&self, temp: f64) -> bool {
        (self.temp_min..=self.temp_max).contains(&temp)
    }
}

/// Tunables of the automatic controller that are not part of the comfort band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerPolicy {
    /// Outdoor light (%) above which daylight is preferred over the lamp
    pub daylight_threshold_pct: u8,
    /// Lamp brightness (%) when artificial light is needed
    pub lamp_brightness_pct: u8,
}

impl Default for ControllerPolicy {
    fn default() -> Self {
        Self {
            daylight_threshold_pct: 60,
            lamp_brightness_pct: 70,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rooms: Vec<String>,
    /// Length of one interactive tick in minutes
    pub tick_minutes: u32,
    /// Wall-clock start of the interactive loop
    pub start_time: NaiveDateTime,
    pub presence: PresenceSchedule,
    /// When false, the interactive loop leaves presence to the caller
    pub follow_presence_schedule: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rooms: crate::domain::DEFAULT_ROOMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tick_minutes: 1,
            start_time: NaiveDate::from_ymd_opt(2024, 6, 15)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap_or_default(),
            presence: PresenceSchedule::default(),
            follow_presence_schedule: true,
        }
    }
}

impl SimulationConfig {
    pub fn build_house(&self) -> Result<House> {
        Ok(House::with_rooms(self.rooms.iter().cloned())?)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        let cfg: Config = figment.extract()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.comfort.validate()?;
        self.manual.validate()?;
        self.simulation.presence.validate()?;
        self.simulation.build_house()?;
        ensure!(
            self.simulation.tick_minutes > 0,
            "simulation.tick_minutes must be positive"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurtainPosition;
    use figment::Jail;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(ComfortPolicy::default().validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_policy_rejects_inverted_band() {
        let policy = ComfortPolicy {
            temp_min: 26.0,
            temp_max: 22.0,
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvertedBand {
                temp_min: 26.0,
                temp_max: 22.0
            })
        );
    }

    #[test]
    fn test_policy_rejects_zero_light_min() {
        let policy = ComfortPolicy {
            light_min: 0,
            ..Default::default()
        };
        assert_eq!(policy.validate(), Err(PolicyError::LightMinOutOfRange(0)));
    }

    #[test]
    fn test_policy_rejects_nan() {
        let policy = ComfortPolicy {
            eco_temp: f64::NAN,
            ..Default::default()
        };
        assert_eq!(policy.validate(), Err(PolicyError::NonFinite("eco_temp")));
    }

    #[test]
    fn test_load_merges_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "home.toml",
                r#"
                [comfort]
                temp_max = 24.0

                [simulation]
                rooms = ["Office"]

                [manual]
                curtain = "CLOSED"
                "#,
            )?;
            jail.set_env("SHC__COMFORT__LIGHT_MIN", "35");

            let cfg = Config::load_from("home.toml").map_err(|e| e.to_string())?;
            assert_eq!(cfg.comfort.temp_max, 24.0);
            assert_eq!(cfg.comfort.temp_min, 20.0);
            assert_eq!(cfg.comfort.light_min, 35);
            assert_eq!(cfg.simulation.rooms, vec!["Office".to_string()]);
            assert_eq!(cfg.manual.curtain, CurtainPosition::Closed);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_layout() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "home.toml",
                r#"
                [simulation]
                rooms = ["Hall", "Hall"]
                "#,
            )?;
            assert!(Config::load_from("home.toml").is_err());
            Ok(())
        });
    }
}
