//! # 24h AUTO vs MANUAL Comparison
//!
//! Runs two independent houses side by side over one day in hourly ticks:
//! one under the automatic controller, one pinned to fixed manual settings.
//! Each hour yields the energy drawn and the average comfort of both.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::comfort::comfort_score;
use super::environment::{OutdoorConditions, PresenceSchedule};
use super::manual::ManualSettings;
use super::physics::step_room;
use crate::config::{ComfortPolicy, Config};
use crate::controller::AutoController;
use crate::domain::{House, Settable};
use crate::energy::hourly_energy_wh;

pub const HOURS_PER_DAY: u32 = 24;

/// One row of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyMetrics {
    pub hour: u32,
    pub auto_energy_wh: f64,
    pub manual_energy_wh: f64,
    pub auto_comfort: f64,
    pub manual_comfort: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub rows: Vec<HourlyMetrics>,
}

impl ComparisonTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn auto_energy_total_wh(&self) -> f64 {
        self.rows.iter().map(|r| r.auto_energy_wh).sum()
    }

    pub fn manual_energy_total_wh(&self) -> f64 {
        self.rows.iter().map(|r| r.manual_energy_wh).sum()
    }

    pub fn auto_comfort_mean(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.auto_comfort))
    }

    pub fn manual_comfort_mean(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.manual_comfort))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:>12}  {:>14}  {:>12}  {:>14}",
            "Hour", "AUTO Energy", "MANUAL Energy", "AUTO Comfort", "MANUAL Comfort"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>4}  {:>12.1}  {:>14.1}  {:>12.1}  {:>14.1}",
                row.hour, row.auto_energy_wh, row.manual_energy_wh, row.auto_comfort, row.manual_comfort
            )?;
        }
        write!(
            f,
            "{:>4}  {:>12.1}  {:>14.1}  {:>12.1}  {:>14.1}",
            "Sum",
            self.auto_energy_total_wh(),
            self.manual_energy_total_wh(),
            self.auto_comfort_mean(),
            self.manual_comfort_mean()
        )
    }
}

/// Which way a house is driven during the comparison
#[derive(Debug, Clone, Copy)]
enum Driver<'a> {
    Auto(&'a AutoController),
    Manual(&'a ManualSettings),
}

/// Drives the hourly comparison for a given room layout and policy.
#[derive(Debug, Clone)]
pub struct ComparisonRunner {
    rooms: Vec<String>,
    controller: AutoController,
    presence: PresenceSchedule,
}

impl ComparisonRunner {
    pub fn new(rooms: Vec<String>, controller: AutoController, presence: PresenceSchedule) -> Self {
        Self {
            rooms,
            controller,
            presence,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.simulation.rooms.clone(),
            AutoController::new(cfg.comfort, cfg.controller),
            cfg.simulation.presence,
        )
    }

    pub fn comfort(&self) -> &ComfortPolicy {
        self.controller.comfort()
    }

    /// Simulate one day for both modes. Fails only for an invalid room layout.
    pub fn run(&self, manual: &ManualSettings) -> Result<ComparisonTable> {
        let mut auto_house = House::with_rooms(self.rooms.iter().cloned())?;
        let mut manual_house = House::with_rooms(self.rooms.iter().cloned())?;
        let mut table = ComparisonTable {
            rows: Vec::with_capacity(HOURS_PER_DAY as usize),
        };

        for hour in 0..HOURS_PER_DAY {
            let outdoor = OutdoorConditions::at_hour(hour);
            let (auto_energy_wh, auto_comfort) =
                self.simulate_hour(&mut auto_house, Driver::Auto(&self.controller), &outdoor, hour);
            let (manual_energy_wh, manual_comfort) =
                self.simulate_hour(&mut manual_house, Driver::Manual(manual), &outdoor, hour);

            table.rows.push(HourlyMetrics {
                hour,
                auto_energy_wh,
                manual_energy_wh,
                auto_comfort,
                manual_comfort,
            });
        }

        info!(
            rooms = self.rooms.len(),
            auto_energy_wh = table.auto_energy_total_wh(),
            manual_energy_wh = table.manual_energy_total_wh(),
            auto_comfort = table.auto_comfort_mean(),
            manual_comfort = table.manual_comfort_mean(),
            "24h comparison complete"
        );
        Ok(table)
    }

    /// One hourly tick over every room; returns (energy Wh, mean comfort).
    fn simulate_hour(
        &self,
        house: &mut House,
        driver: Driver<'_>,
        outdoor: &OutdoorConditions,
        hour: u32,
    ) -> (f64, f64) {
        let present = self.presence.is_present(hour);
        let mut energy_wh = 0.0;
        let mut comfort_sum = 0.0;

        for room in house.rooms_mut() {
            room.presence_sensor.set(present);

            match driver {
                Driver::Auto(controller) => {
                    controller.control_room(room, outdoor.temperature_c, outdoor.light_pct)
                }
                Driver::Manual(settings) => settings.apply(room, outdoor.light_pct),
            }

            step_room(room, outdoor);
            energy_wh += hourly_energy_wh(room);
            comfort_sum += comfort_score(room, self.comfort());
        }

        (energy_wh, comfort_sum / house.len() as f64)
    }
}

/// Run the 24h comparison on the default house with default policies.
pub fn run_simulation(manual_settings: &ManualSettings) -> Result<ComparisonTable> {
    ComparisonRunner::from_config(&Config::default()).run(manual_settings)
}
