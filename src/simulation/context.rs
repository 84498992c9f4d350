//! # Interactive Simulation Context
//!
//! Minute-granularity loop for a live dashboard. The context owns the house,
//! the controller and the energy monitor for a session, and advances them one
//! tick at a time. Physics, control and energy accrual are the same
//! primitives the hourly comparison uses.

use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::comfort::comfort_score;
use super::environment::{OutdoorConditions, PresenceSchedule};
use super::manual::ManualSettings;
use super::physics::step_room;
use crate::config::Config;
use crate::controller::AutoController;
use crate::domain::{House, RoomSnapshot, Settable};
use crate::energy::{EnergyMonitor, EnergySnapshot};

/// How rooms are driven on each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlMode {
    Auto,
    Manual(ManualSettings),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    #[serde(flatten)]
    pub room: RoomSnapshot,
    pub comfort: f64,
}

/// Everything a dashboard needs to render after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub timestamp: NaiveDateTime,
    pub outdoor: OutdoorConditions,
    pub rooms: Vec<RoomReport>,
    pub energy: EnergySnapshot,
}

pub struct SimulationContext {
    config: Config,
    house: House,
    controller: AutoController,
    energy: EnergyMonitor,
    mode: ControlMode,
    current_time: NaiveDateTime,
}

impl SimulationContext {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let house = config.simulation.build_house()?;
        let controller = AutoController::new(config.comfort, config.controller);
        let current_time = config.simulation.start_time;

        Ok(Self {
            config,
            house,
            controller,
            energy: EnergyMonitor::new(),
            mode: ControlMode::Auto,
            current_time,
        })
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    /// Direct access for interactive overrides between ticks.
    pub fn house_mut(&mut self) -> &mut House {
        &mut self.house
    }

    pub fn energy(&self) -> &EnergyMonitor {
        &self.energy
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }

    pub fn current_time(&self) -> NaiveDateTime {
        self.current_time
    }

    pub fn presence_schedule(&self) -> &PresenceSchedule {
        &self.config.simulation.presence
    }

    fn minute_of_day(&self) -> u32 {
        self.current_time.hour() * 60 + self.current_time.minute()
    }

    /// Advance the clock by one tick and update every room.
    pub fn advance_tick(&mut self) -> TickReport {
        let tick_minutes = self.config.simulation.tick_minutes;
        self.current_time += Duration::minutes(i64::from(tick_minutes));

        let minute = self.minute_of_day();
        let outdoor = OutdoorConditions::at_minute(minute);
        let present = self.config.simulation.presence.is_present_at_minute(minute);
        let follow_schedule = self.config.simulation.follow_presence_schedule;

        let mut rooms = Vec::with_capacity(self.house.len());
        for room in self.house.rooms_mut() {
            if follow_schedule {
                room.presence_sensor.set(present);
            }

            match &self.mode {
                ControlMode::Auto => {
                    self.controller
                        .control_room(room, outdoor.temperature_c, outdoor.light_pct)
                }
                ControlMode::Manual(settings) => settings.apply(room, outdoor.light_pct),
            }

            step_room(room, &outdoor);
            self.energy.update(room, f64::from(tick_minutes));
            rooms.push(RoomReport {
                room: room.snapshot(),
                comfort: comfort_score(room, &self.config.comfort),
            });
        }
        self.energy.snapshot();

        let energy = self.energy.history().last().copied().unwrap_or_default();
        debug!(
            timestamp = %self.current_time,
            outdoor_temp_c = outdoor.temperature_c,
            outdoor_light_pct = outdoor.light_pct,
            total_energy_wh = energy.total,
            "tick"
        );

        TickReport {
            timestamp: self.current_time,
            outdoor,
            rooms,
            energy,
        }
    }

    /// Advance `ticks` times, returning the last report.
    pub fn advance(&mut self, ticks: usize) -> Option<TickReport> {
        (0..ticks).map(|_| self.advance_tick()).last()
    }

    /// Back to the start: fresh rooms, zeroed energy, start time, AUTO mode.
    pub fn reset(&mut self) -> Result<()> {
        self.house = self.config.simulation.build_house()?;
        self.energy.reset();
        self.mode = ControlMode::Auto;
        self.current_time = self.config.simulation.start_time;
        Ok(())
    }
}
