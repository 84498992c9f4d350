//! # Home Simulation Module
//!
//! Discrete-time simulation of the rooms of a house under automatic or manual
//! control.
//!
//! ## Components
//!
//! - **Environment**: sinusoidal outdoor temperature/daylight and the occupancy schedule
//! - **Physics**: per-tick indoor temperature relaxation and light accumulation
//! - **Comfort**: 0-100 score blending temperature and light adequacy
//! - **Manual**: fixed settings pushed into rooms in manual mode
//! - **Context**: minute-by-minute interactive loop with energy history
//! - **Comparison**: 24h AUTO vs MANUAL run in hourly ticks
//!
//! ## Usage
//!
//! ```rust
//! use smart_home_controller::simulation::{run_simulation, ManualSettings};
//!
//! let table = run_simulation(&ManualSettings::default()).unwrap();
//! assert_eq!(table.len(), 24);
//! println!("{table}");
//! ```

pub mod comfort;
pub mod comparison;
pub mod context;
pub mod environment;
pub mod manual;
pub mod physics;

pub use comfort::comfort_score;
pub use comparison::{run_simulation, ComparisonRunner, ComparisonTable, HourlyMetrics};
pub use context::{ControlMode, RoomReport, SimulationContext, TickReport};
pub use environment::{OutdoorConditions, PresenceSchedule, ScheduleError};
pub use manual::{ManualSettings, SettingsError};
pub use physics::step_room;
