pub mod actuators;
pub mod capability;
pub mod room;
pub mod sensors;

pub use actuators::*;
pub use capability::*;
pub use room::*;
pub use sensors::{LightSensor, PresenceSensor, TemperatureSensor};
