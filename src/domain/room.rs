use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::actuators::{AcMode, AirConditioner, Curtain, CurtainPosition, Lamp};
use super::capability::{Settable, Switchable};
use super::sensors::{LightSensor, PresenceSensor, TemperatureSensor};

/// Room names of the default house layout, in iteration order
pub const DEFAULT_ROOMS: [&str; 3] = ["Living Room", "Bedroom", "Kitchen"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HouseError {
    #[error("House must contain at least one room")]
    Empty,
    #[error("Duplicate room name: {0}")]
    DuplicateRoom(String),
}

/// A single room with its own sensors and actuators.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    pub temp_sensor: TemperatureSensor,
    pub light_sensor: LightSensor,
    pub presence_sensor: PresenceSensor,
    pub lamp: Lamp,
    pub ac: AirConditioner,
    pub curtain: Curtain,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            temp_sensor: TemperatureSensor::default(),
            light_sensor: LightSensor::default(),
            presence_sensor: PresenceSensor::default(),
            lamp: Lamp::new(),
            ac: AirConditioner::new(),
            curtain: Curtain::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn temperature(&self) -> f64 {
        self.temp_sensor.read()
    }

    pub fn light(&self) -> u8 {
        self.light_sensor.read()
    }

    pub fn presence(&self) -> bool {
        self.presence_sensor.read()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            name: self.name.clone(),
            temperature_c: self.temperature(),
            light_pct: self.light(),
            presence: self.presence(),
            lamp_on: self.lamp.is_on(),
            lamp_brightness: self.lamp.brightness(),
            ac_on: self.ac.is_on(),
            ac_target_temp_c: self.ac.target_temp(),
            ac_mode: self.ac.mode(),
            curtain: self.curtain.position(),
        }
    }
}

/// Read-only view of a room, for dashboards and logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    pub temperature_c: f64,
    pub light_pct: u8,
    pub presence: bool,
    pub lamp_on: bool,
    pub lamp_brightness: u8,
    pub ac_on: bool,
    pub ac_target_temp_c: f64,
    pub ac_mode: AcMode,
    pub curtain: CurtainPosition,
}

/// Fixed set of rooms. Rooms are created once and never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    rooms: Vec<Room>,
}

impl House {
    pub fn with_rooms<I, S>(names: I) -> Result<Self, HouseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut rooms = Vec::new();
        for name in names {
            let name: String = name.into();
            if !seen.insert(name.clone()) {
                return Err(HouseError::DuplicateRoom(name));
            }
            rooms.push(Room::new(name));
        }
        if rooms.is_empty() {
            return Err(HouseError::Empty);
        }
        Ok(Self { rooms })
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.name == name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn snapshot(&self) -> Vec<RoomSnapshot> {
        self.rooms.iter().map(Room::snapshot).collect()
    }
}

impl Default for House {
    fn default() -> Self {
        Self {
            rooms: DEFAULT_ROOMS.iter().map(|name| Room::new(*name)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_house_layout() {
        let house = House::default();
        let names: Vec<&str> = house.room_names().collect();
        assert_eq!(names, vec!["Living Room", "Bedroom", "Kitchen"]);
        assert_eq!(house.len(), 3);
    }

    #[test]
    fn test_room_defaults() {
        let room = Room::new("Study");
        assert_eq!(room.name(), "Study");
        assert_eq!(room.temperature(), 22.0);
        assert_eq!(room.light(), 50);
        assert!(!room.presence());
        assert!(!room.lamp.is_on());
        assert!(!room.ac.is_on());
        assert_eq!(room.curtain.position(), CurtainPosition::Closed);
    }

    #[test]
    fn test_properties_proxy_sensors() {
        let mut house = House::default();
        let room = house.room_mut("Living Room").unwrap();

        room.temp_sensor.set(28.0);
        room.presence_sensor.set(true);
        room.lamp.switch_on();
        room.ac.turn_on(23.0);

        let room = house.room("Living Room").unwrap();
        assert_eq!(room.temperature(), 28.0);
        assert!(room.presence());
        assert!(room.lamp.is_on());
        assert_eq!(room.ac.target_temp(), 23.0);
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(House::with_rooms(empty), Err(HouseError::Empty));
        assert_eq!(
            House::with_rooms(["Hall", "Hall"]),
            Err(HouseError::DuplicateRoom("Hall".into()))
        );
    }

    #[test]
    fn test_snapshot_reflects_devices() {
        let mut room = Room::new("Bedroom");
        room.ac.set_eco(26.0);
        room.curtain.open();

        let snap = room.snapshot();
        assert_eq!(snap.name, "Bedroom");
        assert!(snap.ac_on);
        assert_eq!(snap.ac_mode, AcMode::Eco);
        assert_eq!(snap.curtain, CurtainPosition::Open);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["curtain"], "OPEN");
        assert_eq!(json["ac_mode"], "ECO");
    }
}
