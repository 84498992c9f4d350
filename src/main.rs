use anyhow::{Context, Result};
use smart_home_controller::{config, domain, simulation, telemetry};
use config::Config;
use domain::{Settable, Switchable};
use simulation::ComparisonRunner;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    info!(rooms = ?cfg.simulation.rooms, manual = ?cfg.manual, "starting 24h comparison");

    demo_living_room(&cfg)?;

    let table = ComparisonRunner::from_config(&cfg).run(&cfg.manual)?;
    println!("{table}");

    let saved = table.manual_energy_total_wh() - table.auto_energy_total_wh();
    info!(
        saved_wh = saved,
        comfort_delta = table.auto_comfort_mean() - table.manual_comfort_mean(),
        "AUTO vs MANUAL"
    );
    Ok(())
}

/// Drive one room by hand and log what the devices report back.
fn demo_living_room(cfg: &Config) -> Result<()> {
    let mut house = cfg.simulation.build_house()?;
    let name = cfg
        .simulation
        .rooms
        .first()
        .context("no rooms configured")?
        .clone();
    let room = house
        .room_mut(&name)
        .with_context(|| format!("room {name} missing"))?;

    room.temp_sensor.set(28.0);
    room.presence_sensor.set(true);
    room.lamp.switch_on();
    room.ac.turn_on(23.0);

    info!(
        room = %name,
        temperature_c = room.temperature(),
        lamp_on = room.lamp.is_on(),
        ac_target_c = room.ac.target_temp(),
        "manual override"
    );
    Ok(())
}
