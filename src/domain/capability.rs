/// A register that can be read and overwritten, such as a sensor reading.
///
/// Implementations are free to normalise the stored value (rounding,
/// clamping), so `read()` after `set(v)` is not guaranteed to return `v`.
pub trait Settable<T> {
    fn read(&self) -> T;
    fn set(&mut self, value: T);
}

/// A device with an on/off state.
pub trait Switchable {
    fn is_on(&self) -> bool;

    /// Switch on using the device's default operating point.
    fn switch_on(&mut self);

    fn turn_off(&mut self);
}

/// A switchable device with a fixed electrical draw while on.
pub trait PoweredDevice: Switchable {
    const POWER_WATT: f64;

    /// Instantaneous draw in watts (zero while off)
    fn power_draw_w(&self) -> f64 {
        if self.is_on() {
            Self::POWER_WATT
        } else {
            0.0
        }
    }

    /// Energy consumed over `minutes` at the current state, in watt-hours
    fn energy_wh(&self, minutes: f64) -> f64 {
        self.power_draw_w() * (minutes / 60.0)
    }
}
