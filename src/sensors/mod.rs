//! Temperature sensing and change notification.
//!
//! The [`TemperatureSensor`] holds the latest reading and pushes every new
//! value to its registered [`TemperatureListener`]s, synchronously and in
//! registration order.

pub mod temperature_sensor;

pub use temperature_sensor::TemperatureSensor;

use crate::error::Result;

/// Trait for state with change detection.
///
/// The version number is incremented each time the tracked value changes,
/// so readers can compare versions instead of values.
pub trait Sensor: Send + Sync {
    /// Get the current version number.
    fn version(&self) -> u32;
}

/// Reacts to temperature-changed notifications from a [`TemperatureSensor`].
///
/// Returning an error stops the fan-out; the error is handed back to whoever
/// pushed the reading.
pub trait TemperatureListener: Send + Sync {
    /// Name used in logs and error reports.
    fn name(&self) -> &str {
        "listener"
    }

    /// Called with the new reading in degrees Celsius.
    fn on_temperature_changed(&self, celsius: f64) -> Result<()>;
}

impl<F> TemperatureListener for F
where
    F: Fn(f64) -> Result<()> + Send + Sync,
{
    fn on_temperature_changed(&self, celsius: f64) -> Result<()> {
        self(celsius)
    }
}
