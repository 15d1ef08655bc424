//! Climate patterns library.
//!
//! A virtual smart home climate controller: a temperature sensor pushes
//! readings to threshold policies, which switch a heater and an air
//! conditioner on or off. A separate adapter converts Celsius readings to
//! Kelvin for display.

pub mod config;
pub mod conversion;
pub mod devices;
pub mod error;
pub mod policies;
pub mod scenario;
pub mod sensors;

pub use conversion::{CelsiusToKelvin, TemperatureAdapter};
pub use devices::{AirConditioner, Announcer, Appliance, Heater, PowerSwitch, Transcript};
pub use error::{ClimateError, Result};
pub use policies::{AirConditionerPolicy, HeaterPolicy, ThresholdAction};
pub use scenario::{ScenarioReport, run_scenario};
pub use sensors::{Sensor, TemperatureListener, TemperatureSensor};
