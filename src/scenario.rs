//! The climate scenario driver.
//!
//! Wires the appliances to a fresh sensor through their policies, pushes a
//! single reading and converts it to Kelvin for display.

use crate::conversion::{CelsiusToKelvin, TemperatureAdapter, format_temperature};
use crate::devices::{Appliance, Transcript};
use crate::error::Result;
use crate::policies::{AirConditionerPolicy, HeaterPolicy};
use crate::sensors::TemperatureSensor;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one scenario run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Device confirmations in the order they were announced.
    pub messages: Vec<String>,
    pub celsius: f64,
    pub kelvin: f64,
    pub heater_on: bool,
    pub air_conditioner_on: bool,
}

impl ScenarioReport {
    /// Device confirmations followed by the Celsius and Kelvin lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.messages.clone();
        lines.push(format!(
            "Temperatura em Celsius: {}",
            format_temperature(self.celsius)
        ));
        lines.push(format!(
            "Temperatura em Kelvin: {}",
            format_temperature(self.kelvin)
        ));
        lines
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Everything the program writes to stdout for this report.
    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            self.to_json()
        } else {
            Ok(self.lines().join("\n"))
        }
    }
}

/// Run the scenario against the given appliances.
///
/// Nothing is printed here; device confirmations are collected into the
/// report so the caller controls the output format.
pub fn run_scenario(
    celsius: f64,
    heater: Arc<dyn Appliance>,
    air_conditioner: Arc<dyn Appliance>,
) -> Result<ScenarioReport> {
    let sensor = TemperatureSensor::new();
    let transcript = Arc::new(Transcript::new());
    let adapter = CelsiusToKelvin;

    sensor.add_listener(Arc::new(HeaterPolicy::new(
        heater.clone(),
        transcript.clone(),
    )));
    sensor.add_listener(Arc::new(AirConditionerPolicy::new(
        air_conditioner.clone(),
        transcript.clone(),
    )));

    log::info!("[Scenario] pushing {:?} °C", celsius);
    sensor.set_temperature(celsius)?;

    let kelvin = adapter.convert(celsius);

    Ok(ScenarioReport {
        messages: transcript.take(),
        celsius,
        kelvin,
        heater_on: heater.is_on(),
        air_conditioner_on: air_conditioner.is_on(),
    })
}
