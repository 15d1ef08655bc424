//! Threshold policies that drive the appliances from sensor readings.
//!
//! The thresholds are fixed. The heater and air conditioner bands are
//! deliberately not symmetric: between 15 and 22 °C the heater holds its
//! state, and between 15 and 29 °C the air conditioner holds its state.

use crate::devices::{Announcer, Appliance};
use crate::error::Result;
use crate::sensors::TemperatureListener;
use std::sync::Arc;

/// Below this the heater turns on.
pub const HEATER_ON_BELOW: f64 = 15.0;
/// Above this the heater turns off.
pub const HEATER_OFF_ABOVE: f64 = 22.0;
/// Above this the air conditioner turns on.
pub const AIR_CONDITIONER_ON_ABOVE: f64 = 29.0;
/// Below this the air conditioner turns off.
pub const AIR_CONDITIONER_OFF_BELOW: f64 = 15.0;

/// What a policy decided to do with its appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdAction {
    TurnOn,
    TurnOff,
    /// Reading is inside the no-op band.
    Hold,
}

impl ThresholdAction {
    /// Apply the action to an appliance, announcing any switch.
    pub fn apply(self, appliance: &dyn Appliance, announcer: &dyn Announcer) {
        match self {
            ThresholdAction::TurnOn => appliance.turn_on(announcer),
            ThresholdAction::TurnOff => appliance.turn_off(announcer),
            ThresholdAction::Hold => {}
        }
    }
}

/// Heater rule: on below 15 °C, off above 22 °C.
pub fn heater_action(celsius: f64) -> ThresholdAction {
    if celsius < HEATER_ON_BELOW {
        ThresholdAction::TurnOn
    } else if celsius > HEATER_OFF_ABOVE {
        ThresholdAction::TurnOff
    } else {
        ThresholdAction::Hold
    }
}

/// Air conditioner rule: on above 29 °C, off below 15 °C.
pub fn air_conditioner_action(celsius: f64) -> ThresholdAction {
    if celsius > AIR_CONDITIONER_ON_ABOVE {
        ThresholdAction::TurnOn
    } else if celsius < AIR_CONDITIONER_OFF_BELOW {
        ThresholdAction::TurnOff
    } else {
        ThresholdAction::Hold
    }
}

/// Listener that applies [`heater_action`] to its heater.
pub struct HeaterPolicy {
    heater: Arc<dyn Appliance>,
    announcer: Arc<dyn Announcer>,
}

impl HeaterPolicy {
    pub fn new(heater: Arc<dyn Appliance>, announcer: Arc<dyn Announcer>) -> Self {
        Self { heater, announcer }
    }
}

impl TemperatureListener for HeaterPolicy {
    fn name(&self) -> &str {
        "heater-policy"
    }

    fn on_temperature_changed(&self, celsius: f64) -> Result<()> {
        let action = heater_action(celsius);
        log::debug!("[Policy] heater: {:?} at {:?} °C", action, celsius);
        action.apply(self.heater.as_ref(), self.announcer.as_ref());
        Ok(())
    }
}

/// Listener that applies [`air_conditioner_action`] to its air conditioner.
pub struct AirConditionerPolicy {
    air_conditioner: Arc<dyn Appliance>,
    announcer: Arc<dyn Announcer>,
}

impl AirConditionerPolicy {
    pub fn new(air_conditioner: Arc<dyn Appliance>, announcer: Arc<dyn Announcer>) -> Self {
        Self {
            air_conditioner,
            announcer,
        }
    }
}

impl TemperatureListener for AirConditionerPolicy {
    fn name(&self) -> &str {
        "air-conditioner-policy"
    }

    fn on_temperature_changed(&self, celsius: f64) -> Result<()> {
        let action = air_conditioner_action(celsius);
        log::debug!("[Policy] air conditioner: {:?} at {:?} °C", action, celsius);
        action.apply(self.air_conditioner.as_ref(), self.announcer.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{AirConditioner, Heater, Transcript};
    use crate::sensors::TemperatureSensor;

    struct Rig {
        sensor: TemperatureSensor,
        heater: Arc<Heater>,
        ac: Arc<AirConditioner>,
        transcript: Arc<Transcript>,
    }

    fn wired() -> Rig {
        let heater = Arc::new(Heater::new());
        let ac = Arc::new(AirConditioner::new());
        let transcript = Arc::new(Transcript::new());
        let sensor = TemperatureSensor::new();
        sensor.add_listener(Arc::new(HeaterPolicy::new(
            heater.clone(),
            transcript.clone(),
        )));
        sensor.add_listener(Arc::new(AirConditionerPolicy::new(
            ac.clone(),
            transcript.clone(),
        )));
        Rig {
            sensor,
            heater,
            ac,
            transcript,
        }
    }

    #[test]
    fn test_heater_bands() {
        assert_eq!(heater_action(-40.0), ThresholdAction::TurnOn);
        assert_eq!(heater_action(14.99), ThresholdAction::TurnOn);
        assert_eq!(heater_action(15.0), ThresholdAction::Hold);
        assert_eq!(heater_action(22.0), ThresholdAction::Hold);
        assert_eq!(heater_action(22.01), ThresholdAction::TurnOff);
        assert_eq!(heater_action(35.0), ThresholdAction::TurnOff);
    }

    #[test]
    fn test_air_conditioner_bands() {
        assert_eq!(air_conditioner_action(10.0), ThresholdAction::TurnOff);
        assert_eq!(air_conditioner_action(15.0), ThresholdAction::Hold);
        assert_eq!(air_conditioner_action(25.0), ThresholdAction::Hold);
        assert_eq!(air_conditioner_action(29.0), ThresholdAction::Hold);
        assert_eq!(air_conditioner_action(29.5), ThresholdAction::TurnOn);
    }

    #[test]
    fn test_cold_reading_heats() {
        let rig = wired();
        rig.ac.turn_on(rig.transcript.as_ref());
        rig.transcript.take();

        rig.sensor.set_temperature(10.0).unwrap();
        assert!(rig.heater.is_on());
        assert!(!rig.ac.is_on());
        assert_eq!(
            rig.transcript.messages(),
            vec!["Aquecedor ligado", "Ar condicionado desligado"]
        );
    }

    #[test]
    fn test_comfort_band_keeps_state() {
        let rig = wired();
        rig.sensor.set_temperature(5.0).unwrap();
        assert!(rig.heater.is_on());
        assert!(!rig.ac.is_on());
        rig.transcript.take();

        for celsius in [15.0, 18.0, 22.0] {
            rig.sensor.set_temperature(celsius).unwrap();
            assert!(rig.heater.is_on());
            assert!(!rig.ac.is_on());
        }
        // Holding announces nothing
        assert!(rig.transcript.messages().is_empty());
    }

    #[test]
    fn test_warm_reading_stops_heater_only() {
        let rig = wired();
        rig.heater.turn_on(rig.transcript.as_ref());
        rig.ac.turn_on(rig.transcript.as_ref());

        rig.sensor.set_temperature(25.0).unwrap();
        assert!(!rig.heater.is_on());
        // Air conditioner holds between 15 and 29
        assert!(rig.ac.is_on());

        rig.ac.turn_off(rig.transcript.as_ref());
        rig.sensor.set_temperature(29.0).unwrap();
        assert!(!rig.ac.is_on());
    }

    #[test]
    fn test_hot_reading_cools() {
        let rig = wired();
        rig.sensor.set_temperature(31.0).unwrap();
        assert!(rig.ac.is_on());
        assert!(!rig.heater.is_on());
        assert_eq!(
            rig.transcript.messages(),
            vec!["Aquecedor desligado", "Ar condicionado ligado"]
        );
    }
}
