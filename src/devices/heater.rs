//! Heater appliance.

use super::{Appliance, PowerSwitch};
use crate::sensors::Sensor;
use std::sync::{Arc, OnceLock};

static HEATER: OnceLock<Arc<Heater>> = OnceLock::new();

/// Room heater. Off until a policy turns it on.
pub struct Heater {
    power: PowerSwitch,
}

impl Heater {
    /// Create a standalone heater.
    ///
    /// Prefer [`Heater::instance`] outside of tests; this exists so callers
    /// can inject their own device.
    pub fn new() -> Self {
        Self {
            power: PowerSwitch::default(),
        }
    }

    /// The process-wide heater, created powered off on first access.
    pub fn instance() -> Arc<Heater> {
        HEATER.get_or_init(|| Arc::new(Heater::new())).clone()
    }

    /// Number of real on/off transitions so far.
    pub fn version(&self) -> u32 {
        self.power.version()
    }
}

impl Default for Heater {
    fn default() -> Self {
        Self::new()
    }
}

impl Appliance for Heater {
    fn name(&self) -> &'static str {
        "Aquecedor"
    }

    fn is_on(&self) -> bool {
        self.power.get()
    }

    fn set_power(&self, on: bool) {
        if self.power.set(on) != on {
            log::info!("[Device] heater {}", if on { "on" } else { "off" });
        }
    }
}
