//! Air conditioner appliance.

use super::{Appliance, PowerSwitch};
use crate::sensors::Sensor;
use std::sync::{Arc, OnceLock};

static AIR_CONDITIONER: OnceLock<Arc<AirConditioner>> = OnceLock::new();

/// Air conditioner. Off until a policy turns it on.
pub struct AirConditioner {
    power: PowerSwitch,
}

impl AirConditioner {
    /// Create a standalone air conditioner.
    pub fn new() -> Self {
        Self {
            power: PowerSwitch::default(),
        }
    }

    /// The process-wide air conditioner, created powered off on first access.
    pub fn instance() -> Arc<AirConditioner> {
        AIR_CONDITIONER
            .get_or_init(|| Arc::new(AirConditioner::new()))
            .clone()
    }

    /// Number of real on/off transitions so far.
    pub fn version(&self) -> u32 {
        self.power.version()
    }
}

impl Default for AirConditioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Appliance for AirConditioner {
    fn name(&self) -> &'static str {
        "Ar condicionado"
    }

    fn is_on(&self) -> bool {
        self.power.get()
    }

    fn set_power(&self, on: bool) {
        if self.power.set(on) != on {
            log::info!("[Device] air conditioner {}", if on { "on" } else { "off" });
        }
    }
}
