//! Power state shared by the climate appliances.

use crate::sensors::Sensor;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Powered/unpowered flag of one appliance.
///
/// Counts real power transitions: switching an appliance that is already in
/// the requested state leaves the transition count alone. The count is
/// exposed through [`Sensor::version`].
pub struct PowerSwitch {
    powered: AtomicBool,
    transitions: AtomicU32,
}

impl PowerSwitch {
    pub fn new(powered: bool) -> Self {
        Self {
            powered: AtomicBool::new(powered),
            transitions: AtomicU32::new(0),
        }
    }

    /// Whether the appliance is powered.
    pub fn get(&self) -> bool {
        self.powered.load(Ordering::SeqCst)
    }

    /// Apply a power state and return the state it replaced.
    pub fn set(&self, powered: bool) -> bool {
        let previous = self.powered.swap(powered, Ordering::SeqCst);
        if previous != powered {
            self.transitions.fetch_add(1, Ordering::SeqCst);
        }
        previous
    }
}

impl Default for PowerSwitch {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Sensor for PowerSwitch {
    fn version(&self) -> u32 {
        self.transitions.load(Ordering::SeqCst)
    }
}
