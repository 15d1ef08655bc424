//! Temperature sensor state with listener fan-out.

use super::{Sensor, TemperatureListener};
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Temperature sensor (subject).
///
/// Stores the current reading and an ordered list of listeners. Duplicate
/// registrations are allowed; each one is notified separately.
///
/// # Example
/// ```
/// use climate_patterns::{TemperatureListener, TemperatureSensor};
/// use std::sync::Arc;
///
/// let sensor = TemperatureSensor::new();
/// let listener: Arc<dyn TemperatureListener> = Arc::new(|celsius: f64| -> climate_patterns::Result<()> {
///     println!("now {celsius}");
///     Ok(())
/// });
/// sensor.add_listener(listener.clone());
/// sensor.set_temperature(21.5).unwrap();
/// assert!(sensor.remove_listener(&listener));
/// ```
pub struct TemperatureSensor {
    reading: RwLock<f64>,
    version: AtomicU32,
    listeners: RwLock<Vec<Arc<dyn TemperatureListener>>>,
}

impl TemperatureSensor {
    /// Create a sensor reading 0.0 with no listeners.
    pub fn new() -> Self {
        Self {
            reading: RwLock::new(0.0),
            version: AtomicU32::new(0),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Get the latest reading in degrees Celsius.
    pub fn current(&self) -> f64 {
        *self.reading.read()
    }

    /// Number of registered listeners, duplicates included.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Append a listener to the notification order.
    pub fn add_listener(&self, listener: Arc<dyn TemperatureListener>) {
        log::debug!("[Sensor] registered listener '{}'", listener.name());
        self.listeners.write().push(listener);
    }

    /// Remove the first registration of `listener`.
    ///
    /// Listeners are matched by handle identity. Returns `false` if it was
    /// not registered.
    pub fn remove_listener(&self, listener: &Arc<dyn TemperatureListener>) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                log::debug!("[Sensor] removed listener '{}'", listener.name());
                true
            }
            None => false,
        }
    }

    /// Store a new reading and notify every listener in registration order.
    ///
    /// Listeners are called on a snapshot of the list, so a listener may add
    /// or remove registrations without affecting the current fan-out. The
    /// first listener error aborts the fan-out and is returned.
    pub fn set_temperature(&self, celsius: f64) -> Result<()> {
        *self.reading.write() = celsius;
        self.version.fetch_add(1, Ordering::SeqCst);

        let snapshot: Vec<Arc<dyn TemperatureListener>> = self.listeners.read().clone();
        log::info!(
            "[Sensor] temperature {:?} °C, notifying {} listener(s)",
            celsius,
            snapshot.len()
        );
        for listener in &snapshot {
            if let Err(e) = listener.on_temperature_changed(celsius) {
                log::warn!("[Sensor] listener '{}' failed: {}", listener.name(), e);
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for TemperatureSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for TemperatureSensor {
    fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }
}
