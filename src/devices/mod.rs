//! Climate appliances controlled by the temperature policies.
//!
//! Each appliance type exists once per process. The shared instance is
//! created lazily on first access and handed out as an `Arc`, so every
//! caller observes the same on/off state.

pub mod air_conditioner;
pub mod announcer;
pub mod heater;
pub mod power_switch;

pub use air_conditioner::AirConditioner;
pub use announcer::{Announcer, Transcript};
pub use heater::Heater;
pub use power_switch::PowerSwitch;

/// A device that can be switched on and off by a policy.
///
/// Switching is unconditional: turning on an appliance that is already on
/// leaves it on and still announces the confirmation.
pub trait Appliance: Send + Sync {
    /// Device name, used as the subject of confirmation messages.
    fn name(&self) -> &'static str;

    /// Whether the appliance is currently powered.
    fn is_on(&self) -> bool;

    /// Change the power state without announcing it.
    fn set_power(&self, on: bool);

    /// Power the appliance on and announce "<name> ligado".
    fn turn_on(&self, announcer: &dyn Announcer) {
        self.set_power(true);
        announcer.announce(format!("{} ligado", self.name()));
    }

    /// Power the appliance off and announce "<name> desligado".
    fn turn_off(&self, announcer: &dyn Announcer) {
        self.set_power(false);
        announcer.announce(format!("{} desligado", self.name()));
    }
}
