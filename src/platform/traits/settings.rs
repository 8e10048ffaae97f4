//! Settings source interface

use flight_sensors_core::parameters::{SensorSettings, SettingsGroup};

/// Provider of the sensor settings groups
///
/// A change to any subscribed group raises a pending notification. The
/// sensors task consumes it with [`take_changed`](Self::take_changed) at the
/// top of each iteration and hands the source to its
/// [`SettingsSynchronizer`](crate::subsystems::sensors::SettingsSynchronizer),
/// so a change is in effect no later than the next iteration.
pub trait SettingsSource {
    /// Current values of every group
    fn load(&self) -> SensorSettings;

    /// Request change notification for a group
    fn subscribe(&mut self, group: SettingsGroup);

    /// Consume the pending notification
    ///
    /// Returns `true` once after one or more subscribed groups changed.
    fn take_changed(&mut self) -> bool;
}
