//! Settings synchronizer
//!
//! Turns settings-change notifications into a fresh [`CalibrationSnapshot`].
//! The snapshot is derived in one pass and installed with a single
//! `with_mut`, so the sensors loop sees either the old or the new
//! calibration, never a mix.

use crate::core::traits::SharedState;
use crate::platform::traits::SettingsSource;
use crate::{log_debug, log_info};
use flight_sensors_core::calibration::CalibrationSnapshot;
use flight_sensors_core::parameters::SensorSettings;

/// Handle the settings side uses to publish calibration
///
/// Cheap to copy; every copy writes the same shared snapshot.
pub struct SettingsSynchronizer<'a, S> {
    calibration: &'a S,
}

impl<S> Clone for SettingsSynchronizer<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SettingsSynchronizer<'_, S> {}

impl<'a, S: SharedState<CalibrationSnapshot>> SettingsSynchronizer<'a, S> {
    pub fn new(calibration: &'a S) -> Self {
        Self { calibration }
    }

    /// Change callback: reload every group from the source and install
    pub fn settings_updated<C: SettingsSource>(&self, source: &C) -> CalibrationSnapshot {
        self.install(&source.load())
    }

    /// Derive and install a snapshot from already-loaded settings
    pub fn install(&self, settings: &SensorSettings) -> CalibrationSnapshot {
        let snapshot = CalibrationSnapshot::from_settings(settings);
        self.calibration.replace(snapshot);

        log_info!(
            "sensors: calibration updated (rotate={})",
            snapshot.needs_rotation
        );
        log_debug!(
            "sensors: temp comp accel={} gyro={} baro={}",
            snapshot.accel_temp.enabled,
            snapshot.gyro_temp.enabled,
            snapshot.baro_temp.enabled
        );
        snapshot
    }

    /// Current snapshot
    pub fn current(&self) -> CalibrationSnapshot {
        self.calibration.snapshot()
    }
}
