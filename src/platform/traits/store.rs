//! Published-object store interface

use flight_sensors_core::sensors::SensorObject;

/// Sink for calibrated measurements
///
/// Publication is fire-and-forget; consumers read the latest record.
pub trait ObjectStore {
    fn set(&mut self, object: SensorObject);
}
