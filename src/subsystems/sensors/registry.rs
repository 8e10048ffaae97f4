//! Sensor registry
//!
//! Stable-ordered, fixed-capacity list of the drivers the task visits each
//! iteration. Order is registration order and never changes.

use crate::devices::traits::SensorDriver;
use flight_sensors_core::SensorsError;
use heapless::Vec;

/// Maximum drivers one sensors task can own
pub const MAX_SENSORS: usize = 8;

/// Ordered set of sensor drivers
pub struct SensorRegistry<D> {
    sensors: Vec<D, MAX_SENSORS>,
}

impl<D: SensorDriver> SensorRegistry<D> {
    pub const fn new() -> Self {
        Self { sensors: Vec::new() }
    }

    /// Append a driver; returns its index
    pub fn register(&mut self, sensor: D) -> Result<usize, SensorsError> {
        self.sensors
            .push(sensor)
            .map_err(|_| SensorsError::RegistryFull)?;
        Ok(self.sensors.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&D> {
        self.sensors.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut D> {
        self.sensors.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.sensors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut D> {
        self.sensors.iter_mut()
    }
}

impl<D: SensorDriver> Default for SensorRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::sensors::MockSensor;
    use flight_sensors_core::sensors::SensorKind;

    #[test]
    fn test_registration_order_is_stable() {
        let mut registry = SensorRegistry::new();
        assert_eq!(registry.register(MockSensor::gyro_accel()), Ok(0));
        assert_eq!(registry.register(MockSensor::mag()), Ok(1));
        assert_eq!(registry.register(MockSensor::baro()), Ok(2));

        let kinds: std::vec::Vec<_> = registry.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            [SensorKind::GYRO_ACCEL, SensorKind::MAG, SensorKind::BARO]
        );
    }

    #[test]
    fn test_capacity_is_checked() {
        let mut registry = SensorRegistry::new();
        for _ in 0..MAX_SENSORS {
            registry.register(MockSensor::baro()).unwrap();
        }
        assert_eq!(
            registry.register(MockSensor::baro()),
            Err(SensorsError::RegistryFull)
        );
        assert_eq!(registry.len(), MAX_SENSORS);
    }
}
