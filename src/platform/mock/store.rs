//! Mock object store

use crate::platform::traits::ObjectStore;
use flight_sensors_core::sensors::{
    AccelSensor, AuxMagSensor, BaroSensor, GyroSensor, MagSensor, SensorObject,
};
use std::vec::Vec;

/// Keeps every published record in order
#[derive(Debug, Default)]
pub struct MockObjectStore {
    published: Vec<SensorObject>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> &[SensorObject] {
        &self.published
    }

    pub fn clear(&mut self) {
        self.published.clear();
    }

    pub fn accel(&self) -> Vec<AccelSensor> {
        self.published
            .iter()
            .filter_map(|o| match o {
                SensorObject::Accel(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn gyro(&self) -> Vec<GyroSensor> {
        self.published
            .iter()
            .filter_map(|o| match o {
                SensorObject::Gyro(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn mag(&self) -> Vec<MagSensor> {
        self.published
            .iter()
            .filter_map(|o| match o {
                SensorObject::Mag(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn aux_mag(&self) -> Vec<AuxMagSensor> {
        self.published
            .iter()
            .filter_map(|o| match o {
                SensorObject::AuxMag(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn baro(&self) -> Vec<BaroSensor> {
        self.published
            .iter()
            .filter_map(|o| match o {
                SensorObject::Baro(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl ObjectStore for MockObjectStore {
    fn set(&mut self, object: SensorObject) {
        self.published.push(object);
    }
}
