//! Published measurement records
//!
//! One record is built per processed sensor per iteration and handed to the
//! object store. Records are plain values; the store owns any history.

use nalgebra::Vector3;

/// Calibrated acceleration (m/s² after driver scaling), board frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSensor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Degrees Celsius
    pub temperature: f32,
}

/// Calibrated angular rate, board frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroSensor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Degrees Celsius
    pub temperature: f32,
}

/// Calibrated onboard magnetic field, board frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagSensor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Degrees Celsius
    pub temperature: f32,
}

/// Calibrated auxiliary magnetic field, board frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxMagSensor {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Barometric altitude and the pressure it was derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaroSensor {
    /// Meters above the standard-atmosphere datum
    pub altitude: f32,
    /// Degrees Celsius
    pub temperature: f32,
    /// Temperature-corrected pressure (Pa)
    pub pressure: f32,
}

macro_rules! impl_vector_record {
    ($ty:ident) => {
        impl $ty {
            /// Record values as a vector
            pub fn vector(&self) -> Vector3<f32> {
                Vector3::new(self.x, self.y, self.z)
            }
        }
    };
}

impl_vector_record!(AccelSensor);
impl_vector_record!(GyroSensor);
impl_vector_record!(MagSensor);
impl_vector_record!(AuxMagSensor);

impl AccelSensor {
    pub fn new(value: Vector3<f32>, temperature: f32) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            temperature,
        }
    }
}

impl GyroSensor {
    pub fn new(value: Vector3<f32>, temperature: f32) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            temperature,
        }
    }
}

impl MagSensor {
    pub fn new(value: Vector3<f32>, temperature: f32) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            temperature,
        }
    }
}

impl AuxMagSensor {
    pub fn new(value: Vector3<f32>) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

/// Any record the pipeline publishes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorObject {
    Accel(AccelSensor),
    Gyro(GyroSensor),
    Mag(MagSensor),
    AuxMag(AuxMagSensor),
    Baro(BaroSensor),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_round_trip_vectors() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(AuxMagSensor::new(v).vector(), v);
        let mag = MagSensor::new(v, 21.0);
        assert_eq!(mag.vector(), v);
        assert_eq!(mag.temperature, 21.0);
    }
}
