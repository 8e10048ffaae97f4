//! Accelerometer / gyroscope calibration parameters
//!
//! # Parameters
//!
//! - `AG_ACC_BIAS_{X,Y,Z}` - Accelerometer bias (raw scaled units)
//! - `AG_ACC_SCL_{X,Y,Z}` - Accelerometer scale
//! - `AG_ACC_TC_{X,Y,Z}` - Accelerometer linear temperature coefficient
//! - `AG_GYR_BIAS_{X,Y,Z}` - Gyroscope bias
//! - `AG_GYR_SCL_{X,Y,Z}` - Gyroscope scale
//! - `AG_GYR_TC_{X,Y,Z}` - Gyroscope linear temperature coefficient
//! - `AG_GYR_TC2_{X,Y,Z}` - Gyroscope quadratic temperature coefficient
//! - `AG_TC_MIN`, `AG_TC_MAX` - Temperature range the coefficients cover (°C)

use super::error::ParameterError;
use super::storage::ParameterStore;
use crate::calibration::TempExtent;
use nalgebra::Vector3;

pub const ACCEL_BIAS: [&str; 3] = ["AG_ACC_BIAS_X", "AG_ACC_BIAS_Y", "AG_ACC_BIAS_Z"];
pub const ACCEL_SCALE: [&str; 3] = ["AG_ACC_SCL_X", "AG_ACC_SCL_Y", "AG_ACC_SCL_Z"];
pub const ACCEL_TEMP_COEFF: [&str; 3] = ["AG_ACC_TC_X", "AG_ACC_TC_Y", "AG_ACC_TC_Z"];
pub const GYRO_BIAS: [&str; 3] = ["AG_GYR_BIAS_X", "AG_GYR_BIAS_Y", "AG_GYR_BIAS_Z"];
pub const GYRO_SCALE: [&str; 3] = ["AG_GYR_SCL_X", "AG_GYR_SCL_Y", "AG_GYR_SCL_Z"];
pub const GYRO_TEMP_COEFF: [&str; 3] = ["AG_GYR_TC_X", "AG_GYR_TC_Y", "AG_GYR_TC_Z"];
pub const GYRO_TEMP_COEFF2: [&str; 3] = ["AG_GYR_TC2_X", "AG_GYR_TC2_Y", "AG_GYR_TC2_Z"];
pub const TEMP_MIN: &str = "AG_TC_MIN";
pub const TEMP_MAX: &str = "AG_TC_MAX";

/// Accelerometer and gyroscope calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelGyroSettings {
    pub accel_bias: Vector3<f32>,
    pub accel_scale: Vector3<f32>,
    pub accel_temp_coeff: Vector3<f32>,
    pub gyro_bias: Vector3<f32>,
    pub gyro_scale: Vector3<f32>,
    pub gyro_temp_coeff: Vector3<f32>,
    pub gyro_temp_coeff2: Vector3<f32>,
    pub temp_extent: TempExtent,
}

impl Default for AccelGyroSettings {
    fn default() -> Self {
        Self {
            accel_bias: Vector3::zeros(),
            accel_scale: Vector3::repeat(1.0),
            accel_temp_coeff: Vector3::zeros(),
            gyro_bias: Vector3::zeros(),
            gyro_scale: Vector3::repeat(1.0),
            gyro_temp_coeff: Vector3::zeros(),
            gyro_temp_coeff2: Vector3::zeros(),
            temp_extent: TempExtent::default(),
        }
    }
}

impl AccelGyroSettings {
    /// Register accel/gyro parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let d = Self::default();
        store.register_vector3(&ACCEL_BIAS, d.accel_bias)?;
        store.register_vector3(&ACCEL_SCALE, d.accel_scale)?;
        store.register_vector3(&ACCEL_TEMP_COEFF, d.accel_temp_coeff)?;
        store.register_vector3(&GYRO_BIAS, d.gyro_bias)?;
        store.register_vector3(&GYRO_SCALE, d.gyro_scale)?;
        store.register_vector3(&GYRO_TEMP_COEFF, d.gyro_temp_coeff)?;
        store.register_vector3(&GYRO_TEMP_COEFF2, d.gyro_temp_coeff2)?;
        store.register_f32(TEMP_MIN, d.temp_extent.min)?;
        store.register_f32(TEMP_MAX, d.temp_extent.max)?;
        Ok(())
    }

    /// Load accel/gyro parameters, falling back to defaults
    pub fn from_store(store: &ParameterStore) -> Self {
        let d = Self::default();
        Self {
            accel_bias: store.get_vector3(&ACCEL_BIAS, d.accel_bias),
            accel_scale: store.get_vector3(&ACCEL_SCALE, d.accel_scale),
            accel_temp_coeff: store.get_vector3(&ACCEL_TEMP_COEFF, d.accel_temp_coeff),
            gyro_bias: store.get_vector3(&GYRO_BIAS, d.gyro_bias),
            gyro_scale: store.get_vector3(&GYRO_SCALE, d.gyro_scale),
            gyro_temp_coeff: store.get_vector3(&GYRO_TEMP_COEFF, d.gyro_temp_coeff),
            gyro_temp_coeff2: store.get_vector3(&GYRO_TEMP_COEFF2, d.gyro_temp_coeff2),
            temp_extent: TempExtent::new(
                store.get_f32(TEMP_MIN, d.temp_extent.min),
                store.get_f32(TEMP_MAX, d.temp_extent.max),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::storage::ParamValue;

    #[test]
    fn test_register_defaults() {
        let mut store = ParameterStore::new();
        AccelGyroSettings::register_defaults(&mut store).unwrap();
        assert_eq!(store.len(), 23);
        assert_eq!(store.get("AG_ACC_SCL_Y"), Some(&ParamValue::Float(1.0)));
    }

    #[test]
    fn test_from_store_defaults() {
        let mut store = ParameterStore::new();
        AccelGyroSettings::register_defaults(&mut store).unwrap();
        assert_eq!(AccelGyroSettings::from_store(&store), AccelGyroSettings::default());
    }

    #[test]
    fn test_from_store_custom() {
        let mut store = ParameterStore::new();
        AccelGyroSettings::register_defaults(&mut store).unwrap();
        store.set("AG_GYR_BIAS_Z", ParamValue::Float(0.02)).unwrap();
        store.set("AG_TC_MAX", ParamValue::Float(60.0)).unwrap();
        let settings = AccelGyroSettings::from_store(&store);
        assert_eq!(settings.gyro_bias.z, 0.02);
        assert_eq!(settings.temp_extent.max, 60.0);
    }
}
