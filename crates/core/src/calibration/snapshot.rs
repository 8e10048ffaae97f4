//! Calibration snapshot and application
//!
//! A [`CalibrationSnapshot`] holds every coefficient the loop needs, derived in
//! one pass from [`SensorSettings`]. The loop copies it once per iteration;
//! the settings side replaces it as a whole.

use super::rotation::{build_board_transform, combine_transform};
use super::temperature::{AccelTempModel, BaroTempModel, GyroTempModel};
use crate::parameters::SensorSettings;
use nalgebra::{Matrix3, Vector3};

/// Standard atmosphere at sea level (Pa)
pub const STANDARD_ATMOSPHERE_PA: f32 = 101_325.0;

/// Cached calibration coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationSnapshot {
    /// Accelerometer bias, subtracted before scaling
    pub accel_bias: Vector3<f32>,
    pub accel_scale: Vector3<f32>,
    /// Gyroscope bias, subtracted after scaling
    pub gyro_bias: Vector3<f32>,
    pub gyro_scale: Vector3<f32>,
    pub accel_temp: AccelTempModel,
    pub gyro_temp: GyroTempModel,
    pub baro_temp: BaroTempModel,
    /// Board rotation (frame rotation, board to airframe)
    pub rotation: Matrix3<f32>,
    /// Informational; rotation is always applied
    pub needs_rotation: bool,
    pub mag_bias: Vector3<f32>,
    /// Magnetometer calibration × board rotation
    pub mag_transform: Matrix3<f32>,
    pub aux_mag_bias: Vector3<f32>,
    /// Aux magnetometer calibration × board rotation
    pub aux_mag_transform: Matrix3<f32>,
}

impl Default for CalibrationSnapshot {
    fn default() -> Self {
        Self::from_settings(&SensorSettings::default())
    }
}

impl CalibrationSnapshot {
    /// Derive all cached coefficients from the settings groups
    pub fn from_settings(settings: &SensorSettings) -> Self {
        let ag = &settings.accel_gyro;
        let board = build_board_transform(&settings.attitude.rotation, &settings.attitude.trim);

        Self {
            accel_bias: ag.accel_bias,
            accel_scale: ag.accel_scale,
            gyro_bias: ag.gyro_bias,
            gyro_scale: ag.gyro_scale,
            accel_temp: AccelTempModel::new(ag.accel_temp_coeff, ag.temp_extent),
            gyro_temp: GyroTempModel::new(ag.gyro_temp_coeff, ag.gyro_temp_coeff2, ag.temp_extent),
            baro_temp: BaroTempModel::new(settings.baro.coefficients, settings.baro.temp_extent),
            rotation: board.matrix,
            needs_rotation: board.needs_rotation,
            mag_bias: settings.mag.bias,
            mag_transform: combine_transform(&settings.mag.transform, &board.matrix),
            aux_mag_bias: settings.aux_mag.bias,
            aux_mag_transform: combine_transform(&settings.aux_mag.transform, &board.matrix),
        }
    }

    /// Calibrate an averaged accelerometer sample
    ///
    /// ```text
    /// out = R · ((raw − bias) .* scale − temp_bias)
    /// ```
    pub fn apply_accel(&self, raw: Vector3<f32>, temp_bias: Vector3<f32>) -> Vector3<f32> {
        let corrected = (raw - self.accel_bias).component_mul(&self.accel_scale) - temp_bias;
        self.rotation * corrected
    }

    /// Calibrate an averaged gyroscope sample
    ///
    /// ```text
    /// out = R · (raw .* scale − bias − temp_bias)
    /// ```
    pub fn apply_gyro(&self, raw: Vector3<f32>, temp_bias: Vector3<f32>) -> Vector3<f32> {
        let corrected = raw.component_mul(&self.gyro_scale) - self.gyro_bias - temp_bias;
        self.rotation * corrected
    }

    /// Calibrate an averaged onboard magnetometer sample
    pub fn apply_mag(&self, raw: Vector3<f32>) -> Vector3<f32> {
        self.mag_transform * (raw - self.mag_bias)
    }

    /// Calibrate an averaged auxiliary magnetometer sample
    pub fn apply_aux_mag(&self, raw: Vector3<f32>) -> Vector3<f32> {
        self.aux_mag_transform * (raw - self.aux_mag_bias)
    }
}

/// Pressure altitude from the standard-atmosphere model
///
/// ```text
/// h = 44330 · (1 − (p / p0)^(1/5.255))
/// ```
///
/// Non-positive or `NaN` pressure yields `NaN`.
pub fn pressure_altitude(pressure_pa: f32) -> f32 {
    if pressure_pa.is_nan() || pressure_pa <= 0.0 {
        return f32::NAN;
    }
    44330.0 * (1.0 - libm::powf(pressure_pa / STANDARD_ATMOSPHERE_PA, 1.0 / 5.255))
}
