//! Calibration coefficients and their application
//!
//! - [`snapshot`]: cached coefficients and the per-sensor calibration formulas
//! - [`temperature`]: low-pass temperature tracking and bias polynomials
//! - [`rotation`]: board rotation / level trim composition

pub mod rotation;
pub mod snapshot;
pub mod temperature;

pub use rotation::{build_board_transform, BoardRotation, BoardTransform, LevelTrim};
pub use snapshot::{pressure_altitude, CalibrationSnapshot, STANDARD_ATMOSPHERE_PA};
pub use temperature::{
    lpf_alpha, AccelTempModel, BaroTempModel, GyroTempModel, TempCompensation, TempExtent,
    TemperatureBiasFilter, TemperatureFilters,
};
