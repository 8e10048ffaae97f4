//! Barometer temperature correction parameters
//!
//! # Parameters
//!
//! - `BARO_TC_A` .. `BARO_TC_D` - Cubic pressure bias polynomial (Pa)
//! - `BARO_TC_MIN`, `BARO_TC_MAX` - Temperature range the polynomial covers (°C)

use super::error::ParameterError;
use super::storage::ParameterStore;
use crate::calibration::TempExtent;

pub const BARO_COEFFS: [&str; 4] = ["BARO_TC_A", "BARO_TC_B", "BARO_TC_C", "BARO_TC_D"];
pub const BARO_TEMP_MIN: &str = "BARO_TC_MIN";
pub const BARO_TEMP_MAX: &str = "BARO_TC_MAX";

/// Barometer correction polynomial `a + b·t + c·t² + d·t³`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BaroCorrectionSettings {
    /// `[a, b, c, d]`
    pub coefficients: [f32; 4],
    pub temp_extent: TempExtent,
}

impl BaroCorrectionSettings {
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for name in BARO_COEFFS {
            store.register_f32(name, 0.0)?;
        }
        store.register_f32(BARO_TEMP_MIN, 0.0)?;
        store.register_f32(BARO_TEMP_MAX, 0.0)?;
        Ok(())
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        let mut coefficients = [0.0; 4];
        for (c, name) in coefficients.iter_mut().zip(BARO_COEFFS) {
            *c = store.get_f32(name, 0.0);
        }
        Self {
            coefficients,
            temp_extent: TempExtent::new(
                store.get_f32(BARO_TEMP_MIN, 0.0),
                store.get_f32(BARO_TEMP_MAX, 0.0),
            ),
        }
    }
}
