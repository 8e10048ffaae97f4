//! Board mounting parameters
//!
//! # Parameters
//!
//! - `BRD_ROLL`, `BRD_PITCH`, `BRD_YAW` - Board rotation (degrees)
//! - `BRD_TRIM_ROLL`, `BRD_TRIM_PITCH` - Level trim (degrees)

use super::error::ParameterError;
use super::storage::ParameterStore;
use crate::calibration::{BoardRotation, LevelTrim};

pub const BOARD_ROLL: &str = "BRD_ROLL";
pub const BOARD_PITCH: &str = "BRD_PITCH";
pub const BOARD_YAW: &str = "BRD_YAW";
pub const TRIM_ROLL: &str = "BRD_TRIM_ROLL";
pub const TRIM_PITCH: &str = "BRD_TRIM_PITCH";

/// Board rotation and level trim
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeSettings {
    pub rotation: BoardRotation,
    pub trim: LevelTrim,
}

impl AttitudeSettings {
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for name in [BOARD_ROLL, BOARD_PITCH, BOARD_YAW, TRIM_ROLL, TRIM_PITCH] {
            store.register_f32(name, 0.0)?;
        }
        Ok(())
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            rotation: BoardRotation::new(
                store.get_f32(BOARD_ROLL, 0.0),
                store.get_f32(BOARD_PITCH, 0.0),
                store.get_f32(BOARD_YAW, 0.0),
            ),
            trim: LevelTrim::new(store.get_f32(TRIM_ROLL, 0.0), store.get_f32(TRIM_PITCH, 0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::storage::ParamValue;

    #[test]
    fn test_from_store() {
        let mut store = ParameterStore::new();
        AttitudeSettings::register_defaults(&mut store).unwrap();
        store.set(BOARD_YAW, ParamValue::Float(90.0)).unwrap();
        store.set(TRIM_PITCH, ParamValue::Float(-1.5)).unwrap();
        let settings = AttitudeSettings::from_store(&store);
        assert_eq!(settings.rotation.yaw_deg, 90.0);
        assert_eq!(settings.trim.pitch_deg, -1.5);
        assert_eq!(settings.trim.roll_deg, 0.0);
    }
}
