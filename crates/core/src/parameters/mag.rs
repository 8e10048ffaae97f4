//! Magnetometer calibration parameters
//!
//! Both the onboard and the auxiliary magnetometer carry a bias vector and a
//! full 3×3 soft-iron transform (row-major, `*_XFRM_rc`).

use super::error::ParameterError;
use super::storage::ParameterStore;
use nalgebra::{Matrix3, Vector3};

pub const MAG_BIAS: [&str; 3] = ["MAG_BIAS_X", "MAG_BIAS_Y", "MAG_BIAS_Z"];
pub const MAG_TRANSFORM: [&str; 9] = [
    "MAG_XFRM_00",
    "MAG_XFRM_01",
    "MAG_XFRM_02",
    "MAG_XFRM_10",
    "MAG_XFRM_11",
    "MAG_XFRM_12",
    "MAG_XFRM_20",
    "MAG_XFRM_21",
    "MAG_XFRM_22",
];

pub const AUX_MAG_BIAS: [&str; 3] = ["AUXMAG_BIAS_X", "AUXMAG_BIAS_Y", "AUXMAG_BIAS_Z"];
pub const AUX_MAG_TRANSFORM: [&str; 9] = [
    "AUXMAG_XFRM_00",
    "AUXMAG_XFRM_01",
    "AUXMAG_XFRM_02",
    "AUXMAG_XFRM_10",
    "AUXMAG_XFRM_11",
    "AUXMAG_XFRM_12",
    "AUXMAG_XFRM_20",
    "AUXMAG_XFRM_21",
    "AUXMAG_XFRM_22",
];

/// Onboard magnetometer calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagCalibration {
    pub bias: Vector3<f32>,
    pub transform: Matrix3<f32>,
}

/// Auxiliary magnetometer calibration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxMagSettings {
    pub bias: Vector3<f32>,
    pub transform: Matrix3<f32>,
}

macro_rules! impl_mag_group {
    ($ty:ident, $bias:ident, $transform:ident) => {
        impl Default for $ty {
            fn default() -> Self {
                Self {
                    bias: Vector3::zeros(),
                    transform: Matrix3::identity(),
                }
            }
        }

        impl $ty {
            /// Register parameters with identity calibration
            pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
                let d = Self::default();
                store.register_vector3(&$bias, d.bias)?;
                store.register_matrix3(&$transform, d.transform)?;
                Ok(())
            }

            /// Load from the store, falling back to identity calibration
            pub fn from_store(store: &ParameterStore) -> Self {
                let d = Self::default();
                Self {
                    bias: store.get_vector3(&$bias, d.bias),
                    transform: store.get_matrix3(&$transform, d.transform),
                }
            }
        }
    };
}

impl_mag_group!(MagCalibration, MAG_BIAS, MAG_TRANSFORM);
impl_mag_group!(AuxMagSettings, AUX_MAG_BIAS, AUX_MAG_TRANSFORM);
