//! Board rotation and level trim
//!
//! The flight controller may be mounted rotated relative to the airframe.
//! Board rotation and level trim are given as roll/pitch/yaw in degrees
//! (aerospace ZYX order), composed as quaternions and converted once, on
//! settings change, into the direction-cosine matrix applied to every
//! inertial sample.
//!
//! # Handedness
//!
//! The matrix maps board-frame vectors into the airframe frame, i.e. it is
//! the frame rotation (transpose of the active rotation). A +90° yaw mount
//! therefore maps board X to −Y and board Y to +X.

use core::f32::consts::PI;
use nalgebra::{Matrix3, UnitQuaternion};

/// Angles at or below this magnitude count as zero (degrees)
pub const ZERO_ROT_ANGLE: f32 = 0.00001;

const DEG_TO_RAD: f32 = PI / 180.0;

/// Mounting rotation of the board (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardRotation {
    pub roll_deg: f32,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl BoardRotation {
    pub const fn new(roll_deg: f32, pitch_deg: f32, yaw_deg: f32) -> Self {
        Self {
            roll_deg,
            pitch_deg,
            yaw_deg,
        }
    }

    fn is_zero(&self) -> bool {
        is_zero_angle(self.roll_deg) && is_zero_angle(self.pitch_deg) && is_zero_angle(self.yaw_deg)
    }
}

/// Level trim applied on top of the board rotation (degrees, no yaw)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelTrim {
    pub roll_deg: f32,
    pub pitch_deg: f32,
}

impl LevelTrim {
    pub const fn new(roll_deg: f32, pitch_deg: f32) -> Self {
        Self {
            roll_deg,
            pitch_deg,
        }
    }

    fn is_zero(&self) -> bool {
        is_zero_angle(self.roll_deg) && is_zero_angle(self.pitch_deg)
    }
}

/// Rotation matrix plus a hint whether it differs from identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardTransform {
    pub matrix: Matrix3<f32>,
    /// Informational only; the matrix is always applied
    pub needs_rotation: bool,
}

impl Default for BoardTransform {
    fn default() -> Self {
        Self {
            matrix: Matrix3::identity(),
            needs_rotation: false,
        }
    }
}

fn is_zero_angle(deg: f32) -> bool {
    libm::fabsf(deg) <= ZERO_ROT_ANGLE
}

/// Quaternion from roll/pitch/yaw in degrees (ZYX)
pub fn euler_deg_to_quaternion(roll_deg: f32, pitch_deg: f32, yaw_deg: f32) -> UnitQuaternion<f32> {
    UnitQuaternion::from_euler_angles(
        roll_deg * DEG_TO_RAD,
        pitch_deg * DEG_TO_RAD,
        yaw_deg * DEG_TO_RAD,
    )
}

/// Direction-cosine matrix for a quaternion (frame rotation)
pub fn quaternion_to_dcm(q: &UnitQuaternion<f32>) -> Matrix3<f32> {
    q.to_rotation_matrix().into_inner().transpose()
}

/// Compose board rotation and trim into a single transform
///
/// Trim is composed as `rotation ⊗ trim` only when it is non-zero. The
/// conversion path is the same for the identity case; only the hint differs.
pub fn build_board_transform(rotation: &BoardRotation, trim: &LevelTrim) -> BoardTransform {
    let mut q = euler_deg_to_quaternion(rotation.roll_deg, rotation.pitch_deg, rotation.yaw_deg);
    let mut needs_rotation = !rotation.is_zero();

    if !trim.is_zero() {
        let trim_q = euler_deg_to_quaternion(trim.roll_deg, trim.pitch_deg, 0.0);
        q *= trim_q;
        needs_rotation = true;
    }

    BoardTransform {
        matrix: quaternion_to_dcm(&q),
        needs_rotation,
    }
}

/// Fold the board rotation into a magnetometer calibration transform
///
/// ```text
/// combined = calibration × rotation
/// ```
pub fn combine_transform(calibration: &Matrix3<f32>, rotation: &Matrix3<f32>) -> Matrix3<f32> {
    calibration * rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn approx_vec(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let t = build_board_transform(&BoardRotation::default(), &LevelTrim::default());
        assert_eq!(t.matrix, Matrix3::identity());
        assert!(!t.needs_rotation);
    }

    #[test]
    fn test_sub_threshold_angles_count_as_zero() {
        let t = build_board_transform(
            &BoardRotation::new(0.000001, 0.0, -0.000001),
            &LevelTrim::new(0.000005, 0.0),
        );
        assert!(!t.needs_rotation);
    }

    #[test]
    fn test_yaw_90_axis_mapping() {
        let t = build_board_transform(&BoardRotation::new(0.0, 0.0, 90.0), &LevelTrim::default());
        assert!(t.needs_rotation);
        assert!(approx_vec(t.matrix * Vector3::x(), Vector3::new(0.0, -1.0, 0.0)));
        assert!(approx_vec(t.matrix * Vector3::y(), Vector3::new(1.0, 0.0, 0.0)));
        assert!(approx_vec(t.matrix * Vector3::z(), Vector3::z()));
    }

    #[test]
    fn test_roll_90_axis_mapping() {
        let t = build_board_transform(&BoardRotation::new(90.0, 0.0, 0.0), &LevelTrim::default());
        assert!(approx_vec(t.matrix * Vector3::y(), Vector3::new(0.0, 0.0, -1.0)));
        assert!(approx_vec(t.matrix * Vector3::z(), Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_trim_alone_sets_hint() {
        let t = build_board_transform(&BoardRotation::default(), &LevelTrim::new(0.0, 2.0));
        assert!(t.needs_rotation);
        assert_ne!(t.matrix, Matrix3::identity());
    }

    #[test]
    fn test_trim_composes_after_rotation() {
        let rotation = BoardRotation::new(0.0, 0.0, 90.0);
        let trim = LevelTrim::new(5.0, 0.0);
        let t = build_board_transform(&rotation, &trim);

        let q = euler_deg_to_quaternion(0.0, 0.0, 90.0) * euler_deg_to_quaternion(5.0, 0.0, 0.0);
        let expected = quaternion_to_dcm(&q);
        assert!((t.matrix - expected).norm() < 1e-6);
    }

    #[test]
    fn test_matrix_is_orthonormal() {
        let t = build_board_transform(&BoardRotation::new(12.0, -30.0, 170.0), &LevelTrim::new(1.0, -2.0));
        let should_be_identity = t.matrix * t.matrix.transpose();
        assert!((should_be_identity - Matrix3::identity()).norm() < 1e-5);
    }

    #[test]
    fn test_combine_transform_order() {
        let calibration = Matrix3::new(2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let rotation = quaternion_to_dcm(&euler_deg_to_quaternion(0.0, 0.0, 90.0));
        let combined = combine_transform(&calibration, &rotation);
        // rotate first, then scale: X -> (0,-1,0) -> (0,-1,0); Y -> (1,0,0) -> (2,0,0)
        assert!(approx_vec(combined * Vector3::y(), Vector3::new(2.0, 0.0, 0.0)));
        assert!(approx_vec(combined * Vector3::x(), Vector3::new(0.0, -1.0, 0.0)));
    }
}
