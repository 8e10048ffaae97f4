//! Sensor kinds and raw sample shapes
//!
//! Drivers hand the pipeline one of two sample shapes: a three-axis block
//! (accelerometers, gyroscopes, magnetometers) carrying up to
//! [`MAX_SENSORS_PER_INSTANCE`] sub-sensor readings, or a one-axis float
//! reading (barometric pressure).

use bitflags::bitflags;
use nalgebra::Vector3;

/// Maximum number of sub-sensors a single driver instance reports
///
/// A combined gyro/accel package reports accel at index 0 and gyro at index 1.
pub const MAX_SENSORS_PER_INSTANCE: usize = 2;

bitflags! {
    /// Sensor role flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SensorKind: u8 {
        /// Accelerometer
        const ACCEL = 0x01;
        /// Gyroscope
        const GYRO = 0x02;
        /// Combined gyro + accel package
        const GYRO_ACCEL = Self::ACCEL.bits() | Self::GYRO.bits();
        /// Onboard magnetometer
        const MAG = 0x04;
        /// Auxiliary (external) magnetometer
        const AUX_MAG = 0x08;
        /// Barometer
        const BARO = 0x10;
        /// Any three-axis kind
        const THREE_AXIS = Self::ACCEL.bits()
            | Self::GYRO.bits()
            | Self::MAG.bits()
            | Self::AUX_MAG.bits();
    }
}

impl SensorKind {
    /// Primary sensors pace the loop (any kind carrying an accelerometer)
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.contains(SensorKind::ACCEL)
    }

    /// Whether this kind delivers three-axis samples
    #[inline]
    pub fn is_three_axis(&self) -> bool {
        self.intersects(SensorKind::THREE_AXIS)
    }

    /// Short label for logging
    pub fn as_str(&self) -> &'static str {
        if *self == SensorKind::GYRO_ACCEL {
            "gyro+accel"
        } else if *self == SensorKind::ACCEL {
            "accel"
        } else if *self == SensorKind::GYRO {
            "gyro"
        } else if *self == SensorKind::MAG {
            "mag"
        } else if *self == SensorKind::AUX_MAG {
            "auxmag"
        } else if *self == SensorKind::BARO {
            "baro"
        } else {
            "unknown"
        }
    }
}

/// How a driver delivers data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Driver pushes samples into a queue asynchronously
    Push,
    /// Driver is polled and fetched synchronously each cycle
    Poll,
}

/// Raw three-axis reading from one driver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeAxisSample {
    /// Raw counts per sub-sensor
    pub samples: [Vector3<i16>; MAX_SENSORS_PER_INSTANCE],
    /// Number of valid entries in `samples`
    pub count: u8,
    /// Die temperature in centidegrees Celsius
    pub temperature: i16,
}

impl ThreeAxisSample {
    /// Reading with a single sub-sensor
    pub fn single(sample: Vector3<i16>, temperature: i16) -> Self {
        Self {
            samples: [sample, Vector3::zeros()],
            count: 1,
            temperature,
        }
    }

    /// Reading from a combined package (accel at index 0, gyro at index 1)
    pub fn dual(accel: Vector3<i16>, gyro: Vector3<i16>, temperature: i16) -> Self {
        Self {
            samples: [accel, gyro],
            count: 2,
            temperature,
        }
    }
}

/// Raw one-axis reading (barometer)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OneAxisSample {
    /// Measured value (pressure in Pa for barometers)
    pub sample: f32,
    /// Temperature in degrees Celsius
    pub temperature: f32,
}

/// A raw driver sample, tagged by shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorSample {
    /// Inertial or magnetic sample
    ThreeAxis(ThreeAxisSample),
    /// Scalar sample
    OneAxis(OneAxisSample),
}
