//! Sensor sample types, accumulation and published records

pub mod batch;
pub mod measurement;
pub mod types;

pub use batch::{AveragedSample, RawSampleBatch, TEMPERATURE_SCALE};
pub use measurement::{AccelSensor, AuxMagSensor, BaroSensor, GyroSensor, MagSensor, SensorObject};
pub use types::{
    AcquisitionMode, OneAxisSample, SensorKind, SensorSample, ThreeAxisSample,
    MAX_SENSORS_PER_INSTANCE,
};
