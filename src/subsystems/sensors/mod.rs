//! Sensors subsystem
//!
//! Periodic acquisition and calibration of inertial, magnetic and barometric
//! data.
//!
//! ```text
//! SensorRegistry ──► RawSampleBatch ──► SampleProcessor ──► ObjectStore
//!                         ▲                    ▲
//!                  FaultMonitor        CalibrationSnapshot ◄── SettingsSynchronizer
//! ```
//!
//! - [`registry`]: ordered driver list
//! - [`process`]: averaging, calibration and publication per sensor kind
//! - [`settings`]: settings-change handling
//! - [`task`]: the scheduling loop

pub mod config;
pub mod process;
pub mod registry;
pub mod settings;
pub mod task;

pub use config::SensorsConfig;
pub use process::SampleProcessor;
pub use registry::{SensorRegistry, MAX_SENSORS};
pub use settings::SettingsSynchronizer;
pub use task::{SensorsTask, TASK_NAME};
