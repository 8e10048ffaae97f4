//! Platform abstraction layer
//!
//! Collaborator traits the sensors task is generic over, plus their host
//! mocks and the embassy-backed implementations.

pub mod traits;

#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use traits::{
    AlarmSeverity, AlarmSink, ObjectStore, SensorsPlatform, SettingsSource, SystemAlarm,
    TaskMonitor, TaskTimer, Watchdog, WatchdogFlag,
};
