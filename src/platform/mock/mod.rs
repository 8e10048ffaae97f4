//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform collaborator
//! traits so the sensors task can be exercised on host.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use flight_sensors::platform::mock::MockPlatform;
//! use flight_sensors::platform::traits::{AlarmSink, SensorsPlatform, SystemAlarm};
//!
//! let mut platform = MockPlatform::new();
//! platform.alarms_mut().clear(SystemAlarm::Sensors);
//! assert_eq!(platform.alarms.events().len(), 1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod alarm;
mod monitor;
mod platform;
mod settings;
mod store;
mod timer;
mod watchdog;

pub use alarm::{AlarmEvent, MockAlarms};
pub use monitor::MockTaskMonitor;
pub use platform::MockPlatform;
pub use settings::MockSettings;
pub use store::MockObjectStore;
pub use timer::MockTimer;
pub use watchdog::MockWatchdog;
