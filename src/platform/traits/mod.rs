//! Platform abstraction traits
//!
//! This module defines the collaborator traits a platform must provide to
//! run the sensors task.

pub mod alarm;
pub mod monitor;
pub mod platform;
pub mod settings;
pub mod store;
pub mod timer;
pub mod watchdog;

pub use alarm::{AlarmSeverity, AlarmSink, SystemAlarm};
pub use monitor::TaskMonitor;
pub use platform::SensorsPlatform;
pub use settings::SettingsSource;
pub use store::ObjectStore;
pub use timer::TaskTimer;
pub use watchdog::{Watchdog, WatchdogFlag};
