//! Root platform trait
//!
//! This module defines the [`SensorsPlatform`] trait that aggregates every
//! collaborator the sensors task talks to.

use super::{AlarmSink, ObjectStore, SettingsSource, TaskMonitor, TaskTimer, Watchdog};
use flight_sensors_core::monitor::PerfMetrics;

/// Root platform trait
///
/// Platform implementations provide concrete types for each collaborator via
/// associated types, so the sensors task is monomorphised with no dynamic
/// dispatch.
///
/// # Example
///
/// ```ignore
/// pub struct BoardPlatform {
///     timer: EmbassyTimer,
///     // ...
/// }
///
/// impl SensorsPlatform for BoardPlatform {
///     type Timer = EmbassyTimer;
///     // ... other associated types
///
///     fn timer(&self) -> &Self::Timer {
///         &self.timer
///     }
///     // ... other accessors
/// }
/// ```
pub trait SensorsPlatform {
    /// Monotonic clock and deadline sleep
    type Timer: TaskTimer;

    /// Alarm subsystem
    type Alarms: AlarmSink;

    /// Supervisory watchdog
    type Watchdog: Watchdog;

    /// Published-object store
    type Store: ObjectStore;

    /// Settings provider
    type Settings: SettingsSource;

    /// Task monitor
    type Monitor: TaskMonitor;

    /// Performance counter sink
    type Metrics: PerfMetrics;

    fn timer(&self) -> &Self::Timer;

    fn timer_mut(&mut self) -> &mut Self::Timer;

    fn alarms_mut(&mut self) -> &mut Self::Alarms;

    fn watchdog_mut(&mut self) -> &mut Self::Watchdog;

    fn store_mut(&mut self) -> &mut Self::Store;

    fn settings(&self) -> &Self::Settings;

    fn settings_mut(&mut self) -> &mut Self::Settings;

    fn monitor_mut(&mut self) -> &mut Self::Monitor;

    fn metrics_mut(&mut self) -> &mut Self::Metrics;
}
