//! Mock platform bundling every mock collaborator

use super::{
    MockAlarms, MockObjectStore, MockSettings, MockTaskMonitor, MockTimer, MockWatchdog,
};
use crate::platform::traits::SensorsPlatform;
use flight_sensors_core::monitor::PerfCounters;

/// Mock platform for host tests
///
/// Fields are public so tests can inspect and script each collaborator.
#[derive(Default)]
pub struct MockPlatform {
    pub timer: MockTimer,
    pub alarms: MockAlarms,
    pub watchdog: MockWatchdog,
    pub store: MockObjectStore,
    pub settings: MockSettings,
    pub monitor: MockTaskMonitor,
    pub perf: PerfCounters,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SensorsPlatform for MockPlatform {
    type Timer = MockTimer;
    type Alarms = MockAlarms;
    type Watchdog = MockWatchdog;
    type Store = MockObjectStore;
    type Settings = MockSettings;
    type Monitor = MockTaskMonitor;
    type Metrics = PerfCounters;

    fn timer(&self) -> &MockTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut MockTimer {
        &mut self.timer
    }

    fn alarms_mut(&mut self) -> &mut MockAlarms {
        &mut self.alarms
    }

    fn watchdog_mut(&mut self) -> &mut MockWatchdog {
        &mut self.watchdog
    }

    fn store_mut(&mut self) -> &mut MockObjectStore {
        &mut self.store
    }

    fn settings(&self) -> &MockSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut MockSettings {
        &mut self.settings
    }

    fn monitor_mut(&mut self) -> &mut MockTaskMonitor {
        &mut self.monitor
    }

    fn metrics_mut(&mut self) -> &mut PerfCounters {
        &mut self.perf
    }
}
