//! Mock alarm sink

use crate::platform::traits::{AlarmSeverity, AlarmSink, SystemAlarm};
use std::vec::Vec;

/// One recorded alarm operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmEvent {
    Set(SystemAlarm, AlarmSeverity),
    Clear(SystemAlarm),
}

/// Records every alarm operation
#[derive(Debug, Default)]
pub struct MockAlarms {
    events: Vec<AlarmEvent>,
    sensors: Option<AlarmSeverity>,
}

impl MockAlarms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sensors alarm severity (`None` before the first operation)
    pub fn sensors(&self) -> Option<AlarmSeverity> {
        self.sensors
    }

    pub fn events(&self) -> &[AlarmEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl AlarmSink for MockAlarms {
    fn set(&mut self, alarm: SystemAlarm, severity: AlarmSeverity) {
        self.events.push(AlarmEvent::Set(alarm, severity));
        match alarm {
            SystemAlarm::Sensors => self.sensors = Some(severity),
        }
    }

    fn clear(&mut self, alarm: SystemAlarm) {
        self.events.push(AlarmEvent::Clear(alarm));
        match alarm {
            SystemAlarm::Sensors => self.sensors = Some(AlarmSeverity::Ok),
        }
    }
}
