//! System alarm interface

/// Alarms the sensors task owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAlarm {
    Sensors,
}

impl SystemAlarm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemAlarm::Sensors => "sensors",
        }
    }
}

/// Alarm severity levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlarmSeverity {
    Ok,
    Warning,
    Error,
    Critical,
}

/// System-wide fault signaling
pub trait AlarmSink {
    /// Raise an alarm at a severity
    fn set(&mut self, alarm: SystemAlarm, severity: AlarmSeverity);

    /// Return an alarm to OK
    fn clear(&mut self, alarm: SystemAlarm);
}
