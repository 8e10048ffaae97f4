//! Watchdog interface

/// Watchdog flag identifying a supervised task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogFlag(pub u16);

impl WatchdogFlag {
    pub const SENSORS: WatchdogFlag = WatchdogFlag(0x0001);
}

/// Supervisory watchdog
///
/// Every registered flag must be reloaded within the watchdog timeout or the
/// system resets.
pub trait Watchdog {
    fn register_flag(&mut self, flag: WatchdogFlag);

    fn reload(&mut self, flag: WatchdogFlag);
}
