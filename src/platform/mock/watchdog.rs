//! Mock watchdog

use crate::platform::traits::{Watchdog, WatchdogFlag};
use std::vec::Vec;

/// Counts registrations and reloads
#[derive(Debug, Default)]
pub struct MockWatchdog {
    registered: Vec<WatchdogFlag>,
    reloads: u32,
}

impl MockWatchdog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, flag: WatchdogFlag) -> bool {
        self.registered.contains(&flag)
    }

    pub fn reloads(&self) -> u32 {
        self.reloads
    }
}

impl Watchdog for MockWatchdog {
    fn register_flag(&mut self, flag: WatchdogFlag) {
        if !self.registered.contains(&flag) {
            self.registered.push(flag);
        }
    }

    fn reload(&mut self, _flag: WatchdogFlag) {
        self.reloads += 1;
    }
}
