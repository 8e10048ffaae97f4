//! Settings change signal
//!
//! The settings side runs in another context; it raises a
//! [`SettingsChangeSignal`] and the board's `SettingsSource::take_changed`
//! forwards to [`take`](SettingsChangeSignal::take).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct SettingsChangeSignal {
    signal: Signal<CriticalSectionRawMutex, ()>,
}

impl SettingsChangeSignal {
    pub const fn new() -> Self {
        Self {
            signal: Signal::new(),
        }
    }

    /// Mark a subscribed group as changed; repeated calls coalesce
    pub fn notify(&self) {
        self.signal.signal(());
    }

    /// Consume the notification
    pub fn take(&self) -> bool {
        self.signal.try_take().is_some()
    }
}

impl Default for SettingsChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}
