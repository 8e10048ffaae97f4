//! Embassy task timer
//!
//! Wraps `embassy_time` so absolute deadlines map straight onto
//! `Timer::at`, which keeps the sensors loop phase-locked to its period.

use crate::platform::traits::TaskTimer;
use embassy_time::{Instant, Timer};

/// [`TaskTimer`] over the embassy time driver
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

impl EmbassyTimer {
    pub const fn new() -> Self {
        Self
    }
}

impl TaskTimer for EmbassyTimer {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }

    async fn delay_until(&mut self, deadline_us: u64) {
        Timer::at(Instant::from_micros(deadline_us)).await
    }
}
