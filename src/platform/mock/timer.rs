//! Mock task timer for testing

use crate::platform::traits::TaskTimer;
use std::vec::Vec;

/// Mock timer with simulated time
///
/// `delay_until` jumps the clock straight to the deadline and records it, so
/// tests can check the wake schedule.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    wakeups: Vec<u64>,
}

impl MockTimer {
    /// Create a new mock timer at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward (simulated processing time)
    pub fn advance(&mut self, us: u64) {
        self.now_us = self.now_us.saturating_add(us);
    }

    /// Deadlines passed to `delay_until`, in call order
    pub fn wakeups(&self) -> &[u64] {
        &self.wakeups
    }
}

impl TaskTimer for MockTimer {
    fn now_us(&self) -> u64 {
        self.now_us
    }

    async fn delay_until(&mut self, deadline_us: u64) {
        self.wakeups.push(deadline_us);
        self.now_us = self.now_us.max(deadline_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delay_until_jumps_forward() {
        let mut timer = MockTimer::new();
        timer.delay_until(2000).await;
        assert_eq!(timer.now_us(), 2000);
        timer.delay_us(500).await;
        assert_eq!(timer.now_us(), 2500);
        assert_eq!(timer.wakeups(), &[2000, 2500]);
    }

    #[tokio::test]
    async fn test_past_deadline_does_not_rewind() {
        let mut timer = MockTimer::new();
        timer.advance(5000);
        timer.delay_until(1000).await;
        assert_eq!(timer.now_us(), 5000);
    }
}
