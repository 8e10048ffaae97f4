//! Task timer interface

/// Monotonic clock with absolute-deadline sleeping
///
/// The sensors loop schedules against absolute deadlines
/// (`next = last + period`) so that jitter in one iteration does not
/// accumulate into drift.
#[allow(async_fn_in_trait)]
pub trait TaskTimer {
    /// Microseconds since boot
    fn now_us(&self) -> u64;

    /// Sleep until `deadline_us`; returns immediately if it already passed
    async fn delay_until(&mut self, deadline_us: u64);

    /// Sleep for a relative duration
    async fn delay_us(&mut self, us: u32) {
        let deadline = self.now_us().saturating_add(us as u64);
        self.delay_until(deadline).await
    }
}
