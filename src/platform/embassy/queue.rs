//! Push-mode sample queue
//!
//! Interrupt-driven drivers push readings from their data-ready handler into
//! a [`ChannelSampleQueue`]; the driver's `receive` drains it with a bounded
//! wait.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{with_timeout, Duration};
use flight_sensors_core::sensors::SensorSample;

/// Bounded queue of raw samples shared between ISR and sensors task
pub struct ChannelSampleQueue<const N: usize> {
    channel: Channel<CriticalSectionRawMutex, SensorSample, N>,
}

impl<const N: usize> ChannelSampleQueue<N> {
    /// Const so queues can live in statics
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue from the producer side; drops the sample if the queue is full
    pub fn push(&self, sample: SensorSample) -> bool {
        self.channel.try_send(sample).is_ok()
    }

    /// Dequeue, waiting at most `timeout_us` (0 never waits)
    pub async fn receive(&self, timeout_us: u32) -> Option<SensorSample> {
        if let Ok(sample) = self.channel.try_receive() {
            return Some(sample);
        }
        if timeout_us == 0 {
            return None;
        }
        with_timeout(
            Duration::from_micros(timeout_us as u64),
            self.channel.receive(),
        )
        .await
        .ok()
    }

    /// Discard everything queued (used by driver resets)
    pub fn clear(&self) {
        while self.channel.try_receive().is_ok() {}
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl<const N: usize> Default for ChannelSampleQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
