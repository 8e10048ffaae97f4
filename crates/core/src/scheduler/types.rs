//! Task timing types
//!
//! Metadata and statistics exchanged with the task monitor, the loop timing
//! derived once from the sample rate, and the aux magnetometer throttle.

/// Registration record handed to the task monitor
#[derive(Debug, Clone, Copy)]
pub struct TaskMetadata {
    pub name: &'static str,
    pub rate_hz: u32,

    /// Reported only; embassy executors do not schedule by priority
    pub priority: u8,

    /// Execution time above which an iteration counts as a deadline miss (µs)
    pub budget_us: u32,
}

impl TaskMetadata {
    /// Nominal period (µs)
    #[inline]
    pub const fn period_us(&self) -> u32 {
        1_000_000 / self.rate_hz
    }
}

/// Execution statistics a monitor keeps per task
///
/// Averages are EMAs with alpha = 0.1 in integer form, `(v + 9·avg) / 10`,
/// seeded by the first sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskStats {
    pub last_execution_us: u32,
    pub avg_execution_us: u32,
    pub max_execution_us: u32,
    pub deadline_misses: u32,
    pub last_period_us: u32,

    /// Average absolute deviation of the period from nominal
    pub avg_jitter_us: u32,
    pub execution_count: u64,
}

impl TaskStats {
    /// Fold in one iteration of `task`
    pub fn record(&mut self, task: &TaskMetadata, execution_us: u32, period_us: u32) {
        let first = self.execution_count == 0;
        self.execution_count = self.execution_count.saturating_add(1);
        self.last_execution_us = execution_us;
        self.last_period_us = period_us;
        self.max_execution_us = self.max_execution_us.max(execution_us);

        if execution_us > task.budget_us {
            self.deadline_misses = self.deadline_misses.saturating_add(1);
        }

        let jitter = period_us.abs_diff(task.period_us());
        if first {
            self.avg_execution_us = execution_us;
            self.avg_jitter_us = jitter;
        } else {
            self.avg_execution_us = ema(self.avg_execution_us, execution_us);
            self.avg_jitter_us = ema(self.avg_jitter_us, jitter);
        }
    }
}

fn ema(avg: u32, value: u32) -> u32 {
    ((value as u64 + 9 * avg as u64) / 10) as u32
}

/// Lower bound of the rate used for the aux magnetometer divider
const AUX_MAG_MIN_RATE_HZ: u32 = 76;

/// Aux magnetometer visit rate the divider aims for (Hz)
const AUX_MAG_TARGET_HZ: u32 = 75;

/// Highest supported loop rate
pub const MAX_SAMPLE_RATE_HZ: u32 = 8000;

/// Divider `K` for the auxiliary magnetometer
///
/// ```text
/// K = ceil((max(rate, 76) + 74) / 75)
/// ```
///
/// Always at least 2, so the aux magnetometer is never visited every cycle.
pub const fn aux_mag_divider(rate_hz: u32) -> u32 {
    let rate = if rate_hz > AUX_MAG_MIN_RATE_HZ {
        rate_hz
    } else {
        AUX_MAG_MIN_RATE_HZ
    };
    let numerator = rate + AUX_MAG_TARGET_HZ - 1;
    numerator.div_ceil(AUX_MAG_TARGET_HZ)
}

/// Loop timing fixed for the lifetime of the task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    pub rate_hz: u32,
    pub period_us: u32,
    pub aux_mag_divider: u32,
}

impl LoopTiming {
    /// Derive timing from a sample rate, `None` if out of range
    pub fn from_rate(rate_hz: u32) -> Option<Self> {
        if rate_hz == 0 || rate_hz > MAX_SAMPLE_RATE_HZ {
            return None;
        }
        Some(Self {
            rate_hz,
            period_us: 1_000_000 / rate_hz,
            aux_mag_divider: aux_mag_divider(rate_hz),
        })
    }

    /// Loop period in seconds
    pub fn period_s(&self) -> f32 {
        self.period_us as f32 * 1e-6
    }
}

/// Modulo counter gating the aux magnetometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxMagThrottle {
    divider: u32,
    phase: u32,
}

impl AuxMagThrottle {
    pub fn new(divider: u32) -> Self {
        Self {
            divider: divider.max(1),
            phase: 0,
        }
    }

    /// Advance one iteration; `true` on the phase the sensor is visited
    pub fn advance(&mut self) -> bool {
        self.phase = (self.phase + 1) % self.divider;
        self.phase == 0
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSORS: TaskMetadata = TaskMetadata {
        name: "sensors",
        rate_hz: 500,
        priority: 3,
        budget_us: 1500,
    };

    #[test]
    fn test_metadata_period() {
        assert_eq!(SENSORS.period_us(), 2000);
        let slow = TaskMetadata {
            rate_hz: 400,
            ..SENSORS
        };
        assert_eq!(slow.period_us(), 2500);
    }

    #[test]
    fn test_stats_seeded_by_first_iteration() {
        let mut stats = TaskStats::default();
        stats.record(&SENSORS, 900, 2100);

        assert_eq!(stats.execution_count, 1);
        assert_eq!(stats.avg_execution_us, 900);
        assert_eq!(stats.avg_jitter_us, 100);
        assert_eq!(stats.deadline_misses, 0);
    }

    #[test]
    fn test_stats_average_and_overruns() {
        let mut stats = TaskStats::default();
        stats.record(&SENSORS, 1000, 2000);
        stats.record(&SENSORS, 2000, 2000);
        stats.record(&SENSORS, 500, 1800);

        assert_eq!(stats.last_execution_us, 500);
        assert_eq!(stats.max_execution_us, 2000);
        assert_eq!(stats.deadline_misses, 1);
        // 1000 -> 1100 -> 1040
        assert_eq!(stats.avg_execution_us, 1040);
        // 0 -> 0 -> 20
        assert_eq!(stats.avg_jitter_us, 20);
        assert_eq!(stats.last_period_us, 1800);
    }

    #[test]
    fn test_aux_mag_divider() {
        // numerator 150 -> 2
        assert_eq!(aux_mag_divider(1), 2);
        assert_eq!(aux_mag_divider(76), 2);
        // 151 / 75 = 2.01 -> 3
        assert_eq!(aux_mag_divider(77), 3);
        // 574 / 75 = 7.65 -> 8
        assert_eq!(aux_mag_divider(500), 8);
        assert_eq!(aux_mag_divider(1000), 15);
    }

    #[test]
    fn test_aux_mag_divider_at_least_two() {
        for rate in [1, 10, 50, 75, 76, 100, 200, 400, 500, 1000, 8000] {
            assert!(aux_mag_divider(rate) >= 2, "rate {}", rate);
        }
    }

    #[test]
    fn test_loop_timing() {
        let timing = LoopTiming::from_rate(500).unwrap();
        assert_eq!(timing.period_us, 2000);
        assert_eq!(timing.aux_mag_divider, 8);
        assert!(libm::fabsf(timing.period_s() - 0.002) < 1e-7);
        assert!(LoopTiming::from_rate(0).is_none());
        assert!(LoopTiming::from_rate(MAX_SAMPLE_RATE_HZ + 1).is_none());
    }

    #[test]
    fn test_throttle_visits_once_per_divider() {
        let mut throttle = AuxMagThrottle::new(3);
        let mut visits = [false; 9];
        for v in visits.iter_mut() {
            *v = throttle.advance();
        }
        assert_eq!(
            visits,
            [false, false, true, false, false, true, false, false, true]
        );
    }
}
