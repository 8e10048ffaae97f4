//! Performance counters
//!
//! Named counters the sensor loop feeds: sample counts, inter-arrival periods
//! and the reset tally. The loop only talks to the [`PerfMetrics`] trait so a
//! board can route counters anywhere; [`PerfCounters`] keeps them in memory.

/// Counters the sensor pipeline reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerfCounter {
    /// Samples averaged into each accelerometer record
    AccelSamples,
    /// Interval between accelerometer publishes
    AccelPeriod,
    /// Interval between magnetometer publishes
    MagPeriod,
    /// Interval between barometer publishes
    BaroPeriod,
    /// Interval between loop iterations
    SensorPeriod,
    /// Primary sensor resets so far
    SensorResets,
}

impl PerfCounter {
    pub const COUNT: usize = 6;

    pub const ALL: [PerfCounter; Self::COUNT] = [
        PerfCounter::AccelSamples,
        PerfCounter::AccelPeriod,
        PerfCounter::MagPeriod,
        PerfCounter::BaroPeriod,
        PerfCounter::SensorPeriod,
        PerfCounter::SensorResets,
    ];

    /// Stable numeric id ("SNS" + index)
    pub const fn id(&self) -> u32 {
        0x534E_5300 + *self as u32 + 1
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerfCounter::AccelSamples => "accel samples",
            PerfCounter::AccelPeriod => "accel period",
            PerfCounter::MagPeriod => "mag period",
            PerfCounter::BaroPeriod => "baro period",
            PerfCounter::SensorPeriod => "sensor period",
            PerfCounter::SensorResets => "sensor resets",
        }
    }
}

/// Sink for performance measurements
pub trait PerfMetrics {
    /// Record an absolute value
    fn track_value(&mut self, counter: PerfCounter, value: u32);

    /// Record an event at `now_us`; the counter tracks the interval since the last one
    fn measure_period(&mut self, counter: PerfCounter, now_us: u64);
}

/// Statistics for a single counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterStats {
    /// Last tracked value
    pub value: u32,
    /// Timestamp of the last period event
    pub last_event_us: Option<u64>,
    pub last_period_us: u32,
    pub min_period_us: u32,
    pub max_period_us: u32,
    /// EMA of the period (alpha = 0.1)
    pub avg_period_us: u32,
    /// Updates received (values or events)
    pub samples: u32,
    /// Intervals measured so far
    pub periods: u32,
}

impl CounterStats {
    fn record_value(&mut self, value: u32) {
        self.value = value;
        self.samples = self.samples.saturating_add(1);
    }

    fn record_event(&mut self, now_us: u64) {
        if let Some(last) = self.last_event_us {
            let period = now_us.saturating_sub(last).min(u32::MAX as u64) as u32;
            self.last_period_us = period;
            if self.periods == 0 {
                self.avg_period_us = period;
                self.min_period_us = period;
            } else {
                self.avg_period_us =
                    ((period as u64 + 9 * self.avg_period_us as u64) / 10) as u32;
                self.min_period_us = self.min_period_us.min(period);
            }
            self.max_period_us = self.max_period_us.max(period);
            self.periods = self.periods.saturating_add(1);
        }
        self.last_event_us = Some(now_us);
        self.samples = self.samples.saturating_add(1);
    }
}

/// In-memory counter bank
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfCounters {
    counters: [CounterStats; PerfCounter::COUNT],
}

impl PerfCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, counter: PerfCounter) -> &CounterStats {
        &self.counters[counter.index()]
    }
}

impl PerfMetrics for PerfCounters {
    fn track_value(&mut self, counter: PerfCounter, value: u32) {
        self.counters[counter.index()].record_value(value);
    }

    fn measure_period(&mut self, counter: PerfCounter, now_us: u64) {
        self.counters[counter.index()].record_event(now_us);
    }
}
