//! Loop health: stale-data faults and performance counters

pub mod fault;
pub mod perf;

pub use fault::{FaultMonitor, LoopState};
pub use perf::{CounterStats, PerfCounter, PerfCounters, PerfMetrics};
