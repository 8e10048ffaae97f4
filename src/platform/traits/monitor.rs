//! Task monitor interface

use flight_sensors_core::scheduler::TaskMetadata;

/// Runtime task supervision
pub trait TaskMonitor {
    /// Register a task; returns its monitor id
    fn register_task(&mut self, metadata: TaskMetadata) -> usize;

    /// Report one iteration's execution time and measured period
    fn record_execution(&mut self, task_id: usize, execution_us: u32, period_us: u32);
}
