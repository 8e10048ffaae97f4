//! Mock task monitor

use crate::platform::traits::TaskMonitor;
use flight_sensors_core::scheduler::{TaskMetadata, TaskStats};
use std::vec::Vec;

/// Keeps metadata and [`TaskStats`] per registered task
#[derive(Debug, Default)]
pub struct MockTaskMonitor {
    tasks: Vec<(TaskMetadata, TaskStats)>,
}

impl MockTaskMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self, task_id: usize) -> Option<&(TaskMetadata, TaskStats)> {
        self.tasks.get(task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskMonitor for MockTaskMonitor {
    fn register_task(&mut self, metadata: TaskMetadata) -> usize {
        self.tasks.push((metadata, TaskStats::default()));
        self.tasks.len() - 1
    }

    fn record_execution(&mut self, task_id: usize, execution_us: u32, period_us: u32) {
        if let Some((meta, stats)) = self.tasks.get_mut(task_id) {
            stats.record(meta, execution_us, period_us);
        }
    }
}
