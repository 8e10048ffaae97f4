//! Stale-data fault tracking
//!
//! An iteration in which the primary sensor produced nothing is flagged. The
//! flag is consumed at the start of the next iteration, which runs as a
//! one-shot recovery iteration; every iteration re-evaluates from scratch.

/// How an iteration starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Previous iteration flagged an error
    ErrorRecovery,
}

/// Error flag and reset tally for the sensor loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultMonitor {
    error: bool,
    reset_count: u32,
}

impl FaultMonitor {
    pub const fn new() -> Self {
        Self {
            error: false,
            reset_count: 0,
        }
    }

    /// Consume the error flag left by the previous iteration
    pub fn begin_iteration(&mut self) -> LoopState {
        if core::mem::take(&mut self.error) {
            LoopState::ErrorRecovery
        } else {
            LoopState::Running
        }
    }

    /// Primary sensor starved: count a reset and flag the iteration
    ///
    /// Returns the updated reset count.
    pub fn record_starvation(&mut self) -> u32 {
        self.reset_count = self.reset_count.wrapping_add(1);
        self.error = true;
        self.reset_count
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn reset_count(&self) -> u32 {
        self.reset_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running() {
        let mut fault = FaultMonitor::new();
        assert_eq!(fault.begin_iteration(), LoopState::Running);
        assert_eq!(fault.reset_count(), 0);
    }

    #[test]
    fn test_recovery_is_single_shot() {
        let mut fault = FaultMonitor::new();
        assert_eq!(fault.record_starvation(), 1);
        assert!(fault.has_error());
        assert_eq!(fault.begin_iteration(), LoopState::ErrorRecovery);
        assert!(!fault.has_error());
        assert_eq!(fault.begin_iteration(), LoopState::Running);
        assert_eq!(fault.reset_count(), 1);
    }

    #[test]
    fn test_reset_count_accumulates() {
        let mut fault = FaultMonitor::new();
        for _ in 0..3 {
            fault.begin_iteration();
            fault.record_starvation();
        }
        assert_eq!(fault.reset_count(), 3);
    }
}
