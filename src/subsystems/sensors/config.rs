//! Sensors task configuration

/// Sensors task configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorsConfig {
    /// Main loop rate in Hz (default: 500)
    pub sample_rate_hz: u32,

    /// Priority reported to the task monitor (default: 3)
    pub priority: u8,

    /// Execution budget per iteration in µs (default: 1500)
    pub budget_us: u32,

    /// Sleep between watchdog reloads once halted (default: 10ms)
    pub halt_delay_us: u32,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 500,
            priority: 3,
            budget_us: 1500,
            halt_delay_us: 10_000,
        }
    }
}
