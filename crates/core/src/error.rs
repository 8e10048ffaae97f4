//! Sensor pipeline error types

/// Errors raised while setting up or starting the sensor pipeline
///
/// Nothing in the periodic loop propagates errors; these cover construction
/// and startup only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorsError {
    /// No sensor drivers were registered
    NoSensors,
    /// A sensor failed its startup self-test
    SelfTestFailed,
    /// The sensor registry is at capacity
    RegistryFull,
    /// Configured sample rate is zero or too high
    InvalidSampleRate,
}

impl SensorsError {
    /// Get a short static description, usable with defmt
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorsError::NoSensors => "no sensors registered",
            SensorsError::SelfTestFailed => "sensor self-test failed",
            SensorsError::RegistryFull => "sensor registry full",
            SensorsError::InvalidSampleRate => "invalid sample rate",
        }
    }
}

impl core::fmt::Display for SensorsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_as_str() {
        assert_eq!(SensorsError::NoSensors.as_str(), "no sensors registered");
        assert_eq!(SensorsError::SelfTestFailed.as_str(), "sensor self-test failed");
    }
}
