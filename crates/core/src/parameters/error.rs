//! Parameter error types

/// Errors from parameter store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Name too long for the store
    InvalidName,
    /// Parameter was never registered
    UnknownParameter,
    /// Store is full
    StoreFull,
}

impl ParameterError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterError::InvalidName => "invalid parameter name",
            ParameterError::UnknownParameter => "unknown parameter",
            ParameterError::StoreFull => "parameter store full",
        }
    }
}

impl core::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
