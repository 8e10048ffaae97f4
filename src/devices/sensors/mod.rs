//! Sensor drivers
//!
//! ## Available Drivers
//!
//! - `mock`: Scripted driver for testing (test builds or `mock` feature)

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSensor;
