//! Device traits
//!
//! Hardware-independent trait definitions for sensor drivers, so the sensors
//! task can be tested with mock drivers and stays unchanged across boards.

pub mod sensor;

pub use sensor::SensorDriver;
