#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! flight_sensors - Sensor preprocessing for flight controllers
//!
//! This library provides the platform abstraction, sensor driver interface
//! and the periodic sensors task that turns raw IMU, magnetometer and
//! barometer samples into calibrated measurements.

// Logging macros and shared state
pub mod core;

// Platform abstraction layer (timer, alarms, watchdog, object store, settings)
pub mod platform;

// Sensor driver interface
pub mod devices;

// Sensors task
pub mod subsystems;
