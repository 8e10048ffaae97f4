//! flight_sensors_core - Pure no_std sensor pipeline logic
//!
//! This crate contains the platform-agnostic half of the sensor pipeline:
//! everything that can be tested on host without feature flags or embassy.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`sensors`]: Sensor kinds, raw sample shapes, accumulation, published records
//! - [`calibration`]: Calibration snapshot, temperature bias filters, board rotation
//! - [`parameters`]: Parameter store and sensor settings groups
//! - [`scheduler`]: Task metadata, loop timing and monitor statistics
//! - [`monitor`]: Stale-data fault tracking and performance counters
//! - [`error`]: Setup and startup errors

#![no_std]

pub mod calibration;
pub mod error;
pub mod monitor;
pub mod parameters;
pub mod scheduler;
pub mod sensors;

pub use error::SensorsError;
