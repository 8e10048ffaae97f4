//! Autopilot subsystems

pub mod sensors;
