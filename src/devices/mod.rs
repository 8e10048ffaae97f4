//! Device drivers
//!
//! ## Modules
//!
//! - `traits`: Sensor driver capability trait
//! - `sensors`: Driver implementations (mock)

pub mod sensors;
pub mod traits;
