//! Task timing types
//!
//! Rates, periods and monitor statistics, free of any async runtime. The
//! sensors task in the root crate drives these.

pub mod types;

pub use types::*;
