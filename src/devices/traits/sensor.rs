//! Sensor Driver Trait
//!
//! Uniform capability interface the sensors task drives every physical sensor
//! through, whatever its bus or chip.
//!
//! ## Acquisition modes
//!
//! - **Push**: the driver queues readings asynchronously (data-ready
//!   interrupt, FIFO). The task drains the queue with [`SensorDriver::receive`].
//! - **Poll**: the task asks [`SensorDriver::poll`] once per iteration and, if
//!   a reading is ready, takes it with [`SensorDriver::fetch`].
//!
//! Drivers implement the half that matches their [`AcquisitionMode`]; the
//! other half keeps its default "no data" implementation.
//!
//! ## Usage
//!
//! ```ignore
//! use flight_sensors::devices::traits::SensorDriver;
//!
//! async fn drain<D: SensorDriver>(sensor: &mut D) {
//!     while let Some(sample) = sensor.receive(0).await {
//!         // accumulate...
//!     }
//! }
//! ```

use flight_sensors_core::sensors::{
    AcquisitionMode, SensorKind, SensorSample, MAX_SENSORS_PER_INSTANCE,
};

/// Sensor driver capability interface
#[allow(async_fn_in_trait)]
pub trait SensorDriver {
    /// Role flags of this driver instance
    fn kind(&self) -> SensorKind;

    /// How the driver delivers data
    fn mode(&self) -> AcquisitionMode;

    /// Run the chip self-test once at startup
    async fn self_test(&mut self) -> bool;

    /// Next queued reading (push mode)
    ///
    /// Waits at most `timeout_us` for a reading to arrive; `0` never blocks.
    async fn receive(&mut self, _timeout_us: u32) -> Option<SensorSample> {
        None
    }

    /// Whether a reading is ready (poll mode)
    fn poll(&mut self) -> bool {
        false
    }

    /// Take the ready reading (poll mode)
    ///
    /// Three-axis readings carry at most [`MAX_SENSORS_PER_INSTANCE`]
    /// sub-sensor entries.
    fn fetch(&mut self) -> Option<SensorSample> {
        None
    }

    /// Reinitialise the chip after a data stall
    fn reset(&mut self);

    /// Raw count → physical unit scale per sub-sensor
    fn scales(&self) -> [f32; MAX_SENSORS_PER_INSTANCE];
}
