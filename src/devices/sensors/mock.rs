//! Mock sensor driver for testing
//!
//! Scripted readings are queued per driver; the mock records every timeout
//! it was asked to wait and every reset, so tests can check how the loop
//! drove it.

use crate::devices::traits::SensorDriver;
use flight_sensors_core::sensors::{
    AcquisitionMode, OneAxisSample, SensorKind, SensorSample, ThreeAxisSample,
    MAX_SENSORS_PER_INSTANCE,
};
use nalgebra::Vector3;
use std::collections::VecDeque;
use std::vec::Vec;

/// Scripted sensor driver
#[derive(Debug)]
pub struct MockSensor {
    kind: SensorKind,
    mode: AcquisitionMode,
    scales: [f32; MAX_SENSORS_PER_INSTANCE],
    queue: VecDeque<SensorSample>,
    self_test_passes: bool,
    self_tests: u32,
    resets: u32,
    receive_timeouts: Vec<u32>,
    fetches: u32,
}

impl MockSensor {
    pub fn new(kind: SensorKind, mode: AcquisitionMode) -> Self {
        Self {
            kind,
            mode,
            scales: [1.0; MAX_SENSORS_PER_INSTANCE],
            queue: VecDeque::new(),
            self_test_passes: true,
            self_tests: 0,
            resets: 0,
            receive_timeouts: Vec::new(),
            fetches: 0,
        }
    }

    /// Push-mode accelerometer
    pub fn accel() -> Self {
        Self::new(SensorKind::ACCEL, AcquisitionMode::Push)
    }

    /// Push-mode combined gyro/accel package
    pub fn gyro_accel() -> Self {
        Self::new(SensorKind::GYRO_ACCEL, AcquisitionMode::Push)
    }

    /// Poll-mode onboard magnetometer
    pub fn mag() -> Self {
        Self::new(SensorKind::MAG, AcquisitionMode::Poll)
    }

    /// Poll-mode auxiliary magnetometer
    pub fn aux_mag() -> Self {
        Self::new(SensorKind::AUX_MAG, AcquisitionMode::Poll)
    }

    /// Poll-mode barometer
    pub fn baro() -> Self {
        Self::new(SensorKind::BARO, AcquisitionMode::Poll)
    }

    pub fn with_scales(mut self, scales: [f32; MAX_SENSORS_PER_INSTANCE]) -> Self {
        self.scales = scales;
        self
    }

    pub fn with_failing_self_test(mut self) -> Self {
        self.self_test_passes = false;
        self
    }

    /// Queue a raw reading
    pub fn push(&mut self, sample: SensorSample) {
        self.queue.push_back(sample);
    }

    /// Queue a single-sub-sensor three-axis reading
    pub fn push_vector(&mut self, raw: Vector3<i16>, temperature_centi: i16) {
        self.push(SensorSample::ThreeAxis(ThreeAxisSample::single(
            raw,
            temperature_centi,
        )));
    }

    /// Queue a combined accel + gyro reading
    pub fn push_dual(&mut self, accel: Vector3<i16>, gyro: Vector3<i16>, temperature_centi: i16) {
        self.push(SensorSample::ThreeAxis(ThreeAxisSample::dual(
            accel,
            gyro,
            temperature_centi,
        )));
    }

    /// Queue a scalar reading
    pub fn push_scalar(&mut self, sample: f32, temperature: f32) {
        self.push(SensorSample::OneAxis(OneAxisSample {
            sample,
            temperature,
        }));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    pub fn self_tests(&self) -> u32 {
        self.self_tests
    }

    pub fn fetches(&self) -> u32 {
        self.fetches
    }

    /// Timeouts passed to `receive`, in call order
    pub fn receive_timeouts(&self) -> &[u32] {
        &self.receive_timeouts
    }
}

impl SensorDriver for MockSensor {
    fn kind(&self) -> SensorKind {
        self.kind
    }

    fn mode(&self) -> AcquisitionMode {
        self.mode
    }

    async fn self_test(&mut self) -> bool {
        self.self_tests += 1;
        self.self_test_passes
    }

    async fn receive(&mut self, timeout_us: u32) -> Option<SensorSample> {
        self.receive_timeouts.push(timeout_us);
        if self.mode != AcquisitionMode::Push {
            return None;
        }
        self.queue.pop_front()
    }

    fn poll(&mut self) -> bool {
        self.mode == AcquisitionMode::Poll && !self.queue.is_empty()
    }

    fn fetch(&mut self) -> Option<SensorSample> {
        if self.mode != AcquisitionMode::Poll {
            return None;
        }
        self.fetches += 1;
        self.queue.pop_front()
    }

    fn reset(&mut self) {
        self.resets += 1;
        self.queue.clear();
    }

    fn scales(&self) -> [f32; MAX_SENSORS_PER_INSTANCE] {
        self.scales
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_push_mode_drains_in_order() {
        let mut sensor = MockSensor::accel();
        sensor.push_vector(Vector3::new(1, 0, 0), 0);
        sensor.push_vector(Vector3::new(2, 0, 0), 0);

        let first = sensor.receive(100).await;
        assert!(matches!(first, Some(SensorSample::ThreeAxis(s)) if s.samples[0].x == 1));
        assert!(sensor.receive(0).await.is_some());
        assert!(sensor.receive(0).await.is_none());
        assert_eq!(sensor.receive_timeouts(), &[100, 0, 0]);
    }

    #[test]
    fn test_poll_mode() {
        let mut sensor = MockSensor::baro();
        assert!(!sensor.poll());
        sensor.push_scalar(101_325.0, 20.0);
        assert!(sensor.poll());
        assert!(matches!(sensor.fetch(), Some(SensorSample::OneAxis(_))));
        assert!(!sensor.poll());
        assert_eq!(sensor.fetches(), 1);
    }

    #[tokio::test]
    async fn test_self_test_and_reset() {
        let mut sensor = MockSensor::mag().with_failing_self_test();
        assert!(!sensor.self_test().await);
        sensor.push_vector(Vector3::zeros(), 0);
        sensor.reset();
        assert_eq!(sensor.resets(), 1);
        assert_eq!(sensor.pending(), 0);
    }
}
