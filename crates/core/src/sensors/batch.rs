//! Raw sample accumulation
//!
//! The loop drains every queued reading for a sensor into a [`RawSampleBatch`]
//! before averaging. Sums are kept in `i32` so a full period of `i16` samples
//! cannot overflow at realistic output data rates.

use super::types::{ThreeAxisSample, MAX_SENSORS_PER_INSTANCE};
use nalgebra::Vector3;

/// Raw temperature counts are centidegrees
pub const TEMPERATURE_SCALE: f32 = 0.01;

/// Averaged, scaled reading for one sub-sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AveragedSample {
    /// Scaled per-axis mean
    pub value: Vector3<f32>,
    /// Mean temperature in degrees Celsius
    pub temperature: f32,
}

/// Per-iteration accumulator, reused across iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSampleBatch {
    accum: [Vector3<i32>; MAX_SENSORS_PER_INSTANCE],
    temperature: i32,
    count: u32,
}

impl RawSampleBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            accum: [Vector3::zeros(); MAX_SENSORS_PER_INSTANCE],
            temperature: 0,
            count: 0,
        }
    }

    /// Reset sums and count
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of readings accumulated since the last clear
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Raw sum for a sub-sensor
    pub fn sum(&self, index: usize) -> Option<Vector3<i32>> {
        self.accum.get(index).copied()
    }

    /// Raw temperature sum (centidegrees)
    pub fn temperature_sum(&self) -> i32 {
        self.temperature
    }

    /// Add one driver reading
    pub fn accumulate(&mut self, sample: &ThreeAxisSample) {
        let valid = (sample.count as usize).min(MAX_SENSORS_PER_INSTANCE);
        for (acc, raw) in self.accum.iter_mut().zip(sample.samples.iter()).take(valid) {
            acc.x += raw.x as i32;
            acc.y += raw.y as i32;
            acc.z += raw.z as i32;
        }
        self.temperature += sample.temperature as i32;
        self.count += 1;
    }

    /// Average a sub-sensor and apply its driver scale
    ///
    /// Returns `None` for an empty batch or an out-of-range index.
    pub fn average(&self, index: usize, scale: f32) -> Option<AveragedSample> {
        if self.count == 0 {
            return None;
        }
        let sum = self.accum.get(index)?;
        let inv_count = 1.0 / self.count as f32;
        let k = scale * inv_count;
        Some(AveragedSample {
            value: Vector3::new(sum.x as f32 * k, sum.y as f32 * k, sum.z as f32 * k),
            temperature: self.temperature as f32 * inv_count * TEMPERATURE_SCALE,
        })
    }
}

impl Default for RawSampleBatch {
    fn default() -> Self {
        Self::new()
    }
}
