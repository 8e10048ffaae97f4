//! Per-sensor processing
//!
//! Averages a drained batch, runs it through the calibration formulas with
//! the current temperature bias, publishes the record and feeds the perf
//! counters. Dispatch is by sensor kind.

use crate::log_error;
use crate::platform::traits::{ObjectStore, SensorsPlatform};
use flight_sensors_core::calibration::{pressure_altitude, CalibrationSnapshot, TemperatureFilters};
use flight_sensors_core::monitor::{PerfCounter, PerfMetrics};
use flight_sensors_core::sensors::{
    AccelSensor, AuxMagSensor, AveragedSample, BaroSensor, GyroSensor, MagSensor, OneAxisSample,
    RawSampleBatch, SensorKind, SensorObject, MAX_SENSORS_PER_INSTANCE,
};

/// Sub-sensor index of the gyro inside a combined gyro/accel package
const COMBINED_GYRO_INDEX: usize = 1;

/// Calibration and publication state owned by the sensors loop
#[derive(Debug, Clone, Copy)]
pub struct SampleProcessor {
    filters: TemperatureFilters,
}

impl SampleProcessor {
    /// `loop_dt` is the main loop period in seconds
    pub fn new(loop_dt: f32) -> Self {
        Self {
            filters: TemperatureFilters::new(loop_dt),
        }
    }

    pub fn filters(&self) -> &TemperatureFilters {
        &self.filters
    }

    /// Process a non-empty three-axis batch
    ///
    /// Accelerometer-bearing kinds and both magnetometers use sub-sensor 0;
    /// magnetometers stop there. Gyro-bearing kinds then process the gyro
    /// sub-sensor (index 1 on a combined package).
    pub fn process_three_axis<P: SensorsPlatform>(
        &mut self,
        kind: SensorKind,
        batch: &RawSampleBatch,
        scales: &[f32; MAX_SENSORS_PER_INSTANCE],
        calibration: &CalibrationSnapshot,
        platform: &mut P,
        now_us: u64,
    ) {
        if kind.contains(SensorKind::ACCEL) || kind == SensorKind::MAG || kind == SensorKind::AUX_MAG
        {
            let Some(sample) = batch.average(0, scales[0]) else {
                return;
            };

            if kind == SensorKind::MAG {
                platform.metrics_mut().measure_period(PerfCounter::MagPeriod, now_us);
                self.handle_mag(&sample, calibration, platform.store_mut());
                return;
            }

            if kind == SensorKind::AUX_MAG {
                platform.metrics_mut().measure_period(PerfCounter::MagPeriod, now_us);
                self.handle_aux_mag(&sample, calibration, platform.store_mut());
                return;
            }

            let metrics = platform.metrics_mut();
            metrics.track_value(PerfCounter::AccelSamples, batch.count());
            metrics.measure_period(PerfCounter::AccelPeriod, now_us);
            self.handle_accel(&sample, calibration, platform.store_mut());
        }

        if kind.contains(SensorKind::GYRO) {
            let index = if kind == SensorKind::GYRO_ACCEL {
                COMBINED_GYRO_INDEX
            } else {
                0
            };
            if let Some(sample) = batch.average(index, scales[index]) {
                self.handle_gyro(&sample, calibration, platform.store_mut());
            }
        }
    }

    /// Process a scalar reading
    ///
    /// # Panics
    ///
    /// Only barometers deliver scalar readings; any other kind is a driver
    /// wiring bug.
    pub fn process_one_axis<P: SensorsPlatform>(
        &mut self,
        kind: SensorKind,
        sample: &OneAxisSample,
        calibration: &CalibrationSnapshot,
        platform: &mut P,
        now_us: u64,
    ) {
        if kind != SensorKind::BARO {
            log_error!("sensors: scalar sample from {} sensor", kind.as_str());
            panic!("scalar sample from non-barometer sensor");
        }
        platform.metrics_mut().measure_period(PerfCounter::BaroPeriod, now_us);
        self.handle_baro(sample, calibration, platform.store_mut());
    }

    fn handle_accel<O: ObjectStore>(
        &mut self,
        sample: &AveragedSample,
        calibration: &CalibrationSnapshot,
        store: &mut O,
    ) {
        let temp_bias = self
            .filters
            .accel
            .update(sample.temperature, &calibration.accel_temp);
        let value = calibration.apply_accel(sample.value, temp_bias);
        store.set(SensorObject::Accel(AccelSensor::new(value, sample.temperature)));
    }

    fn handle_gyro<O: ObjectStore>(
        &mut self,
        sample: &AveragedSample,
        calibration: &CalibrationSnapshot,
        store: &mut O,
    ) {
        let temp_bias = self
            .filters
            .gyro
            .update(sample.temperature, &calibration.gyro_temp);
        let value = calibration.apply_gyro(sample.value, temp_bias);
        store.set(SensorObject::Gyro(GyroSensor::new(value, sample.temperature)));
    }

    fn handle_mag<O: ObjectStore>(
        &mut self,
        sample: &AveragedSample,
        calibration: &CalibrationSnapshot,
        store: &mut O,
    ) {
        let value = calibration.apply_mag(sample.value);
        store.set(SensorObject::Mag(MagSensor::new(value, sample.temperature)));
    }

    fn handle_aux_mag<O: ObjectStore>(
        &mut self,
        sample: &AveragedSample,
        calibration: &CalibrationSnapshot,
        store: &mut O,
    ) {
        let value = calibration.apply_aux_mag(sample.value);
        store.set(SensorObject::AuxMag(AuxMagSensor::new(value)));
    }

    fn handle_baro<O: ObjectStore>(
        &mut self,
        sample: &OneAxisSample,
        calibration: &CalibrationSnapshot,
        store: &mut O,
    ) {
        let temp_bias = self
            .filters
            .baro
            .update(sample.temperature, &calibration.baro_temp);
        let pressure = sample.sample - temp_bias;
        let altitude = pressure_altitude(pressure);

        // NaN altitude (non-positive pressure) is dropped without a fault
        if altitude.is_nan() {
            return;
        }

        store.set(SensorObject::Baro(BaroSensor {
            altitude,
            temperature: sample.temperature,
            pressure,
        }));
    }
}
