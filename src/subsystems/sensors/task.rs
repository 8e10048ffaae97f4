//! Sensors scheduling task
//!
//! One periodic task drains every registered sensor, calibrates the averaged
//! readings and publishes them to the object store. The primary
//! (accelerometer-role) sensor paces the loop: its queue receive may block
//! for up to one period while nothing has arrived. An iteration in which the
//! primary produced nothing resets the driver and raises the sensors alarm on
//! the following iteration.
//!
//! ## Lifecycle
//!
//! ```ignore
//! let mut task = SensorsTask::initialize(config, registry, platform, &CALIBRATION)?;
//! task.start();
//! task.run().await
//! ```
//!
//! `run` performs the startup self-test and then iterates forever; a failed
//! startup parks the task in a loop that only keeps the watchdog fed.

use super::{SampleProcessor, SensorRegistry, SensorsConfig, SettingsSynchronizer};
use crate::core::traits::SharedState;
use crate::devices::traits::SensorDriver;
use crate::platform::traits::{
    AlarmSeverity, AlarmSink, SensorsPlatform, SettingsSource, SystemAlarm, TaskMonitor,
    TaskTimer, Watchdog, WatchdogFlag,
};
use crate::{log_debug, log_error, log_info, log_warn};
use flight_sensors_core::calibration::CalibrationSnapshot;
use flight_sensors_core::monitor::{FaultMonitor, LoopState, PerfCounter, PerfMetrics};
use flight_sensors_core::parameters::SettingsGroup;
use flight_sensors_core::scheduler::{AuxMagThrottle, LoopTiming, TaskMetadata};
use flight_sensors_core::sensors::{AcquisitionMode, RawSampleBatch, SensorKind, SensorSample};
use flight_sensors_core::SensorsError;

/// Name reported to the task monitor
pub const TASK_NAME: &str = "sensors";

/// The sensors task
///
/// Generic over the platform collaborators `P`, the driver type `D` and the
/// shared calibration cell `S`.
pub struct SensorsTask<'a, P, D, S> {
    config: SensorsConfig,
    timing: LoopTiming,
    registry: SensorRegistry<D>,
    platform: P,
    calibration: &'a S,
    batch: RawSampleBatch,
    processor: SampleProcessor,
    aux_mag: AuxMagThrottle,
    fault: FaultMonitor,
    next_wake_us: u64,
    task_id: Option<usize>,
    last_start_us: Option<u64>,
}

impl<'a, P, D, S> SensorsTask<'a, P, D, S>
where
    P: SensorsPlatform,
    D: SensorDriver,
    S: SharedState<CalibrationSnapshot>,
{
    /// Validate the configuration and subscribe to every settings group
    pub fn initialize(
        config: SensorsConfig,
        registry: SensorRegistry<D>,
        mut platform: P,
        calibration: &'a S,
    ) -> Result<Self, SensorsError> {
        let timing =
            LoopTiming::from_rate(config.sample_rate_hz).ok_or(SensorsError::InvalidSampleRate)?;

        for group in SettingsGroup::ALL {
            platform.settings_mut().subscribe(group);
        }

        log_info!(
            "sensors: initialized ({} Hz, period {} us, aux mag 1/{}, {} sensors)",
            timing.rate_hz,
            timing.period_us,
            timing.aux_mag_divider,
            registry.len()
        );

        Ok(Self {
            config,
            timing,
            registry,
            platform,
            calibration,
            batch: RawSampleBatch::new(),
            processor: SampleProcessor::new(timing.period_s()),
            aux_mag: AuxMagThrottle::new(timing.aux_mag_divider),
            fault: FaultMonitor::new(),
            next_wake_us: 0,
            task_id: None,
            last_start_us: None,
        })
    }

    /// Register with the watchdog and the task monitor
    pub fn start(&mut self) {
        self.platform
            .watchdog_mut()
            .register_flag(WatchdogFlag::SENSORS);

        let id = self.platform.monitor_mut().register_task(TaskMetadata {
            name: TASK_NAME,
            rate_hz: self.timing.rate_hz,
            priority: self.config.priority,
            budget_us: self.config.budget_us,
        });
        self.task_id = Some(id);

        log_info!("sensors: started (task id {})", id);
    }

    /// Forced settings sync followed by the one-shot sensor self-test
    ///
    /// On failure the sensors alarm is left at critical severity.
    pub async fn startup(&mut self) -> Result<(), SensorsError> {
        self.platform.alarms_mut().clear(SystemAlarm::Sensors);
        // the forced sync covers anything changed before startup
        self.platform.settings_mut().take_changed();
        self.sync_settings();

        if self.registry.is_empty() {
            log_error!("sensors: no sensors registered");
            self.platform
                .alarms_mut()
                .set(SystemAlarm::Sensors, AlarmSeverity::Critical);
            return Err(SensorsError::NoSensors);
        }

        for sensor in self.registry.iter_mut() {
            self.platform.watchdog_mut().reload(WatchdogFlag::SENSORS);
            let kind = sensor.kind();
            if !sensor.self_test().await {
                log_error!("sensors: {} self-test failed", kind.as_str());
                self.platform
                    .alarms_mut()
                    .set(SystemAlarm::Sensors, AlarmSeverity::Critical);
                return Err(SensorsError::SelfTestFailed);
            }
            log_debug!("sensors: {} self-test passed", kind.as_str());
        }

        self.next_wake_us = self.platform.timer().now_us();
        self.last_start_us = None;
        Ok(())
    }

    /// One scheduling period
    ///
    /// # Panics
    ///
    /// Panics if a driver delivers a sample whose shape does not match its
    /// kind.
    pub async fn run_iteration(&mut self) {
        let period_us = self.timing.period_us;

        match self.fault.begin_iteration() {
            LoopState::ErrorRecovery => {
                self.platform.watchdog_mut().reload(WatchdogFlag::SENSORS);
                self.next_wake_us = self
                    .platform
                    .timer()
                    .now_us()
                    .saturating_add(period_us as u64);
                self.platform
                    .timer_mut()
                    .delay_until(self.next_wake_us)
                    .await;
                self.platform
                    .alarms_mut()
                    .set(SystemAlarm::Sensors, AlarmSeverity::Critical);
            }
            LoopState::Running => {
                self.platform.alarms_mut().clear(SystemAlarm::Sensors);
            }
        }

        if self.platform.settings_mut().take_changed() {
            log_debug!("sensors: settings changed");
            self.sync_settings();
        }

        let start_us = self.platform.timer().now_us();
        let calibration = self.calibration.snapshot();
        self.batch.clear();
        let visit_aux_mag = self.aux_mag.advance();

        for sensor in self.registry.iter_mut() {
            let kind = sensor.kind();
            if kind == SensorKind::AUX_MAG && !visit_aux_mag {
                continue;
            }

            match sensor.mode() {
                AcquisitionMode::Push => {
                    let primary = kind.is_primary();
                    Self::drain(sensor, &mut self.batch, primary, period_us).await;

                    if self.batch.count() > 0 {
                        let now_us = self.platform.timer().now_us();
                        self.processor.process_three_axis(
                            kind,
                            &self.batch,
                            &sensor.scales(),
                            &calibration,
                            &mut self.platform,
                            now_us,
                        );
                        self.batch.clear();
                    } else if primary {
                        sensor.reset();
                        let resets = self.fault.record_starvation();
                        self.platform
                            .metrics_mut()
                            .track_value(PerfCounter::SensorResets, resets);
                        log_warn!(
                            "sensors: no data from {}, driver reset ({} total)",
                            kind.as_str(),
                            resets
                        );
                    }
                }
                AcquisitionMode::Poll => {
                    if !sensor.poll() {
                        continue;
                    }
                    let now_us = self.platform.timer().now_us();
                    match sensor.fetch() {
                        Some(SensorSample::ThreeAxis(sample)) => {
                            if !kind.is_three_axis() {
                                log_error!("sensors: vector sample from {}", kind.as_str());
                                panic!("vector sample from scalar sensor");
                            }
                            self.batch.accumulate(&sample);
                            self.processor.process_three_axis(
                                kind,
                                &self.batch,
                                &sensor.scales(),
                                &calibration,
                                &mut self.platform,
                                now_us,
                            );
                        }
                        Some(SensorSample::OneAxis(sample)) => {
                            self.processor.process_one_axis(
                                kind,
                                &sample,
                                &calibration,
                                &mut self.platform,
                                now_us,
                            );
                        }
                        None => {}
                    }
                    self.batch.clear();
                }
            }
        }

        let end_us = self.platform.timer().now_us();
        self.platform
            .metrics_mut()
            .measure_period(PerfCounter::SensorPeriod, end_us);

        if let Some(id) = self.task_id {
            let execution_us = saturate_u32(end_us.saturating_sub(start_us));
            let actual_period_us = self
                .last_start_us
                .map(|last| saturate_u32(start_us.saturating_sub(last)))
                .unwrap_or(period_us);
            self.platform
                .monitor_mut()
                .record_execution(id, execution_us, actual_period_us);
        }
        self.last_start_us = Some(start_us);

        self.platform.watchdog_mut().reload(WatchdogFlag::SENSORS);
        self.next_wake_us = self.next_wake_us.saturating_add(period_us as u64);
        self.platform
            .timer_mut()
            .delay_until(self.next_wake_us)
            .await;
    }

    /// One step of the post-failure idle loop
    pub async fn halt_step(&mut self) {
        self.platform.watchdog_mut().reload(WatchdogFlag::SENSORS);
        self.platform
            .timer_mut()
            .delay_us(self.config.halt_delay_us)
            .await;
    }

    /// Startup, then iterate forever
    pub async fn run(&mut self) -> ! {
        if let Err(e) = self.startup().await {
            log_error!("sensors: halted ({})", e.as_str());
            loop {
                self.halt_step().await;
            }
        }

        loop {
            self.run_iteration().await;
        }
    }

    /// Drain a push-mode queue into `batch`
    ///
    /// Only the primary sensor waits, and only while nothing has arrived.
    async fn drain(sensor: &mut D, batch: &mut RawSampleBatch, primary: bool, period_us: u32) {
        loop {
            let timeout_us = if primary && batch.count() == 0 {
                period_us
            } else {
                0
            };
            match sensor.receive(timeout_us).await {
                Some(SensorSample::ThreeAxis(sample)) => batch.accumulate(&sample),
                Some(SensorSample::OneAxis(_)) => {
                    log_error!("sensors: queued scalar sample from {}", sensor.kind().as_str());
                    panic!("scalar sample on a push queue");
                }
                None => break,
            }
        }
    }

    /// Handle for publishing calibration from the settings side
    pub fn synchronizer(&self) -> SettingsSynchronizer<'a, S> {
        SettingsSynchronizer::new(self.calibration)
    }

    /// Reload every settings group and install the derived snapshot
    pub fn sync_settings(&mut self) -> CalibrationSnapshot {
        self.synchronizer()
            .settings_updated(self.platform.settings())
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn registry(&self) -> &SensorRegistry<D> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SensorRegistry<D> {
        &mut self.registry
    }

    pub fn fault(&self) -> &FaultMonitor {
        &self.fault
    }

    pub fn timing(&self) -> &LoopTiming {
        &self.timing
    }

    pub fn processor(&self) -> &SampleProcessor {
        &self.processor
    }
}

fn saturate_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
