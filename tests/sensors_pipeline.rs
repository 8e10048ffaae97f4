//! End-to-end runs of the sensors task against the mock platform.

use flight_sensors::core::traits::{MockState, SharedState};
use flight_sensors::devices::sensors::MockSensor;
use flight_sensors::platform::mock::{AlarmEvent, MockPlatform};
use flight_sensors::platform::traits::{AlarmSeverity, SettingsSource};
use flight_sensors::subsystems::sensors::{SensorRegistry, SensorsConfig, SensorsTask};
use flight_sensors_core::calibration::{CalibrationSnapshot, STANDARD_ATMOSPHERE_PA};
use flight_sensors_core::monitor::PerfCounter;
use flight_sensors_core::parameters::{attitude, mag, ParamValue, SettingsGroup};
use nalgebra::Vector3;

const EPSILON: f32 = 1e-4;

fn full_registry() -> SensorRegistry<MockSensor> {
    let mut registry = SensorRegistry::new();
    registry
        .register(MockSensor::gyro_accel().with_scales([0.001, 0.01]))
        .unwrap();
    registry.register(MockSensor::mag()).unwrap();
    registry.register(MockSensor::aux_mag()).unwrap();
    registry.register(MockSensor::baro()).unwrap();
    registry
}

#[tokio::test]
async fn full_board_publishes_every_kind() {
    let cell = MockState::new(CalibrationSnapshot::default());
    let mut task = SensorsTask::initialize(
        SensorsConfig::default(),
        full_registry(),
        MockPlatform::new(),
        &cell,
    )
    .unwrap();
    task.start();
    task.startup().await.unwrap();

    let divider = task.timing().aux_mag_divider as usize;
    for i in 0..divider {
        let sensors = task.registry_mut();
        for _ in 0..2 {
            sensors
                .get_mut(0)
                .unwrap()
                .push_dual(Vector3::new(0, 0, 1000), Vector3::new(100, 0, 0), 3000);
        }
        sensors.get_mut(1).unwrap().push_vector(Vector3::new(200, 0, 0), 2000);
        if i == 0 {
            sensors.get_mut(2).unwrap().push_vector(Vector3::new(0, 50, 0), 0);
            sensors
                .get_mut(3)
                .unwrap()
                .push_scalar(STANDARD_ATMOSPHERE_PA, 15.0);
        }
        task.run_iteration().await;
    }

    let store = &task.platform().store;
    assert_eq!(store.accel().len(), divider);
    assert_eq!(store.gyro().len(), divider);
    assert_eq!(store.mag().len(), divider);
    assert_eq!(store.aux_mag().len(), 1);
    assert_eq!(store.baro().len(), 1);

    let accel = store.accel()[0];
    assert!((accel.z - 1.0).abs() < EPSILON);
    assert!((accel.temperature - 30.0).abs() < EPSILON);
    assert!((store.gyro()[0].x - 1.0).abs() < EPSILON);
    assert!((store.mag()[0].x - 200.0).abs() < EPSILON);
    assert!((store.mag()[0].temperature - 20.0).abs() < EPSILON);
    assert_eq!(store.aux_mag()[0].vector(), Vector3::new(0.0, 50.0, 0.0));
    assert!(store.baro()[0].altitude.abs() < 0.01);

    let perf = &task.platform().perf;
    assert_eq!(perf.get(PerfCounter::AccelSamples).value, 2);
    assert_eq!(perf.get(PerfCounter::BaroPeriod).samples, 1);
    assert_eq!(perf.get(PerfCounter::SensorResets).value, 0);
    assert!(task
        .platform()
        .alarms
        .events()
        .iter()
        .all(|e| matches!(e, AlarmEvent::Clear(_))));
}

#[tokio::test]
async fn settings_change_rotates_and_rescales_magnetometer() {
    let cell = MockState::new(CalibrationSnapshot::default());
    let mut task = SensorsTask::initialize(
        SensorsConfig::default(),
        full_registry(),
        MockPlatform::new(),
        &cell,
    )
    .unwrap();
    task.start();
    task.startup().await.unwrap();

    let settings = &mut task.platform_mut().settings;
    let notified = settings
        .set_param(attitude::BOARD_YAW, ParamValue::Float(90.0))
        .unwrap();
    assert_eq!(notified, Some(SettingsGroup::BoardAttitude));
    for name in [
        mag::MAG_TRANSFORM[0],
        mag::MAG_TRANSFORM[4],
        mag::MAG_TRANSFORM[8],
    ] {
        settings.set_param(name, ParamValue::Float(2.0)).unwrap();
    }
    settings
        .set_param(mag::MAG_BIAS[0], ParamValue::Float(5.0))
        .unwrap();

    // nothing installed until the loop picks up the notification
    assert!(!cell.snapshot().needs_rotation);
    assert_eq!(task.platform().settings.load().attitude.rotation.yaw_deg, 90.0);

    let sensors = task.registry_mut();
    sensors
        .get_mut(0)
        .unwrap()
        .push_dual(Vector3::new(1000, 0, 0), Vector3::zeros(), 0);
    sensors.get_mut(1).unwrap().push_vector(Vector3::new(15, 0, 0), 0);
    task.run_iteration().await;
    assert!(cell.snapshot().needs_rotation);
    assert_eq!(cell.snapshot().mag_bias, Vector3::new(5.0, 0.0, 0.0));

    let store = &task.platform().store;
    let accel = store.accel()[0];
    assert!(accel.x.abs() < EPSILON);
    assert!((accel.y + 1.0).abs() < EPSILON);

    // (15 - 5) rotated to -Y, then scaled by 2
    let mag = store.mag()[0];
    assert!(mag.x.abs() < EPSILON);
    assert!((mag.y + 20.0).abs() < EPSILON);
    assert!(mag.z.abs() < EPSILON);
}

#[tokio::test]
async fn stalled_primary_recovers_without_touching_other_sensors() {
    let cell = MockState::new(CalibrationSnapshot::default());
    let mut task = SensorsTask::initialize(
        SensorsConfig::default(),
        full_registry(),
        MockPlatform::new(),
        &cell,
    )
    .unwrap();
    task.start();
    task.startup().await.unwrap();

    task.registry_mut()
        .get_mut(1)
        .unwrap()
        .push_vector(Vector3::new(1, 1, 1), 0);
    task.run_iteration().await;

    assert_eq!(task.registry().get(0).unwrap().resets(), 1);
    assert_eq!(task.registry().get(1).unwrap().resets(), 0);
    // the magnetometer is still processed in the stalled iteration
    assert_eq!(task.platform().store.mag().len(), 1);
    assert!(task.fault().has_error());

    task.registry_mut()
        .get_mut(0)
        .unwrap()
        .push_dual(Vector3::zeros(), Vector3::zeros(), 0);
    task.run_iteration().await;
    assert_eq!(
        task.platform().alarms.sensors(),
        Some(AlarmSeverity::Critical)
    );
    assert!(!task.fault().has_error());
    assert_eq!(task.platform().perf.get(PerfCounter::SensorResets).value, 1);
}
