//! Temperature-dependent bias estimation
//!
//! Sensor offsets drift with die temperature. Each calibration group keeps a
//! low-pass-filtered temperature and periodically re-evaluates its bias
//! polynomial at that temperature, clamped to the range the coefficients were
//! characterised over.
//!
//! # Cadence
//!
//! The countdown starts at the group's interval `N` and is decremented on every
//! update. When it reaches zero and the group's calibration is enabled, the
//! bias is recomputed and the countdown reloaded, so the first recompute lands
//! on update `N` and the following ones every `N` updates after it. While
//! calibration is disabled the countdown rests at zero, so enabling it
//! recomputes on the next update.

use core::f32::consts::PI;
use nalgebra::Vector3;

/// Low-pass cutoff shared by all temperature filters (Hz)
pub const TEMP_LPF_CUTOFF_HZ: f32 = 5.0;

/// Bias recompute interval for accelerometer and gyroscope (updates)
pub const ACCEL_GYRO_CALIB_INTERVAL: u8 = 30;

/// Bias recompute interval for the barometer (updates)
pub const BARO_CALIB_INTERVAL: u8 = 10;

/// Nominal barometer sample interval used for its filter (s)
pub const BARO_NOMINAL_DT: f32 = 1.0 / 120.0;

/// Minimum calibrated extent for compensation to be enabled (°C)
pub const MIN_CALIBRATED_EXTENT: f32 = 0.1;

/// Coefficients at or below this magnitude count as zero
pub const MIN_COEFFICIENT: f32 = 1e-9;

/// Single-pole low-pass smoothing factor
///
/// ```text
/// alpha = dt / (dt + 1 / (2π·fc))
/// ```
pub fn lpf_alpha(dt: f32, cutoff_hz: f32) -> f32 {
    dt / (dt + 1.0 / (2.0 * PI * cutoff_hz))
}

/// Temperature range the coefficients are valid over (°C)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempExtent {
    pub min: f32,
    pub max: f32,
}

impl TempExtent {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the calibrated range
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Clamp a temperature into the range, tolerating swapped bounds
    pub fn clamp(&self, t: f32) -> f32 {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        t.max(lo).min(hi)
    }
}

impl Default for TempExtent {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A temperature bias polynomial with its validity range
pub trait TempCompensation {
    type Bias: Copy + Default;

    /// Whether the polynomial should be evaluated at all
    fn is_enabled(&self) -> bool;

    /// Calibrated range
    fn extent(&self) -> TempExtent;

    /// Evaluate the bias at an (already clamped) temperature
    fn bias_at(&self, t: f32) -> Self::Bias;
}

fn any_significant(coeffs: &[f32]) -> bool {
    coeffs.iter().any(|c| libm::fabsf(*c) > MIN_COEFFICIENT)
}

/// Accelerometer: `bias = coeff · t` per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelTempModel {
    pub coeff: Vector3<f32>,
    pub extent: TempExtent,
    pub enabled: bool,
}

impl AccelTempModel {
    pub fn new(coeff: Vector3<f32>, extent: TempExtent) -> Self {
        let enabled = extent.width() > MIN_CALIBRATED_EXTENT
            && any_significant(&[coeff.x, coeff.y, coeff.z]);
        Self {
            coeff,
            extent,
            enabled,
        }
    }
}

impl Default for AccelTempModel {
    fn default() -> Self {
        Self::new(Vector3::zeros(), TempExtent::default())
    }
}

impl TempCompensation for AccelTempModel {
    type Bias = Vector3<f32>;

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn extent(&self) -> TempExtent {
        self.extent
    }

    fn bias_at(&self, t: f32) -> Vector3<f32> {
        self.coeff * t
    }
}

/// Gyroscope: `bias = (linear + quadratic · t) · t` per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroTempModel {
    pub linear: Vector3<f32>,
    pub quadratic: Vector3<f32>,
    pub extent: TempExtent,
    pub enabled: bool,
}

impl GyroTempModel {
    pub fn new(linear: Vector3<f32>, quadratic: Vector3<f32>, extent: TempExtent) -> Self {
        let enabled = extent.width() > MIN_CALIBRATED_EXTENT
            && any_significant(&[
                linear.x,
                linear.y,
                linear.z,
                quadratic.x,
                quadratic.y,
                quadratic.z,
            ]);
        Self {
            linear,
            quadratic,
            extent,
            enabled,
        }
    }
}

impl Default for GyroTempModel {
    fn default() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros(), TempExtent::default())
    }
}

impl TempCompensation for GyroTempModel {
    type Bias = Vector3<f32>;

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn extent(&self) -> TempExtent {
        self.extent
    }

    fn bias_at(&self, t: f32) -> Vector3<f32> {
        (self.linear + self.quadratic * t) * t
    }
}

/// Barometer: `bias = a + ((d·t + c)·t + b)·t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaroTempModel {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub extent: TempExtent,
    pub enabled: bool,
}

impl BaroTempModel {
    pub fn new(coeffs: [f32; 4], extent: TempExtent) -> Self {
        let enabled = extent.width() > MIN_CALIBRATED_EXTENT && any_significant(&coeffs);
        let [a, b, c, d] = coeffs;
        Self {
            a,
            b,
            c,
            d,
            extent,
            enabled,
        }
    }
}

impl Default for BaroTempModel {
    fn default() -> Self {
        Self::new([0.0; 4], TempExtent::default())
    }
}

impl TempCompensation for BaroTempModel {
    type Bias = f32;

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn extent(&self) -> TempExtent {
        self.extent
    }

    fn bias_at(&self, t: f32) -> f32 {
        self.a + ((self.d * t + self.c) * t + self.b) * t
    }
}

/// Filtered temperature plus the bias derived from it
#[derive(Debug, Clone, Copy)]
pub struct TemperatureBiasFilter<B> {
    alpha: f32,
    interval: u8,
    temperature: f32,
    countdown: u8,
    bias: B,
}

impl<B: Copy + Default> TemperatureBiasFilter<B> {
    /// Create a filter for a given sample interval and recompute cadence
    pub fn new(dt: f32, interval: u8) -> Self {
        Self {
            alpha: lpf_alpha(dt, TEMP_LPF_CUTOFF_HZ),
            interval,
            temperature: f32::NAN,
            countdown: interval,
            bias: B::default(),
        }
    }

    /// Smoothing factor in use
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Filtered temperature, `NaN` before the first update
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Current bias
    pub fn bias(&self) -> B {
        self.bias
    }

    /// Feed one temperature observation and return the bias to apply
    pub fn update<M>(&mut self, measured: f32, model: &M) -> B
    where
        M: TempCompensation<Bias = B>,
    {
        if self.temperature.is_nan() {
            self.temperature = measured;
        }
        self.temperature += self.alpha * (measured - self.temperature);

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 && model.is_enabled() {
            self.countdown = self.interval;
            let t = model.extent().clamp(self.temperature);
            self.bias = model.bias_at(t);
        }

        self.bias
    }
}

/// The three filters the pipeline runs
#[derive(Debug, Clone, Copy)]
pub struct TemperatureFilters {
    pub accel: TemperatureBiasFilter<Vector3<f32>>,
    pub gyro: TemperatureBiasFilter<Vector3<f32>>,
    pub baro: TemperatureBiasFilter<f32>,
}

impl TemperatureFilters {
    /// Accel/gyro filter at the loop period, baro at its nominal rate
    pub fn new(loop_dt: f32) -> Self {
        Self {
            accel: TemperatureBiasFilter::new(loop_dt, ACCEL_GYRO_CALIB_INTERVAL),
            gyro: TemperatureBiasFilter::new(loop_dt, ACCEL_GYRO_CALIB_INTERVAL),
            baro: TemperatureBiasFilter::new(BARO_NOMINAL_DT, BARO_CALIB_INTERVAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        libm::fabsf(a - b) < eps
    }

    fn enabled_baro() -> BaroTempModel {
        BaroTempModel::new([1.0, 0.0, 0.0, 0.0], TempExtent::new(-10.0, 50.0))
    }

    #[test]
    fn test_lpf_alpha() {
        let dt = 1.0 / 500.0;
        let expected = dt / (dt + 1.0 / (2.0 * PI * 5.0));
        assert!(approx(lpf_alpha(dt, 5.0), expected, 1e-7));
        assert!(lpf_alpha(dt, 5.0) > 0.0 && lpf_alpha(dt, 5.0) < 1.0);
    }

    #[test]
    fn test_first_update_initialises_filter() {
        let mut filter = TemperatureBiasFilter::<f32>::new(0.01, 10);
        assert!(filter.temperature().is_nan());
        filter.update(31.5, &BaroTempModel::default());
        assert_eq!(filter.temperature(), 31.5);
    }

    #[test]
    fn test_filter_step() {
        let mut filter = TemperatureBiasFilter::<f32>::new(0.01, 10);
        let model = BaroTempModel::default();
        filter.update(20.0, &model);
        filter.update(30.0, &model);
        let expected = 20.0 + filter.alpha() * 10.0;
        assert!(approx(filter.temperature(), expected, 1e-5));
    }

    #[test]
    fn test_recompute_every_interval_when_enabled() {
        let mut filter = TemperatureBiasFilter::<f32>::new(BARO_NOMINAL_DT, BARO_CALIB_INTERVAL);
        let mut model = enabled_baro();
        let mut recomputes = 0;
        let mut last = filter.bias();
        for _ in 0..(BARO_CALIB_INTERVAL as usize * 5) {
            // bump the constant term so every recompute is visible
            model.a += 1.0;
            let bias = filter.update(20.0, &model);
            if bias != last {
                recomputes += 1;
                last = bias;
            }
        }
        assert_eq!(recomputes, 5);
    }

    #[test]
    fn test_recompute_interval_accel_gyro() {
        let mut filter =
            TemperatureBiasFilter::<Vector3<f32>>::new(0.002, ACCEL_GYRO_CALIB_INTERVAL);
        let mut model = AccelTempModel::new(Vector3::new(0.1, 0.0, 0.0), TempExtent::new(0.0, 60.0));
        let mut fired_at = heapless::Vec::<usize, 8>::new();
        let mut last = filter.bias();
        for call in 1..=90 {
            model.coeff.x += 0.001;
            let bias = filter.update(25.0, &model);
            if bias != last {
                fired_at.push(call).unwrap();
                last = bias;
            }
        }
        assert_eq!(fired_at.as_slice(), &[30, 60, 90]);
    }

    #[test]
    fn test_first_recompute_on_interval_update() {
        let model = AccelTempModel::new(Vector3::new(0.01, 0.0, 0.0), TempExtent::new(0.0, 50.0));
        let mut filter =
            TemperatureBiasFilter::<Vector3<f32>>::new(0.002, ACCEL_GYRO_CALIB_INTERVAL);
        let mut first = None;
        for call in 1..=40 {
            if filter.update(25.0, &model).x != 0.0 {
                first = Some(call);
                break;
            }
        }
        assert_eq!(first, Some(30));
    }

    #[test]
    fn test_enabling_recomputes_on_next_update() {
        let mut filter = TemperatureBiasFilter::<f32>::new(BARO_NOMINAL_DT, BARO_CALIB_INTERVAL);
        for _ in 0..25 {
            filter.update(20.0, &BaroTempModel::default());
        }
        assert_eq!(filter.update(20.0, &enabled_baro()), 1.0);
    }

    #[test]
    fn test_no_recompute_with_narrow_extent() {
        let model = BaroTempModel::new([5.0, 1.0, 0.0, 0.0], TempExtent::new(20.0, 20.05));
        assert!(!model.is_enabled());
        let mut filter = TemperatureBiasFilter::<f32>::new(BARO_NOMINAL_DT, BARO_CALIB_INTERVAL);
        for _ in 0..100 {
            assert_eq!(filter.update(25.0, &model), 0.0);
        }
    }

    #[test]
    fn test_no_recompute_with_zero_coefficients() {
        let model = AccelTempModel::new(Vector3::new(1e-10, 0.0, -1e-10), TempExtent::new(0.0, 60.0));
        assert!(!model.is_enabled());
        let mut filter = TemperatureBiasFilter::<Vector3<f32>>::new(0.002, 30);
        for _ in 0..100 {
            assert_eq!(filter.update(25.0, &model), Vector3::zeros());
        }
    }

    #[test]
    fn test_bias_uses_clamped_temperature() {
        let model = AccelTempModel::new(Vector3::new(1.0, 2.0, 3.0), TempExtent::new(0.0, 40.0));
        let mut filter = TemperatureBiasFilter::<Vector3<f32>>::new(0.002, 1);
        let bias = filter.update(80.0, &model);
        assert_eq!(bias, Vector3::new(40.0, 80.0, 120.0));
    }

    #[test]
    fn test_gyro_polynomial() {
        let model = GyroTempModel::new(
            Vector3::new(0.1, 0.0, 0.0),
            Vector3::new(0.01, 0.0, 0.0),
            TempExtent::new(0.0, 50.0),
        );
        assert!(model.is_enabled());
        // (0.1 + 0.01 * 10) * 10 = 2
        assert!(approx(model.bias_at(10.0).x, 2.0, 1e-6));
    }

    #[test]
    fn test_gyro_enabled_by_quadratic_term_alone() {
        let model = GyroTempModel::new(
            Vector3::zeros(),
            Vector3::new(0.0, 1e-3, 0.0),
            TempExtent::new(0.0, 50.0),
        );
        assert!(model.is_enabled());
    }

    #[test]
    fn test_baro_polynomial() {
        let model = BaroTempModel::new([1.0, 2.0, 3.0, 4.0], TempExtent::new(0.0, 50.0));
        // 1 + ((4*2 + 3)*2 + 2)*2 = 1 + 24*2 = 49
        assert!(approx(model.bias_at(2.0), 49.0, 1e-5));
    }

    #[test]
    fn test_bias_retained_when_disabled() {
        let enabled = enabled_baro();
        let disabled = BaroTempModel::default();
        let mut filter = TemperatureBiasFilter::<f32>::new(BARO_NOMINAL_DT, 1);
        let bias = filter.update(20.0, &enabled);
        assert_eq!(bias, 1.0);
        for _ in 0..5 {
            assert_eq!(filter.update(20.0, &disabled), 1.0);
        }
    }

    #[test]
    fn test_extent_clamp_handles_swapped_bounds() {
        let extent = TempExtent::new(40.0, 10.0);
        assert_eq!(extent.clamp(0.0), 10.0);
        assert_eq!(extent.clamp(50.0), 40.0);
        assert_eq!(extent.clamp(25.0), 25.0);
    }

    #[test]
    fn test_filters_use_expected_rates() {
        let filters = TemperatureFilters::new(0.002);
        assert!(approx(filters.accel.alpha(), lpf_alpha(0.002, 5.0), 1e-7));
        assert!(approx(filters.baro.alpha(), lpf_alpha(BARO_NOMINAL_DT, 5.0), 1e-7));
    }
}
