//! Synchronized state abstraction for platform-agnostic state access.
//!
//! The calibration snapshot is written by the settings side and read once per
//! iteration by the sensors loop. `SharedState` abstracts the lock so the
//! same code runs on target (critical-section mutex) and on host (`RefCell`).

/// Platform-agnostic synchronized state access.
///
/// - `EmbassyState<T>` for embedded targets using Embassy's critical-section Mutex
/// - `MockState<T>` for host testing using RefCell (single-threaded)
///
/// Writers that replace the whole value inside `with_mut` publish it as a
/// unit; readers never observe a half-written value.
///
/// # Example
///
/// ```ignore
/// fn install<S: SharedState<CalibrationSnapshot>>(cell: &S, next: CalibrationSnapshot) {
///     cell.with_mut(|current| *current = next);
/// }
/// ```
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;

    /// Copy the current value out
    fn snapshot(&self) -> T
    where
        T: Copy,
    {
        self.with(|v| *v)
    }

    /// Replace the whole value
    fn replace(&self, value: T) {
        self.with_mut(|v| *v = value)
    }
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Embassy-based synchronized state using critical-section Mutex.
///
/// The critical section makes access atomic with respect to interrupts and
/// other tasks, so it can back statics shared across executors.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    /// Creates a new `EmbassyState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
///
/// # Example
///
/// ```
/// use flight_sensors::core::traits::sync::{MockState, SharedState};
///
/// let state = MockState::new(42u32);
/// assert_eq!(state.snapshot(), 42);
///
/// state.replace(43);
/// assert_eq!(state.with(|v| *v), 43);
/// ```
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use flight_sensors_core::calibration::CalibrationSnapshot;
    use nalgebra::Vector3;

    #[test]
    fn mock_state_with_read() {
        let state = MockState::new(42u32);
        assert_eq!(state.with(|v| *v), 42);
    }

    #[test]
    fn mock_state_snapshot_is_a_copy() {
        let state = MockState::new(CalibrationSnapshot::default());
        let copy = state.snapshot();
        state.with_mut(|s| s.accel_bias = Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(copy.accel_bias, Vector3::zeros());
        assert_eq!(state.snapshot().accel_bias, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn mock_state_replace_whole_value() {
        let state = MockState::new(CalibrationSnapshot::default());
        let mut next = CalibrationSnapshot::default();
        next.gyro_bias = Vector3::new(0.1, 0.0, 0.0);
        next.needs_rotation = true;
        state.replace(next);
        assert_eq!(state.snapshot(), next);
    }

    #[test]
    #[should_panic(expected = "already borrowed")]
    fn mock_state_double_borrow_panics() {
        let state = MockState::new(0u32);
        state.with(|_v| {
            let _ = state.inner.borrow_mut();
        });
    }
}
