//! Parameter storage
//!
//! Name → value map backing every settings group. Groups register their
//! defaults once and read themselves back with `from_store`; writers go
//! through [`ParameterStore::set`], which only accepts registered names.

use super::error::ParameterError;
use heapless::index_map::FnvIndexMap;
use heapless::String;
use nalgebra::{Matrix3, Vector3};

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 128;

/// Parameter value
///
/// Every sensor setting is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
}

impl ParamValue {
    pub fn as_f32(&self) -> f32 {
        match self {
            ParamValue::Float(v) => *v,
        }
    }
}

/// Parameter store for sensor configuration
pub struct ParameterStore {
    entries: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
}

fn key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidName)?;
    Ok(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = key(name).ok()?;
        self.entries.get(&key)
    }

    /// Read a numeric parameter, falling back to `default`
    pub fn get_f32(&self, name: &str, default: f32) -> f32 {
        self.get(name).map(ParamValue::as_f32).unwrap_or(default)
    }

    /// Read three parameters as a vector
    pub fn get_vector3(&self, names: &[&str; 3], default: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(
            self.get_f32(names[0], default.x),
            self.get_f32(names[1], default.y),
            self.get_f32(names[2], default.z),
        )
    }

    /// Read nine parameters as a row-major matrix
    pub fn get_matrix3(&self, names: &[&str; 9], default: Matrix3<f32>) -> Matrix3<f32> {
        let mut m = default;
        for (i, name) in names.iter().enumerate() {
            let (row, col) = (i / 3, i % 3);
            m[(row, col)] = self.get_f32(name, default[(row, col)]);
        }
        m
    }

    /// Set parameter value
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = key(name)?;
        let entry = self
            .entries
            .get_mut(&key)
            .ok_or(ParameterError::UnknownParameter)?;
        *entry = value;
        Ok(())
    }

    /// Register a float parameter
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register_f32(&mut self, name: &str, default: f32) -> Result<(), ParameterError> {
        let key = key(name)?;

        if self.entries.contains_key(&key) {
            return Ok(());
        }

        self.entries
            .insert(key, ParamValue::Float(default))
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Register three float parameters from a vector
    pub fn register_vector3(
        &mut self,
        names: &[&str; 3],
        default: Vector3<f32>,
    ) -> Result<(), ParameterError> {
        for (name, v) in names.iter().zip(default.iter()) {
            self.register_f32(name, *v)?;
        }
        Ok(())
    }

    /// Register nine float parameters from a row-major matrix
    pub fn register_matrix3(
        &mut self,
        names: &[&str; 9],
        default: Matrix3<f32>,
    ) -> Result<(), ParameterError> {
        for (i, name) in names.iter().enumerate() {
            self.register_f32(name, default[(i / 3, i % 3)])?;
        }
        Ok(())
    }

    /// Get total parameter count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
