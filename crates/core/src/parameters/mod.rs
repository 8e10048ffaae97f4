//! Parameter store and sensor settings groups
//!
//! Each settings group registers its defaults in a [`ParameterStore`] and
//! reads itself back with `from_store`. [`SensorSettings`] bundles every group
//! the calibration snapshot is derived from.

pub mod accel_gyro;
pub mod attitude;
pub mod baro;
pub mod error;
pub mod mag;
pub mod storage;

pub use accel_gyro::AccelGyroSettings;
pub use attitude::AttitudeSettings;
pub use baro::BaroCorrectionSettings;
pub use error::ParameterError;
pub use mag::{AuxMagSettings, MagCalibration};
pub use storage::{ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};

/// Settings groups that feed the calibration snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsGroup {
    AccelGyro,
    MagCalibration,
    AuxMag,
    BoardAttitude,
    BaroCorrection,
}

impl SettingsGroup {
    pub const ALL: [SettingsGroup; 5] = [
        SettingsGroup::AccelGyro,
        SettingsGroup::MagCalibration,
        SettingsGroup::AuxMag,
        SettingsGroup::BoardAttitude,
        SettingsGroup::BaroCorrection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsGroup::AccelGyro => "AccelGyroSettings",
            SettingsGroup::MagCalibration => "MagCalibration",
            SettingsGroup::AuxMag => "AuxMagSettings",
            SettingsGroup::BoardAttitude => "AttitudeSettings",
            SettingsGroup::BaroCorrection => "BaroCorrectionSettings",
        }
    }

    /// Group owning a parameter name, by prefix
    pub fn for_param(name: &str) -> Option<SettingsGroup> {
        if name.starts_with("AG_") {
            Some(SettingsGroup::AccelGyro)
        } else if name.starts_with("MAG_") {
            Some(SettingsGroup::MagCalibration)
        } else if name.starts_with("AUXMAG_") {
            Some(SettingsGroup::AuxMag)
        } else if name.starts_with("BRD_") {
            Some(SettingsGroup::BoardAttitude)
        } else if name.starts_with("BARO_") {
            Some(SettingsGroup::BaroCorrection)
        } else {
            None
        }
    }
}

/// All sensor settings groups
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorSettings {
    pub accel_gyro: AccelGyroSettings,
    pub mag: MagCalibration,
    pub aux_mag: AuxMagSettings,
    pub attitude: AttitudeSettings,
    pub baro: BaroCorrectionSettings,
}

impl SensorSettings {
    /// Register every group's defaults
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        AccelGyroSettings::register_defaults(store)?;
        MagCalibration::register_defaults(store)?;
        AuxMagSettings::register_defaults(store)?;
        AttitudeSettings::register_defaults(store)?;
        BaroCorrectionSettings::register_defaults(store)?;
        Ok(())
    }

    /// Load every group
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            accel_gyro: AccelGyroSettings::from_store(store),
            mag: MagCalibration::from_store(store),
            aux_mag: AuxMagSettings::from_store(store),
            attitude: AttitudeSettings::from_store(store),
            baro: BaroCorrectionSettings::from_store(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_groups_fit_in_store() {
        let mut store = ParameterStore::new();
        // an over-long name would fail here with InvalidName
        SensorSettings::register_defaults(&mut store).unwrap();
        // 23 accel/gyro + 24 mag + 5 attitude + 6 baro
        assert_eq!(store.len(), 58);
        assert!(store.len() <= MAX_PARAMS);
        assert_eq!(SensorSettings::from_store(&store), SensorSettings::default());
    }

    #[test]
    fn test_group_for_param() {
        assert_eq!(SettingsGroup::for_param("AG_TC_MIN"), Some(SettingsGroup::AccelGyro));
        assert_eq!(SettingsGroup::for_param("AUXMAG_BIAS_X"), Some(SettingsGroup::AuxMag));
        assert_eq!(SettingsGroup::for_param("MAG_XFRM_11"), Some(SettingsGroup::MagCalibration));
        assert_eq!(SettingsGroup::for_param("BRD_YAW"), Some(SettingsGroup::BoardAttitude));
        assert_eq!(SettingsGroup::for_param("BARO_TC_A"), Some(SettingsGroup::BaroCorrection));
        assert_eq!(SettingsGroup::for_param("FS_ACTION"), None);
    }
}
