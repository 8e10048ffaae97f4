//! Mock settings source backed by a parameter store

use crate::platform::traits::SettingsSource;
use flight_sensors_core::parameters::{
    ParamValue, ParameterError, ParameterStore, SensorSettings, SettingsGroup,
};
use std::vec::Vec;

/// Settings source over an in-memory [`ParameterStore`]
pub struct MockSettings {
    store: ParameterStore,
    subscriptions: Vec<SettingsGroup>,
    changed: bool,
}

impl MockSettings {
    /// Store with every sensor group registered at its defaults
    pub fn new() -> Self {
        let mut store = ParameterStore::new();
        SensorSettings::register_defaults(&mut store)
            .expect("parameter store too small for the sensor groups");
        Self {
            store,
            subscriptions: Vec::new(),
            changed: false,
        }
    }

    /// Change a parameter and notify if its group is subscribed
    ///
    /// Returns the notified group.
    pub fn set_param(
        &mut self,
        name: &str,
        value: ParamValue,
    ) -> Result<Option<SettingsGroup>, ParameterError> {
        self.store.set(name, value)?;
        let notified = SettingsGroup::for_param(name).filter(|g| self.subscriptions.contains(g));
        if notified.is_some() {
            self.changed = true;
        }
        Ok(notified)
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn is_subscribed(&self, group: SettingsGroup) -> bool {
        self.subscriptions.contains(&group)
    }
}

impl Default for MockSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsSource for MockSettings {
    fn load(&self) -> SensorSettings {
        SensorSettings::from_store(&self.store)
    }

    fn subscribe(&mut self, group: SettingsGroup) {
        if !self.subscriptions.contains(&group) {
            self.subscriptions.push(group);
        }
    }

    fn take_changed(&mut self) -> bool {
        core::mem::take(&mut self.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let settings = MockSettings::new();
        assert_eq!(settings.load(), SensorSettings::default());
    }

    #[test]
    fn test_set_param_reports_subscribed_group() {
        let mut settings = MockSettings::new();
        assert_eq!(settings.set_param("BRD_YAW", ParamValue::Float(90.0)), Ok(None));

        settings.subscribe(SettingsGroup::BoardAttitude);
        assert_eq!(
            settings.set_param("BRD_YAW", ParamValue::Float(45.0)),
            Ok(Some(SettingsGroup::BoardAttitude))
        );
        assert_eq!(settings.load().attitude.rotation.yaw_deg, 45.0);
    }

    #[test]
    fn test_change_notification_only_for_subscribed_groups() {
        let mut settings = MockSettings::new();
        settings.subscribe(SettingsGroup::MagCalibration);

        settings.set_param("BRD_YAW", ParamValue::Float(90.0)).unwrap();
        assert!(!settings.take_changed());

        settings.set_param("MAG_BIAS_X", ParamValue::Float(1.0)).unwrap();
        settings.set_param("MAG_BIAS_Y", ParamValue::Float(2.0)).unwrap();
        assert!(settings.take_changed());
        assert!(!settings.take_changed());
    }

    #[test]
    fn test_set_unknown_param() {
        let mut settings = MockSettings::new();
        assert_eq!(
            settings.set_param("NOPE", ParamValue::Float(1.0)),
            Err(ParameterError::UnknownParameter)
        );
    }
}
