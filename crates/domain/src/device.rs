//! Device — a controllable unit (light, fan, thermostat, outlet) inside a room.
//!
//! A device carries an on/off flag and, depending on its [`DeviceKind`], one
//! optional numeric setting. The shape stays flat: every device has room for
//! every attribute, and the kind only decides which one is *meaningful*
//! (see [`Device::setting`]). Updates are deliberately permissive: a
//! [`DeviceUpdate`] may write an attribute the kind does not use, and values
//! are never clamped here.

use serde::{Deserialize, Serialize};

use crate::error::{HomeError, ValidationError};
use crate::id::DeviceId;

/// Closed set of supported device types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Dimmable light, uses `brightness` (0–100).
    Light,
    /// Fan, uses `speed` (0–3).
    Fan,
    /// Thermostat, uses `temperature` (degrees).
    Thermostat,
    /// Plain switched outlet, no extra attribute.
    Outlet,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Fan => f.write_str("fan"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::Outlet => f.write_str("outlet"),
        }
    }
}

/// The numeric setting that is semantically active for a device's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSetting {
    Brightness(u8),
    Speed(u8),
    Temperature(i32),
}

/// A single controllable device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    pub is_on: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `id` or `name` is empty.
    pub fn validate(&self) -> Result<(), HomeError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Flip the on/off flag, leaving every other field alone.
    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }

    /// Merge a partial update. Fields absent from `update` are untouched.
    pub fn apply(&mut self, update: &DeviceUpdate) {
        if let Some(is_on) = update.is_on {
            self.is_on = is_on;
        }
        if let Some(brightness) = update.brightness {
            self.brightness = Some(brightness);
        }
        if let Some(speed) = update.speed {
            self.speed = Some(speed);
        }
        if let Some(temperature) = update.temperature {
            self.temperature = Some(temperature);
        }
    }

    /// The setting that matters for this device's kind, if it is present.
    ///
    /// Attributes written onto the wrong kind are ignored here.
    #[must_use]
    pub fn setting(&self) -> Option<DeviceSetting> {
        match self.kind {
            DeviceKind::Light => self.brightness.map(DeviceSetting::Brightness),
            DeviceKind::Fan => self.speed.map(DeviceSetting::Speed),
            DeviceKind::Thermostat => self.temperature.map(DeviceSetting::Temperature),
            DeviceKind::Outlet => None,
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    kind: DeviceKind,
    is_on: bool,
    brightness: Option<u8>,
    speed: Option<u8>,
    temperature: Option<i32>,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            kind: DeviceKind::Outlet,
            is_on: false,
            brightness: None,
            speed: None,
            temperature: None,
        }
    }
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    #[must_use]
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub fn speed(mut self, speed: u8) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: i32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if `id` or `name` is missing or empty.
    pub fn build(self) -> Result<Device, HomeError> {
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::from("")),
            name: self.name.unwrap_or_default(),
            kind: self.kind,
            is_on: self.is_on,
            brightness: self.brightness,
            speed: self.speed,
            temperature: self.temperature,
        };
        device.validate()?;
        Ok(device)
    }
}

/// Partial change set for a device. `None` means "leave as is".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

impl DeviceUpdate {
    #[must_use]
    pub fn on(mut self, is_on: bool) -> Self {
        self.is_on = Some(is_on);
        self
    }

    #[must_use]
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub fn speed(mut self, speed: u8) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: i32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Whether the update carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_on.is_none()
            && self.brightness.is_none()
            && self.speed.is_none()
            && self.temperature.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Device {
        Device::builder()
            .id("lr-light-1")
            .name("Main Light")
            .kind(DeviceKind::Light)
            .brightness(100)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_device_when_id_and_name_provided() {
        let device = light();
        assert_eq!(device.id.as_str(), "lr-light-1");
        assert_eq!(device.kind, DeviceKind::Light);
        assert!(!device.is_on);
        assert_eq!(device.brightness, Some(100));
        assert_eq!(device.speed, None);
    }

    #[test]
    fn should_return_validation_error_when_id_is_missing() {
        let result = Device::builder().name("Desk Fan").build();
        assert!(matches!(
            result,
            Err(HomeError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Device::builder().id("of-fan-1").name("").build();
        assert!(matches!(
            result,
            Err(HomeError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_flip_only_is_on_when_toggled() {
        let mut device = light();
        device.toggle();
        assert!(device.is_on);
        assert_eq!(device.brightness, Some(100));
        device.toggle();
        assert_eq!(device, light());
    }

    #[test]
    fn should_touch_only_supplied_fields_when_applying_update() {
        let mut device = light();
        device.apply(&DeviceUpdate::default().brightness(42));
        assert_eq!(device.brightness, Some(42));
        assert!(!device.is_on);
        assert_eq!(device.temperature, None);
    }

    #[test]
    fn should_accept_attribute_foreign_to_kind() {
        let mut device = light();
        device.apply(&DeviceUpdate::default().temperature(70));
        assert_eq!(device.temperature, Some(70));
        assert_eq!(device.setting(), Some(DeviceSetting::Brightness(100)));
    }

    #[test]
    fn should_not_clamp_out_of_range_values() {
        let mut device = light();
        device.apply(&DeviceUpdate::default().brightness(250));
        assert_eq!(device.brightness, Some(250));
    }

    #[test]
    fn should_report_no_setting_for_outlet() {
        let outlet = Device::builder()
            .id("kt-outlet-1")
            .name("Coffee Maker")
            .kind(DeviceKind::Outlet)
            .temperature(3)
            .build()
            .unwrap();
        assert_eq!(outlet.setting(), None);
    }

    #[test]
    fn should_report_empty_update() {
        assert!(DeviceUpdate::default().is_empty());
        assert!(!DeviceUpdate::default().on(true).is_empty());
    }

    #[test]
    fn should_serialize_kind_as_type_and_omit_absent_attributes() {
        let json = serde_json::to_value(light()).unwrap();
        assert_eq!(json["type"], "light");
        assert_eq!(json["is_on"], false);
        assert_eq!(json["brightness"], 100);
        assert!(json.get("speed").is_none());
    }

    #[test]
    fn should_deserialize_partial_update_from_json() {
        let update: DeviceUpdate = serde_json::from_str(r#"{"temperature": 70}"#).unwrap();
        assert_eq!(update, DeviceUpdate::default().temperature(70));
    }

    #[test]
    fn should_reject_unknown_field_in_update() {
        let result: Result<DeviceUpdate, _> = serde_json::from_str(r#"{"isOn": true}"#);
        assert!(result.is_err());
    }
}
