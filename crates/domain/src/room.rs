//! Room — a named grouping of devices with a fixed display order.

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceKind};
use crate::error::{HomeError, ValidationError};
use crate::id::RoomId;

/// A room and the devices it owns, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub devices: Vec<Device>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
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

    /// Whether at least one light in this room is switched on.
    #[must_use]
    pub fn has_light_on(&self) -> bool {
        self.devices
            .iter()
            .any(|d| d.kind == DeviceKind::Light && d.is_on)
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    devices: Vec<Device>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<RoomId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a device; call order is display order.
    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.devices.push(device);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if `id` or `name` is missing or empty.
    pub fn build(self) -> Result<Room, HomeError> {
        let room = Room {
            id: self.id.unwrap_or_else(|| RoomId::from("")),
            name: self.name.unwrap_or_default(),
            devices: self.devices,
        };
        room.validate()?;
        Ok(room)
    }
}
