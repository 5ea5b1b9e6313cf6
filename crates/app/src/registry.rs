//! Device registry — the single owner of the home tree.
//!
//! All reads hand out fresh copies and all writes go through
//! [`DeviceRegistry::toggle_device`] or [`DeviceRegistry::update_device`],
//! so a caller can never mutate the tree behind the registry's back.
//!
//! Unknown device ids are reported as [`HomeError::NotFound`] by both
//! mutations and leave the tree unchanged. Callers that want best-effort
//! semantics can simply discard the error.

use std::sync::{Mutex, MutexGuard, PoisonError};

use homedash_domain::device::{Device, DeviceUpdate};
use homedash_domain::error::{HomeError, NotFoundError};
use homedash_domain::home::{Home, HomeSummary};
use homedash_domain::room::Room;

/// In-memory store of rooms and devices, safe to share behind an `Arc`.
///
/// A single mutex serialises every read-modify-write. Each mutation is a
/// keyed point update, so no cross-device coordination is needed.
#[derive(Debug)]
pub struct DeviceRegistry {
    home: Mutex<Home>,
}

impl DeviceRegistry {
    /// Wrap an already validated [`Home`].
    #[must_use]
    pub fn new(home: Home) -> Self {
        Self {
            home: Mutex::new(home),
        }
    }

    /// Build the registry straight from a list of rooms.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if the rooms break a tree invariant
    /// (empty names, duplicate ids).
    pub fn from_rooms(rooms: Vec<Room>) -> Result<Self, HomeError> {
        Home::new(rooms).map(Self::new)
    }

    /// Copy of every room and device, in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Room> {
        self.lock().rooms().to_vec()
    }

    /// Copy of a single room.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no room has `id`.
    pub fn room(&self, id: &str) -> Result<Room, HomeError> {
        self.lock().room(id).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Copy of a single device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has `id`.
    pub fn device(&self, id: &str) -> Result<Device, HomeError> {
        self.lock().device(id).cloned().ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Aggregate counters for a dashboard header.
    #[must_use]
    pub fn summary(&self) -> HomeSummary {
        self.lock().summary()
    }

    /// Flip `is_on` on one device and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has `id`.
    #[tracing::instrument(skip(self))]
    pub fn toggle_device(&self, id: &str) -> Result<Device, HomeError> {
        let mut home = self.lock();
        match home.toggle_device(id) {
            Ok(device) => {
                tracing::debug!(is_on = device.is_on, "device toggled");
                Ok(device.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "toggle ignored");
                Err(err)
            }
        }
    }

    /// Apply a partial update to one device and return its new state.
    ///
    /// The update is not checked against the device kind and values are not
    /// clamped; input controls own those rules.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has `id`.
    #[tracing::instrument(skip(self))]
    pub fn update_device(&self, id: &str, update: DeviceUpdate) -> Result<Device, HomeError> {
        let mut home = self.lock();
        match home.update_device(id, &update) {
            Ok(device) => {
                tracing::debug!(?device, "device updated");
                Ok(device.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "update ignored");
                Err(err)
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Home> {
        self.home.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
