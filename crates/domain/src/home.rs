//! Home — the complete room/device tree and its point mutations.
//!
//! The tree is fixed at construction: rooms and devices are never added,
//! removed or reordered afterwards. Only fields of existing devices change.
//! A device-id index gives constant-time lookups.

use std::collections::HashMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceKind, DeviceUpdate};
use crate::error::{HomeError, NotFoundError, ValidationError};
use crate::id::DeviceId;
use crate::room::Room;

/// Ordered rooms plus an index from device id to its position.
#[derive(Debug, Clone)]
pub struct Home {
    rooms: Vec<Room>,
    index: HashMap<DeviceId, (usize, usize)>,
}

/// Aggregate counters over the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSummary {
    pub rooms: usize,
    pub devices: usize,
    pub devices_on: usize,
    pub lights_on: usize,
}

impl Home {
    /// Build a home from validated rooms.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] if a room or device fails its own
    /// invariants, or if any room id or device id appears twice.
    pub fn new(rooms: Vec<Room>) -> Result<Self, HomeError> {
        let mut room_ids = HashSet::new();
        let mut index = HashMap::new();

        for (room_pos, room) in rooms.iter().enumerate() {
            room.validate()?;
            if !room_ids.insert(room.id.clone()) {
                return Err(ValidationError::DuplicateRoomId(room.id.clone()).into());
            }
            for (device_pos, device) in room.devices.iter().enumerate() {
                device.validate()?;
                if index
                    .insert(device.id.clone(), (room_pos, device_pos))
                    .is_some()
                {
                    return Err(ValidationError::DuplicateDeviceId(device.id.clone()).into());
                }
            }
        }

        Ok(Self { rooms, index })
    }

    /// All rooms in display order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id.as_str() == id)
    }

    /// Look up a device by id.
    #[must_use]
    pub fn device(&self, id: &str) -> Option<&Device> {
        let &(room, device) = self.index.get(id)?;
        Some(&self.rooms[room].devices[device])
    }

    /// Flip `is_on` on the device with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has `id`; the tree is
    /// left untouched.
    pub fn toggle_device(&mut self, id: &str) -> Result<&Device, HomeError> {
        let device = self.device_mut(id)?;
        device.toggle();
        Ok(device)
    }

    /// Merge `update` into the device with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::NotFound`] when no device has `id`; the tree is
    /// left untouched.
    pub fn update_device(
        &mut self,
        id: &str,
        update: &DeviceUpdate,
    ) -> Result<&Device, HomeError> {
        let device = self.device_mut(id)?;
        device.apply(update);
        Ok(device)
    }

    /// Count rooms, devices, and devices/lights currently on.
    #[must_use]
    pub fn summary(&self) -> HomeSummary {
        let devices = self.rooms.iter().flat_map(|r| r.devices.iter());
        let (mut total, mut on, mut lights_on) = (0, 0, 0);
        for device in devices {
            total += 1;
            if device.is_on {
                on += 1;
                if device.kind == DeviceKind::Light {
                    lights_on += 1;
                }
            }
        }
        HomeSummary {
            rooms: self.rooms.len(),
            devices: total,
            devices_on: on,
            lights_on,
        }
    }

    fn device_mut(&mut self, id: &str) -> Result<&mut Device, HomeError> {
        let &(room, device) = self.index.get(id).ok_or_else(|| NotFoundError {
            entity: "Device",
            id: id.to_string(),
        })?;
        Ok(&mut self.rooms[room].devices[device])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, kind: DeviceKind) -> Device {
        Device::builder()
            .id(id)
            .name(id)
            .kind(kind)
            .build()
            .unwrap()
    }

    fn room(id: &str, devices: Vec<Device>) -> Room {
        let mut builder = Room::builder().id(id).name(id);
        for device in devices {
            builder = builder.device(device);
        }
        builder.build().unwrap()
    }

    fn sample() -> Home {
        Home::new(vec![
            room(
                "den",
                vec![
                    device("den-light", DeviceKind::Light),
                    device("den-fan", DeviceKind::Fan),
                ],
            ),
            room("hall", vec![device("hall-outlet", DeviceKind::Outlet)]),
        ])
        .unwrap()
    }

    #[test]
    fn should_reject_duplicate_device_id_across_rooms() {
        let result = Home::new(vec![
            room("a", vec![device("dup", DeviceKind::Light)]),
            room("b", vec![device("dup", DeviceKind::Fan)]),
        ]);
        match result {
            Err(HomeError::Validation(ValidationError::DuplicateDeviceId(id))) => {
                assert_eq!(id.as_str(), "dup");
            }
            other => panic!("expected duplicate device id, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_duplicate_room_id() {
        let result = Home::new(vec![room("a", vec![]), room("a", vec![])]);
        assert!(matches!(
            result,
            Err(HomeError::Validation(ValidationError::DuplicateRoomId(_)))
        ));
    }

    #[test]
    fn should_find_device_through_index() {
        let home = sample();
        assert_eq!(home.device("hall-outlet").unwrap().kind, DeviceKind::Outlet);
        assert!(home.device("missing").is_none());
    }

    #[test]
    fn should_toggle_only_target_device() {
        let mut home = sample();
        let before = home.rooms().to_vec();

        let toggled = home.toggle_device("den-fan").unwrap();
        assert!(toggled.is_on);

        let after = home.rooms();
        assert_eq!(after[0].devices[0], before[0].devices[0]);
        assert_eq!(after[1], before[1]);
    }

    #[test]
    fn should_leave_tree_untouched_when_id_unknown() {
        let mut home = sample();
        let before = home.rooms().to_vec();

        let toggle = home.toggle_device("nope");
        assert!(matches!(toggle, Err(HomeError::NotFound(_))));
        let update = home.update_device("nope", &DeviceUpdate::default().on(true));
        assert!(matches!(update, Err(HomeError::NotFound(_))));

        assert_eq!(home.rooms(), before.as_slice());
    }

    #[test]
    fn should_count_devices_and_lights_on() {
        let mut home = sample();
        home.toggle_device("den-light").unwrap();
        home.toggle_device("hall-outlet").unwrap();

        assert_eq!(
            home.summary(),
            HomeSummary {
                rooms: 2,
                devices: 3,
                devices_on: 2,
                lights_on: 1,
            }
        );
    }
}
