//! # homedash-adapter-virtual
//!
//! Virtual/demo data source that provides the simulated home the registry is
//! seeded with. Nothing here talks to real hardware.
//!
//! ## Provided rooms
//!
//! Four rooms holding eleven devices:
//!
//! | Room | Devices |
//! |------|---------|
//! | Living Room (`living-room`) | Main Light, Ceiling Fan, TV Outlet |
//! | Bedroom (`bedroom`) | Main Light, Thermostat |
//! | Kitchen (`kitchen`) | Main Light, Under Cabinet, Coffee Maker |
//! | Office (`office`) | Desk Light, Desk Fan, Laptop Charger |
//!
//! ## Dependency rule
//!
//! Depends on `homedash-app` and `homedash-domain` only.

mod devices;

use homedash_app::registry::DeviceRegistry;
use homedash_domain::error::HomeError;
use homedash_domain::room::Room;

use devices::{fan, light, outlet, thermostat};

/// The fixed demo rooms, in display order.
///
/// # Errors
///
/// Returns a validation error if a builder fails (should not happen with
/// hardcoded inputs).
pub fn demo_rooms() -> Result<Vec<Room>, HomeError> {
    Ok(vec![
        Room::builder()
            .id("living-room")
            .name("Living Room")
            .device(light("lr-light-1", "Main Light", 100)?)
            .device(fan("lr-fan-1", "Ceiling Fan", 2)?)
            .device(outlet("lr-outlet-1", "TV Outlet", false)?)
            .build()?,
        Room::builder()
            .id("bedroom")
            .name("Bedroom")
            .device(light("br-light-1", "Main Light", 80)?)
            .device(thermostat("br-thermostat", "Thermostat", true, 72)?)
            .build()?,
        Room::builder()
            .id("kitchen")
            .name("Kitchen")
            .device(light("kt-light-1", "Main Light", 100)?)
            .device(light("kt-light-2", "Under Cabinet", 70)?)
            .device(outlet("kt-outlet-1", "Coffee Maker", false)?)
            .build()?,
        Room::builder()
            .id("office")
            .name("Office")
            .device(light("of-light-1", "Desk Light", 90)?)
            .device(fan("of-fan-1", "Desk Fan", 1)?)
            .device(outlet("of-outlet-1", "Laptop Charger", true)?)
            .build()?,
    ])
}

/// A fresh registry holding the demo home.
///
/// # Errors
///
/// Returns a validation error if the demo rooms break a tree invariant.
pub fn demo_registry() -> Result<DeviceRegistry, HomeError> {
    DeviceRegistry::from_rooms(demo_rooms()?)
}
