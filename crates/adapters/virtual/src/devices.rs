//! Constructors for the simulated device kinds.
//!
//! Each helper sets the one attribute its kind uses and leaves the rest empty.

use homedash_domain::device::{Device, DeviceKind};
use homedash_domain::error::HomeError;

/// A dimmable light, initially off.
pub fn light(id: &str, name: &str, brightness: u8) -> Result<Device, HomeError> {
    Device::builder()
        .id(id)
        .name(name)
        .kind(DeviceKind::Light)
        .brightness(brightness)
        .build()
}

/// A fan, initially off.
pub fn fan(id: &str, name: &str, speed: u8) -> Result<Device, HomeError> {
    Device::builder()
        .id(id)
        .name(name)
        .kind(DeviceKind::Fan)
        .speed(speed)
        .build()
}

/// A thermostat; the initial `is_on` is given explicitly.
pub fn thermostat(
    id: &str,
    name: &str,
    is_on: bool,
    temperature: i32,
) -> Result<Device, HomeError> {
    Device::builder()
        .id(id)
        .name(name)
        .kind(DeviceKind::Thermostat)
        .on(is_on)
        .temperature(temperature)
        .build()
}

/// A switched outlet; the initial `is_on` is given explicitly.
pub fn outlet(id: &str, name: &str, is_on: bool) -> Result<Device, HomeError> {
    Device::builder()
        .id(id)
        .name(name)
        .kind(DeviceKind::Outlet)
        .on(is_on)
        .build()
}
