//! Shared fixtures for unit tests.

use hearth_domain::catalog::Catalog;
use hearth_domain::device::Device;

pub(crate) fn light(id: u32, name: &str, room: &str, connected: bool, power: f64) -> Device {
    Device::builder()
        .id(id)
        .name(name)
        .room(room)
        .connected(connected)
        .power_usage(power)
        .light(45)
        .build()
        .unwrap()
}

pub(crate) fn thermostat(
    id: u32,
    name: &str,
    room: &str,
    connected: bool,
    power: f64,
    temp: f64,
) -> Device {
    Device::builder()
        .id(id)
        .name(name)
        .room(room)
        .connected(connected)
        .power_usage(power)
        .thermostat(temp)
        .build()
        .unwrap()
}

pub(crate) fn camera(
    id: u32,
    name: &str,
    room: &str,
    connected: bool,
    power: f64,
    motion: bool,
) -> Device {
    Device::builder()
        .id(id)
        .name(name)
        .room(room)
        .connected(connected)
        .power_usage(power)
        .camera(motion)
        .build()
        .unwrap()
}

/// Light 100 (Bathroom), camera 132 (Front, motion), thermostat 143 (Front Door).
pub(crate) fn small_home() -> Catalog {
    Catalog::new(vec![
        light(100, "Bathroom Light", "Bathroom", true, 15.0),
        camera(132, "Front Camera", "Front", true, 25.0, true),
        thermostat(143, "Front Door Termostat", "Front Door", true, 30.0, 15.0),
    ])
    .unwrap()
}

/// A mixed home with disconnected devices, an attic, and a kitchen.
pub(crate) fn busy_home() -> Catalog {
    Catalog::new(vec![
        light(100, "Bathroom Light", "Bathroom", true, 15.0),
        light(145, "Attic Light", "Attic", false, 20.0),
        camera(132, "Front Camera", "Front", true, 25.0, true),
        camera(162, "Attic Camera", "Attic", true, 5.0, false),
        thermostat(173, "Attic Termostat", "Attic", false, 30.0, 15.0),
        thermostat(174, "Attic Spare Termostat", "Attic", true, 12.0, 19.0),
        thermostat(175, "Attic Loft Termostat", "Attic", true, 12.0, 22.0),
        light(172, "Kitchen Light", "Kitchen", false, 42.0),
        thermostat(194, "Kitchen Termostat", "Kitchen", true, 51.0, 21.0),
    ])
    .unwrap()
}
