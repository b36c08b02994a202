//! Thermostat readings.

use hearth_domain::catalog::Catalog;
use hearth_domain::device::DeviceKind;

use super::mean_or_zero;

pub const ATTIC: &str = "Attic";

/// Mean temperature of the connected thermostats in `room`, `0.0` when
/// there are none.
#[must_use]
pub fn average_connected_temperature(catalog: &Catalog, room: &str) -> f64 {
    mean_or_zero(catalog.iter().filter_map(|d| match d.kind {
        DeviceKind::Thermostat { current_temp } if d.room == room && d.connected => {
            Some(current_temp)
        }
        _ => None,
    }))
}

#[must_use]
pub fn average_attic_temperature_connected(catalog: &Catalog) -> f64 {
    average_connected_temperature(catalog, ATTIC)
}

/// Highest thermostat reading per room, rooms in first-seen order.
#[must_use]
pub fn max_temperature_by_room(catalog: &Catalog) -> Vec<(&str, f64)> {
    let mut rooms: Vec<(&str, f64)> = Vec::new();
    for device in catalog {
        let DeviceKind::Thermostat { current_temp } = device.kind else {
            continue;
        };
        match rooms.iter_mut().find(|(room, _)| *room == device.room) {
            Some((_, best)) => *best = best.max(current_temp),
            None => rooms.push((device.room.as_str(), current_temp)),
        }
    }
    rooms
}
