//! Group-by views. Groups appear in the order their key is first seen.

use std::collections::HashMap;

use hearth_domain::catalog::Catalog;
use hearth_domain::device::Device;
use serde::Serialize;

/// Connected versus disconnected device counts for one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomStatus<'a> {
    pub room: &'a str,
    pub online: usize,
    pub offline: usize,
}

/// Devices sharing one category tag, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub devices: Vec<&'a Device>,
}

/// Bucket catalog devices by `key`, keeping first-seen key order and catalog order
/// within each bucket.
fn group_in_order<'a, F>(catalog: &'a Catalog, key: F) -> Vec<(&'a str, Vec<&'a Device>)>
where
    F: Fn(&'a Device) -> &'a str,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Device>)> = Vec::new();
    for device in catalog {
        let k = key(device);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(device);
    }
    groups
}

#[must_use]
pub fn group_by_room(catalog: &Catalog) -> Vec<RoomStatus<'_>> {
    group_in_order(catalog, |d| d.room.as_str())
        .into_iter()
        .map(|(room, devices)| {
            let online = devices.iter().filter(|d| d.connected).count();
            RoomStatus {
                room,
                online,
                offline: devices.len() - online,
            }
        })
        .collect()
}

#[must_use]
pub fn group_by_category(catalog: &Catalog) -> Vec<CategoryGroup<'_>> {
    group_in_order(catalog, |d| d.category.as_str())
        .into_iter()
        .map(|(category, devices)| CategoryGroup { category, devices })
        .collect()
}

/// How many devices carry each name.
#[must_use]
pub fn count_by_name(catalog: &Catalog) -> Vec<(&str, usize)> {
    group_in_order(catalog, |d| d.name.as_str())
        .into_iter()
        .map(|(name, devices)| (name, devices.len()))
        .collect()
}
