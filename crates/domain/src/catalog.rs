//! Catalog — the ordered set of devices in one home.
//!
//! Insertion order is preserved and identifiers are unique. The catalog is
//! a value: updates return a new catalog and leave the original untouched.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::device::{Device, Variant};
use crate::error::{HearthError, NotFoundError, ValidationError};
use crate::id::DeviceId;

/// Ordered, duplicate-free collection of [`Device`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    /// Build a catalog, validating every device and id uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when a device fails its own
    /// invariants or when two devices share an id
    /// ([`ValidationError::DuplicateId`]).
    pub fn new(devices: Vec<Device>) -> Result<Self, HearthError> {
        let mut seen = HashSet::with_capacity(devices.len());
        for device in &devices {
            device.validate()?;
            if !seen.insert(device.id) {
                return Err(ValidationError::DuplicateId(device.id).into());
            }
        }
        Ok(Self { devices })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Device] {
        &self.devices
    }

    #[must_use]
    pub fn find(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// First device named exactly `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// The device with `id`, or `fallback` when there is none.
    #[must_use]
    pub fn find_or(&self, id: DeviceId, fallback: Device) -> Device {
        self.find(id).cloned().unwrap_or(fallback)
    }

    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<&Device> {
        self.devices
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    #[must_use]
    pub fn filter_by_variant(&self, variant: Variant) -> Vec<&Device> {
        self.devices
            .iter()
            .filter(|d| d.variant() == variant)
            .collect()
    }

    /// Return a new catalog with the device sharing `device.id` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device has that id, or
    /// [`HearthError::Validation`] when the replacement is invalid.
    pub fn replace(&self, device: Device) -> Result<Self, HearthError> {
        device.validate()?;
        let index = self
            .devices
            .iter()
            .position(|d| d.id == device.id)
            .ok_or_else(|| NotFoundError::device(device.id))?;
        let mut devices = self.devices.clone();
        devices[index] = device;
        Ok(Self { devices })
    }

    /// Return a new catalog with `f` applied to every device, order kept.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when a mapped device is invalid or
    /// when the mapping makes two ids collide, exactly as [`Catalog::new`].
    pub fn map<F>(&self, f: F) -> Result<Self, HearthError>
    where
        F: FnMut(&Device) -> Device,
    {
        Self::new(self.devices.iter().map(f).collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.devices.serialize(serializer)
    }
}
