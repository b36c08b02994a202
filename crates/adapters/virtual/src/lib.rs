//! # hearth-adapter-virtual
//!
//! Virtual/demo integration that provides the simulated home used by the
//! report binary and by end-to-end tests.
//!
//! ## Provided devices
//!
//! | Kind | Count | Rooms |
//! |------|-------|-------|
//! | Light | 4 | Bathroom, Attic, Bedroom, Kitchen |
//! | Thermostat | 6 | Front Door, Attic, Basement, Bedroom, Living Room, Kitchen |
//! | Camera | 4 | Front, Attic, Garage, Backyard |
//!
//! ## Dependency rule
//!
//! Depends on `hearth-domain` only.

mod devices;

use hearth_domain::catalog::Catalog;
use hearth_domain::device::Device;
use hearth_domain::error::HearthError;

pub use devices::{Placement, VirtualDevice};

const fn at(
    id: u32,
    name: &'static str,
    room: &'static str,
    connected: bool,
    power_usage: f64,
) -> Placement {
    Placement {
        id,
        name,
        room,
        connected,
        power_usage,
    }
}

/// The fourteen devices of the demo home, in discovery order.
const DEMO_HOME: [VirtualDevice; 14] = [
    VirtualDevice::Light {
        at: at(100, "Bathroom Light", "Bathroom", true, 15.0),
        brightness: 45,
    },
    VirtualDevice::Light {
        at: at(145, "Attic Light", "Attic", false, 20.0),
        brightness: 45,
    },
    VirtualDevice::Camera {
        at: at(132, "Front Camera", "Front", true, 25.0),
        motion_detected: true,
    },
    VirtualDevice::Camera {
        at: at(162, "Attic Camera", "Attic", true, 5.0),
        motion_detected: false,
    },
    VirtualDevice::Thermostat {
        at: at(143, "Front Door Termostat", "Front Door", true, 30.0),
        current_temp: 15.0,
    },
    VirtualDevice::Thermostat {
        at: at(173, "Attic Termostat", "Attic", false, 30.0),
        current_temp: 15.0,
    },
    VirtualDevice::Camera {
        at: at(165, "Garage Camera", "Garage", true, 42.0),
        motion_detected: false,
    },
    VirtualDevice::Thermostat {
        at: at(178, "Basement Termostat", "Basement", true, 32.0),
        current_temp: 17.0,
    },
    VirtualDevice::Thermostat {
        at: at(169, "Bedroom Termostat", "Bedroom", true, 8.0),
        current_temp: 17.0,
    },
    VirtualDevice::Light {
        at: at(158, "Bedroom Light", "Bedroom", true, 26.0),
        brightness: 0,
    },
    VirtualDevice::Camera {
        at: at(187, "Backyard Camera", "Backyard", true, 29.0),
        motion_detected: true,
    },
    VirtualDevice::Thermostat {
        at: at(186, "Living Room Termostat", "Living Room", true, 33.0),
        current_temp: 21.0,
    },
    VirtualDevice::Thermostat {
        at: at(194, "Kitchen Termostat", "Kitchen", true, 51.0),
        current_temp: 21.0,
    },
    VirtualDevice::Light {
        at: at(172, "Kitchen Light", "Kitchen", false, 42.0),
        brightness: 70,
    },
];

/// Virtual integration that creates the simulated demo home.
pub struct VirtualHome {
    devices: Vec<VirtualDevice>,
}

impl Default for VirtualHome {
    fn default() -> Self {
        Self {
            devices: DEMO_HOME.to_vec(),
        }
    }
}

impl VirtualHome {
    /// A virtual home holding exactly `devices`.
    #[must_use]
    pub fn with_devices(devices: Vec<VirtualDevice>) -> Self {
        Self { devices }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "virtual"
    }

    /// Produce every device descriptor, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a descriptor is invalid.
    pub fn discover(&self) -> Result<Vec<Device>, HearthError> {
        self.devices.iter().map(VirtualDevice::discover).collect()
    }

    /// Discover every device and collect them into a [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if a descriptor is invalid or two
    /// descriptors share an id.
    pub fn catalog(&self) -> Result<Catalog, HearthError> {
        let catalog = Catalog::new(self.discover()?)?;
        tracing::info!(
            integration = self.name(),
            count = catalog.len(),
            "virtual discovery complete"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_app::queries::{power, security};
    use hearth_domain::device::Variant;
    use hearth_domain::error::ValidationError;
    use hearth_domain::id::DeviceId;

    #[test]
    fn should_discover_fourteen_devices() {
        let catalog = VirtualHome::default().catalog().unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.filter_by_variant(Variant::Light).len(), 4);
        assert_eq!(catalog.filter_by_variant(Variant::Thermostat).len(), 6);
        assert_eq!(catalog.filter_by_variant(Variant::Camera).len(), 4);
    }

    #[test]
    fn should_return_virtual_as_name() {
        assert_eq!(VirtualHome::default().name(), "virtual");
    }

    #[test]
    fn should_keep_discovery_order() {
        let devices = VirtualHome::default().discover().unwrap();
        assert_eq!(devices.first().map(|d| d.id), Some(DeviceId::new(100)));
        assert_eq!(devices.last().map(|d| d.id), Some(DeviceId::new(172)));
    }

    #[test]
    fn should_total_388_watts() {
        let catalog = VirtualHome::default().catalog().unwrap();
        assert!((power::daily_cost(&catalog, 1.0) - 388.0).abs() < 1e-9);
    }

    #[test]
    fn should_see_motion_on_front_and_backyard_cameras() {
        let catalog = VirtualHome::default().catalog().unwrap();
        assert_eq!(
            security::intrusion_check(&catalog).names_with_motion,
            vec!["Front Camera", "Backyard Camera"]
        );
    }

    #[test]
    fn should_reject_duplicate_virtual_ids() {
        let home = VirtualHome::with_devices(vec![DEMO_HOME[0], DEMO_HOME[0]]);
        assert!(matches!(
            home.catalog(),
            Err(HearthError::Validation(ValidationError::DuplicateId(_)))
        ));
    }

    #[test]
    fn should_build_empty_catalog_without_devices() {
        let catalog = VirtualHome::with_devices(Vec::new()).catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
