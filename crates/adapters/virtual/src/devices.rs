//! Virtual device descriptors — light, thermostat, camera.
//!
//! Each descriptor holds fixed values so the demo home is identical on
//! every run.

use hearth_domain::device::Device;
use hearth_domain::error::HearthError;

/// Fields shared by every virtual device.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub id: u32,
    pub name: &'static str,
    pub room: &'static str,
    pub connected: bool,
    pub power_usage: f64,
}

/// A simulated device waiting to be discovered.
#[derive(Debug, Clone, Copy)]
pub enum VirtualDevice {
    Light { at: Placement, brightness: i64 },
    Thermostat { at: Placement, current_temp: f64 },
    Camera { at: Placement, motion_detected: bool },
}

impl VirtualDevice {
    fn placement(&self) -> &Placement {
        match self {
            Self::Light { at, .. } | Self::Thermostat { at, .. } | Self::Camera { at, .. } => at,
        }
    }

    /// Produce the [`Device`] descriptor. Category and logs come from the
    /// device kind.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the builder fails (should not happen
    /// with hardcoded inputs).
    pub fn discover(&self) -> Result<Device, HearthError> {
        let at = self.placement();
        let builder = Device::builder()
            .id(at.id)
            .name(at.name)
            .room(at.room)
            .connected(at.connected)
            .power_usage(at.power_usage);
        let builder = match *self {
            Self::Light { brightness, .. } => builder.light(brightness),
            Self::Thermostat { current_temp, .. } => builder.thermostat(current_temp),
            Self::Camera {
                motion_detected, ..
            } => builder.camera(motion_detected),
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::device::Variant;

    const AT: Placement = Placement {
        id: 1,
        name: "Test Device",
        room: "Lab",
        connected: true,
        power_usage: 3.0,
    };

    #[test]
    fn should_discover_light_with_lighting_category() {
        let device = VirtualDevice::Light {
            at: AT,
            brightness: 70,
        }
        .discover()
        .unwrap();
        assert_eq!(device.variant(), Variant::Light);
        assert_eq!(device.category, "Lightning");
        assert_eq!(device.brightness().map(|b| b.get()), Some(70));
    }

    #[test]
    fn should_discover_thermostat_with_reading() {
        let device = VirtualDevice::Thermostat {
            at: AT,
            current_temp: 17.0,
        }
        .discover()
        .unwrap();
        assert_eq!(device.category, "Climate");
        assert_eq!(device.current_temp(), Some(17.0));
        assert_eq!(device.logs, vec!["Starting..", "Temperature check"]);
    }

    #[test]
    fn should_discover_camera_with_motion_flag() {
        let device = VirtualDevice::Camera {
            at: AT,
            motion_detected: true,
        }
        .discover()
        .unwrap();
        assert_eq!(device.category, "Security");
        assert_eq!(device.motion_detected(), Some(true));
        assert_eq!(device.room, "Lab");
    }
}
