//! Validated mutations — each takes the current device (or catalog) and a
//! proposed change and returns an updated copy or the reason it was refused.
//!
//! Nothing here mutates in place: the input is borrowed and a successful
//! [`OperationResult`] carries a new [`Device`]. Use
//! [`Catalog::replace`](hearth_domain::catalog::Catalog::replace) to fold it
//! back into a catalog.

use std::ops::RangeInclusive;

use hearth_domain::OperationResult;
use hearth_domain::catalog::Catalog;
use hearth_domain::device::{Brightness, Device, DeviceKind, Variant};
use hearth_domain::error::{HearthError, NotFoundError, ValidationError};

/// Temperatures a thermostat may be set to, bounds included.
pub const ALLOWED_TEMPERATURE: RangeInclusive<f64> = 10.0..=30.0;

/// Reading above which a thermostat counts as overheated.
pub const OVERHEATED_ABOVE: f64 = 30.0;

/// Temperature an overheated thermostat is reset to.
pub const COOL_DOWN_TEMPERATURE: f64 = 20.0;

/// Temperature every thermostat is set to in night mode.
pub const NIGHT_TEMPERATURE: f64 = 18.0;

/// Copy of `thermostat` at `new_temp`.
///
/// # Errors
///
/// - [`ValidationError::WrongTemperature`] when `new_temp` is outside
///   [`ALLOWED_TEMPERATURE`] (or not a number)
/// - [`ValidationError::VariantMismatch`] when `thermostat` is not a thermostat
#[tracing::instrument(skip(thermostat), fields(device_id = %thermostat.id))]
pub fn set_thermostat_temperature(thermostat: &Device, new_temp: f64) -> OperationResult {
    thermostat.expect_variant(Variant::Thermostat)?;
    if !ALLOWED_TEMPERATURE.contains(&new_temp) {
        tracing::debug!("temperature rejected");
        return Err(ValidationError::WrongTemperature.into());
    }
    Ok(Device {
        kind: DeviceKind::Thermostat {
            current_temp: new_temp,
        },
        ..thermostat.clone()
    })
}

/// Copy of `camera` marked connected, allowed only while it sees motion.
///
/// # Errors
///
/// - [`ValidationError::MotionNotDetected`] when the camera sees no motion
/// - [`ValidationError::VariantMismatch`] when `camera` is not a camera
#[tracing::instrument(skip(camera), fields(device_id = %camera.id))]
pub fn reconnect_camera_if_motion(camera: &Device) -> OperationResult {
    camera.expect_variant(Variant::Camera)?;
    if camera.motion_detected() != Some(true) {
        return Err(ValidationError::MotionNotDetected.into());
    }
    Ok(Device {
        connected: true,
        ..camera.clone()
    })
}

/// Copy of the first disconnected light in `room`, reconnected at full
/// brightness.
///
/// # Errors
///
/// Returns [`NotFoundError`] (`Device not found`) when `room` has no
/// disconnected light.
#[tracing::instrument(skip(catalog))]
pub fn repair_first_disconnected_light_in_room(catalog: &Catalog, room: &str) -> OperationResult {
    let light = catalog
        .iter()
        .find(|d| d.room == room && !d.connected && d.variant() == Variant::Light)
        .ok_or_else(|| NotFoundError::device(room))?;
    tracing::debug!(device_id = %light.id, "repairing light");
    Ok(Device {
        connected: true,
        kind: DeviceKind::Light {
            brightness: Brightness::MAX,
        },
        ..light.clone()
    })
}

/// Copy of an overheated `thermostat` reset to [`COOL_DOWN_TEMPERATURE`].
///
/// # Errors
///
/// - [`ValidationError::WithinRange`] when the reading is not above
///   [`OVERHEATED_ABOVE`]
/// - [`ValidationError::VariantMismatch`] when `thermostat` is not a thermostat
#[tracing::instrument(skip(thermostat), fields(device_id = %thermostat.id))]
pub fn cool_down_overheated_thermostat(thermostat: &Device) -> OperationResult {
    thermostat.expect_variant(Variant::Thermostat)?;
    match thermostat.current_temp() {
        Some(temp) if temp > OVERHEATED_ABOVE => Ok(Device {
            kind: DeviceKind::Thermostat {
                current_temp: COOL_DOWN_TEMPERATURE,
            },
            ..thermostat.clone()
        }),
        _ => Err(ValidationError::WithinRange.into()),
    }
}

/// New catalog with lights disconnected, thermostats at
/// [`NIGHT_TEMPERATURE`] and cameras armed.
///
/// # Errors
///
/// Propagates the validation error of [`Catalog::map`].
#[tracing::instrument(skip_all, fields(devices = catalog.len()))]
pub fn night_mode(catalog: &Catalog) -> Result<Catalog, HearthError> {
    catalog.map(|device| match device.kind {
        DeviceKind::Light { .. } => Device {
            connected: false,
            ..device.clone()
        },
        DeviceKind::Thermostat { .. } => Device {
            kind: DeviceKind::Thermostat {
                current_temp: NIGHT_TEMPERATURE,
            },
            ..device.clone()
        },
        DeviceKind::Camera { .. } => Device {
            kind: DeviceKind::Camera {
                motion_detected: true,
            },
            ..device.clone()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::id::DeviceId;

    use crate::test_support::{busy_home, camera, light, small_home, thermostat};

    fn attic_thermostat() -> Device {
        thermostat(173, "Attic Termostat", "Attic", false, 30.0, 15.0)
    }

    #[test]
    fn should_accept_boundary_temperatures() {
        for temp in [10.0, 30.0] {
            let updated = set_thermostat_temperature(&attic_thermostat(), temp).unwrap();
            assert_eq!(updated.current_temp(), Some(temp));
        }
    }

    #[test]
    fn should_reject_temperatures_just_outside_bounds() {
        for temp in [9.999, 30.001, 35.0, f64::NAN] {
            let err = set_thermostat_temperature(&attic_thermostat(), temp).unwrap_err();
            assert_eq!(err, HearthError::Validation(ValidationError::WrongTemperature));
            assert_eq!(err.to_string(), "Wrong temperature");
        }
    }

    #[test]
    fn should_read_back_exact_temperature_after_update() {
        let updated = set_thermostat_temperature(&attic_thermostat(), 21.37).unwrap();
        assert_eq!(updated.current_temp(), Some(21.37));
        assert_eq!(updated.id, DeviceId::new(173));
        assert_eq!(updated.name, "Attic Termostat");
    }

    #[test]
    fn should_leave_original_untouched_when_setting_temperature() {
        let original = attic_thermostat();
        let _ = set_thermostat_temperature(&original, 25.0).unwrap();
        assert_eq!(original.current_temp(), Some(15.0));
    }

    #[test]
    fn should_refuse_temperature_change_on_non_thermostat() {
        let lamp = light(1, "Lamp", "Hall", true, 5.0);
        let err = set_thermostat_temperature(&lamp, 20.0).unwrap_err();
        assert!(matches!(
            err,
            HearthError::Validation(ValidationError::VariantMismatch { .. })
        ));
    }

    #[test]
    fn should_reconnect_camera_when_motion_detected() {
        let cam = camera(187, "Backyard Camera", "Backyard", false, 29.0, true);
        let fixed = reconnect_camera_if_motion(&cam).unwrap();
        assert!(fixed.connected);
        assert_eq!(fixed.motion_detected(), Some(true));
    }

    #[test]
    fn should_fail_camera_reconnect_without_motion() {
        let cam = camera(162, "Attic Camera", "Attic", false, 5.0, false);
        let err = reconnect_camera_if_motion(&cam).unwrap_err();
        assert_eq!(err.to_string(), "Camera not connected");
    }

    #[test]
    fn should_repair_disconnected_kitchen_light() {
        let repaired = repair_first_disconnected_light_in_room(&busy_home(), "Kitchen").unwrap();
        assert_eq!(repaired.id, DeviceId::new(172));
        assert!(repaired.connected);
        assert_eq!(repaired.brightness(), Some(Brightness::MAX));
        assert_eq!(repaired.power_usage, 42.0);
    }

    #[test]
    fn should_report_device_not_found_when_no_kitchen_light_is_down() {
        let err = repair_first_disconnected_light_in_room(&small_home(), "Kitchen").unwrap_err();
        assert!(matches!(err, HearthError::NotFound(_)));
        assert_eq!(err.to_string(), "Device not found");
    }

    #[test]
    fn should_skip_disconnected_non_lights_when_repairing() {
        let catalog = Catalog::new(vec![
            thermostat(1, "Kitchen Termostat", "Kitchen", false, 10.0, 20.0),
            light(2, "Kitchen Light", "Kitchen", false, 10.0),
        ])
        .unwrap();
        let repaired = repair_first_disconnected_light_in_room(&catalog, "Kitchen").unwrap();
        assert_eq!(repaired.id, DeviceId::new(2));
    }

    #[test]
    fn should_cool_down_overheated_thermostat() {
        let hot = thermostat(186, "Living Room Termostat", "Living Room", true, 33.0, 31.0);
        let cooled = cool_down_overheated_thermostat(&hot).unwrap();
        assert_eq!(cooled.current_temp(), Some(COOL_DOWN_TEMPERATURE));
    }

    #[test]
    fn should_refuse_cool_down_when_within_range() {
        let ok = thermostat(186, "Living Room Termostat", "Living Room", true, 33.0, 30.0);
        let err = cool_down_overheated_thermostat(&ok).unwrap_err();
        assert_eq!(err.to_string(), "Thermostat is within range");
    }

    #[test]
    fn should_apply_night_mode_to_every_variant() {
        let catalog = busy_home();
        let night = night_mode(&catalog).unwrap();
        assert_eq!(night.len(), catalog.len());
        for device in &night {
            match device.kind {
                DeviceKind::Light { .. } => assert!(!device.connected),
                DeviceKind::Thermostat { current_temp } => {
                    assert_eq!(current_temp, NIGHT_TEMPERATURE);
                }
                DeviceKind::Camera { motion_detected } => assert!(motion_detected),
            }
        }
        assert!(catalog.find(DeviceId::new(100)).unwrap().connected);
    }

    #[test]
    fn should_fold_successful_update_back_into_catalog() {
        let catalog = busy_home();
        let repaired = repair_first_disconnected_light_in_room(&catalog, "Kitchen").unwrap();
        let next = catalog.replace(repaired).unwrap();
        assert!(next.find(DeviceId::new(172)).unwrap().connected);
        assert!(!catalog.find(DeviceId::new(172)).unwrap().connected);
    }
}
