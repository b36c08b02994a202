//! Per-device status lines.

use hearth_domain::catalog::Catalog;
use hearth_domain::error::NotFoundError;

/// Connectivity and power draw of the device named `name`.
///
/// # Errors
///
/// Returns [`NotFoundError`] when no device has that name. Its key is the
/// requested name; [`not_found_message`] renders the user-facing line.
pub fn device_status_summary(catalog: &Catalog, name: &str) -> Result<String, NotFoundError> {
    catalog
        .find_by_name(name)
        .map(|d| {
            format!(
                "Device {} status {} using {:?} watts",
                d.name, d.connected, d.power_usage
            )
        })
        .ok_or_else(|| NotFoundError::device(name))
}

/// The line shown in place of a status summary for a missing device.
#[must_use]
pub fn not_found_message(err: &NotFoundError) -> String {
    format!("{} {} not found", err.entity, err.key)
}

/// Names of every disconnected device, in catalog order.
#[must_use]
pub fn disconnected_device_names(catalog: &Catalog) -> Vec<&str> {
    catalog
        .iter()
        .filter(|d| !d.connected)
        .map(|d| d.name.as_str())
        .collect()
}
