//! Camera checks and overall system health.

use std::fmt;

use hearth_domain::catalog::Catalog;
use hearth_domain::device::{DeviceKind, Variant};
use serde::Serialize;

/// Power draw above which a device counts as a high consumer.
pub const HIGH_POWER_ABOVE: f64 = 100.0;

/// Category tag of security devices.
pub const SECURITY_CATEGORY: &str = "Security";

/// Camera connectivity and power headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemHealth {
    /// Every camera is connected. Vacuously true without cameras.
    pub security_online: bool,
    /// At least one device draws more than [`HIGH_POWER_ABOVE`].
    pub high_power_usage_present: bool,
}

impl fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Security system {} highpower usage {}",
            if self.security_online { "ONLINE" } else { "OFFLINE" },
            if self.high_power_usage_present { "YES" } else { "NO" },
        )
    }
}

/// Cameras that currently see motion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntrusionReport<'a> {
    pub any_motion: bool,
    /// Camera names in catalog order.
    pub names_with_motion: Vec<&'a str>,
}

#[must_use]
pub fn system_health(catalog: &Catalog) -> SystemHealth {
    SystemHealth {
        security_online: catalog
            .filter_by_variant(Variant::Camera)
            .iter()
            .all(|d| d.connected),
        high_power_usage_present: catalog.iter().any(|d| d.power_usage > HIGH_POWER_ABOVE),
    }
}

#[must_use]
pub fn intrusion_check(catalog: &Catalog) -> IntrusionReport<'_> {
    let names_with_motion: Vec<&str> = catalog
        .iter()
        .filter(|d| matches!(d.kind, DeviceKind::Camera { motion_detected: true }))
        .map(|d| d.name.as_str())
        .collect();
    IntrusionReport {
        any_motion: !names_with_motion.is_empty(),
        names_with_motion,
    }
}

/// `"<id> - <name> is active"` for each connected security device.
#[must_use]
pub fn active_security_devices(catalog: &Catalog) -> Vec<String> {
    catalog
        .filter_by_category(SECURITY_CATEGORY)
        .into_iter()
        .filter(|d| d.connected)
        .map(|d| format!("{} - {} is active", d.id, d.name))
        .collect()
}
