//! Household report — runs every query and mutation against a catalog and
//! renders the results as text lines or JSON.

use std::fmt;
use std::io::{self, Write};

use hearth_app::mutations;
use hearth_app::queries::grouping::{self, CategoryGroup, RoomStatus};
use hearth_app::queries::security::{self, IntrusionReport, SystemHealth};
use hearth_app::queries::{climate, logs, power, status};
use hearth_app::session::LookupSession;
use hearth_domain::OperationResult;
use hearth_domain::catalog::Catalog;
use hearth_domain::device::{Device, Variant};
use hearth_domain::id::DeviceId;
use serde::Serialize;

use crate::config::ReportConfig;

const STATUS_DEVICE: &str = "Bathroom Light";
const CAMERA_TO_RECONNECT: &str = "Front Camera";
const THERMOSTAT_ROOM: &str = "Attic";
const THERMOSTAT_TARGET: f64 = 20.0;
const COOL_DOWN_ROOM: &str = "Living Room";
const EFFICIENCY_CATEGORY: &str = "Lightning";
const LONG_NAME_LEN: usize = 10;
const LOOKUP_HIT: DeviceId = DeviceId::new(132);
const LOOKUP_MISS: DeviceId = DeviceId::new(99);

/// Printable form of an [`OperationResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success { device: Device },
    Failure { message: String },
}

impl From<OperationResult> for Outcome {
    fn from(result: OperationResult) -> Self {
        match result {
            Ok(device) => Self::Success { device },
            Err(err) => Self::Failure {
                message: err.to_string(),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { device } => write!(f, "Fixed: {}", device.describe()),
            Self::Failure { message } => write!(f, "Error: {message}"),
        }
    }
}

/// One device in the power ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerLine<'a> {
    pub name: &'a str,
    pub power_usage: f64,
}

/// Result of the two tracked lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupSummary<'a> {
    pub found: Option<&'a str>,
    pub missing: Option<String>,
    pub last_accessed: Option<DeviceId>,
}

/// Every derived view of one catalog.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub device_count: usize,
    pub intrusion: IntrusionReport<'a>,
    pub disconnected: Vec<&'a str>,
    pub house_history: Vec<&'a str>,
    pub sorted_logs: Vec<&'a str>,
    pub rooms: Vec<RoomStatus<'a>>,
    pub name_counts: Vec<(&'a str, usize)>,
    pub attic_average_temperature: f64,
    pub max_temperature_by_room: Vec<(&'a str, f64)>,
    pub light_repair: Outcome,
    pub thermostat_change: Option<Outcome>,
    pub camera_reconnect: Option<Outcome>,
    pub cool_down: Option<Outcome>,
    pub night_mode: Vec<String>,
    pub active_security: Vec<String>,
    pub high_power_lights: usize,
    pub long_name_power: f64,
    pub categories: Vec<CategoryGroup<'a>>,
    pub by_power: Vec<PowerLine<'a>>,
    pub status: String,
    pub health: SystemHealth,
    pub daily_cost: f64,
    pub energy_efficient: bool,
    pub category_average_power: f64,
    pub lookup: LookupSummary<'a>,
}

impl<'a> Report<'a> {
    /// Run every query and mutation against `catalog`.
    #[tracing::instrument(skip_all, fields(devices = catalog.len()))]
    pub fn build(catalog: &'a Catalog, config: &ReportConfig) -> Self {
        let thermostats = catalog.filter_by_variant(Variant::Thermostat);
        let thermostat_change = thermostats
            .iter()
            .find(|d| d.room == THERMOSTAT_ROOM)
            .map(|d| Outcome::from(mutations::set_thermostat_temperature(d, THERMOSTAT_TARGET)));
        let cool_down = thermostats
            .iter()
            .find(|d| d.room == COOL_DOWN_ROOM)
            .map(|d| Outcome::from(mutations::cool_down_overheated_thermostat(d)));
        let camera_reconnect = catalog
            .filter_by_variant(Variant::Camera)
            .into_iter()
            .find(|d| d.name == CAMERA_TO_RECONNECT)
            .map(|d| Outcome::from(mutations::reconnect_camera_if_motion(d)));

        let night_mode = match mutations::night_mode(catalog) {
            Ok(night) => night.iter().map(Device::describe).collect(),
            Err(err) => vec![format!("Error: {err}")],
        };

        let mut session = LookupSession::new();
        let found = session.fetch(catalog, LOOKUP_HIT).ok().map(|d| d.name.as_str());
        let missing = session.fetch(catalog, LOOKUP_MISS).err().map(|e| e.to_string());

        Self {
            device_count: catalog.len(),
            intrusion: security::intrusion_check(catalog),
            disconnected: status::disconnected_device_names(catalog),
            house_history: logs::aggregate_logs(catalog, true),
            sorted_logs: logs::aggregate_logs_sorted(catalog, false),
            rooms: grouping::group_by_room(catalog),
            name_counts: grouping::count_by_name(catalog),
            attic_average_temperature: climate::average_attic_temperature_connected(catalog),
            max_temperature_by_room: climate::max_temperature_by_room(catalog),
            light_repair: mutations::repair_first_disconnected_light_in_room(
                catalog,
                &config.repair_room,
            )
            .into(),
            thermostat_change,
            camera_reconnect,
            cool_down,
            night_mode,
            active_security: security::active_security_devices(catalog),
            high_power_lights: power::count_high_power_lights(
                catalog,
                config.high_power_light_threshold,
            ),
            long_name_power: power::total_power_for_long_names(catalog, LONG_NAME_LEN),
            categories: grouping::group_by_category(catalog),
            by_power: power::sorted_by_power_descending(catalog)
                .into_iter()
                .map(|d| PowerLine {
                    name: &d.name,
                    power_usage: d.power_usage,
                })
                .collect(),
            status: status::device_status_summary(catalog, STATUS_DEVICE)
                .unwrap_or_else(|err| status::not_found_message(&err)),
            health: security::system_health(catalog),
            daily_cost: power::daily_cost(catalog, config.price_per_kwh),
            energy_efficient: power::is_energy_efficient(catalog, None),
            category_average_power: power::average_power_usage(catalog, EFFICIENCY_CATEGORY),
            lookup: LookupSummary {
                found,
                missing,
                last_accessed: session.last_accessed(),
            },
        }
    }

    /// Write one line per query.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Devices: {}", self.device_count)?;
        writeln!(out, "Intruder: {}", self.intrusion.any_motion)?;
        writeln!(
            out,
            "Devices where intruder was detected: {}",
            self.intrusion.names_with_motion.join(", ")
        )?;
        writeln!(out, "Down devices: {}", self.disconnected.join(", "))?;
        writeln!(out, "House history: {}", self.house_history.join(", "))?;
        writeln!(out, "Sorted logs: {}", self.sorted_logs.join(", "))?;
        for room in &self.rooms {
            writeln!(
                out,
                "Room {}: Online: {}, Offline: {}",
                room.room, room.online, room.offline
            )?;
        }
        for (name, count) in &self.name_counts {
            writeln!(out, "Name {name}: {count} device(s)")?;
        }
        writeln!(
            out,
            "Average attic temperature (connected): {}",
            self.attic_average_temperature
        )?;
        for (room, max) in &self.max_temperature_by_room {
            writeln!(out, "Max temperature in {room}: {max}")?;
        }
        writeln!(out, "Light repair: {}", self.light_repair)?;
        write_optional(out, "Thermostat change", self.thermostat_change.as_ref())?;
        write_optional(out, "Camera reconnect", self.camera_reconnect.as_ref())?;
        write_optional(out, "Cool down", self.cool_down.as_ref())?;
        for line in &self.night_mode {
            writeln!(out, "Night mode: {line}")?;
        }
        for line in &self.active_security {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "Power hogs: {}", self.high_power_lights)?;
        writeln!(
            out,
            "Power of devices with names over {LONG_NAME_LEN} chars: {}",
            self.long_name_power
        )?;
        for group in &self.categories {
            let names: Vec<&str> = group.devices.iter().map(|d| d.name.as_str()).collect();
            writeln!(out, "Category {}: {}", group.category, names.join(", "))?;
        }
        for line in &self.by_power {
            writeln!(out, "Device {} power usage {}", line.name, line.power_usage)?;
        }
        writeln!(out, "{}", self.status)?;
        writeln!(out, "{}", self.health)?;
        writeln!(out, "Daily cost: {:.2}", self.daily_cost)?;
        writeln!(out, "Energy efficient: {}", self.energy_efficient)?;
        writeln!(
            out,
            "Average {EFFICIENCY_CATEGORY} power: {}",
            self.category_average_power
        )?;
        if let Some(name) = self.lookup.found {
            writeln!(out, "Lookup {LOOKUP_HIT}: {name}")?;
        }
        if let Some(message) = &self.lookup.missing {
            writeln!(out, "Lookup {LOOKUP_MISS}: {message}")?;
        }
        if let Some(id) = self.lookup.last_accessed {
            writeln!(out, "Last accessed device: {id}")?;
        }
        Ok(())
    }
}

fn write_optional<W: Write>(
    out: &mut W,
    label: &str,
    outcome: Option<&Outcome>,
) -> io::Result<()> {
    match outcome {
        Some(outcome) => writeln!(out, "{label}: {outcome}"),
        None => writeln!(out, "{label}: No device found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_adapter_virtual::VirtualHome;

    fn render(catalog: &Catalog) -> String {
        let report = Report::build(catalog, &ReportConfig::default());
        let mut buf = Vec::new();
        report.write_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn should_render_demo_home_report() {
        let catalog = VirtualHome::default().catalog().unwrap();
        let text = render(&catalog);

        for expected in [
            "Devices: 14\n",
            "Intruder: true\n",
            "Devices where intruder was detected: Front Camera, Backyard Camera\n",
            "Down devices: Attic Light, Attic Termostat, Kitchen Light\n",
            "Room Attic: Online: 1, Offline: 2\n",
            "Average attic temperature (connected): 0\n",
            "Light repair: Fixed: Light Kitchen Light is at 100%\n",
            "Thermostat change: Fixed: Thermostat Attic Termostat at 20\n",
            "Camera reconnect: Fixed: Camera Front Camera started. Motion detected : true\n",
            "Cool down: Error: Thermostat is within range\n",
            "Power hogs: 3\n",
            "Device Bathroom Light status true using 15.0 watts\n",
            "Security system ONLINE highpower usage NO\n",
            "Daily cost: 38.80\n",
            "Lookup 99: Device not found\n",
            "Last accessed device: 132\n",
        ] {
            assert!(text.contains(expected), "missing line {expected:?}");
        }
    }

    #[test]
    fn should_report_missing_devices_on_empty_catalog() {
        let text = render(&Catalog::default());
        assert!(text.contains("Devices: 0\n"));
        assert!(text.contains("Light repair: Error: Device not found\n"));
        assert!(text.contains("Thermostat change: No device found\n"));
        assert!(text.contains("Device Bathroom Light not found\n"));
        assert!(text.contains("Energy efficient: true\n"));
        assert!(text.contains("Daily cost: 0.00\n"));
        assert!(text.contains("Power of devices with names over 10 chars: 0\n"));
    }

    #[test]
    fn should_serialize_outcomes_with_status_tag() {
        let failure = Outcome::Failure {
            message: "Wrong temperature".to_string(),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], "Wrong temperature");
    }

    #[test]
    fn should_serialize_full_report_as_json() {
        let catalog = VirtualHome::default().catalog().unwrap();
        let report = Report::build(&catalog, &ReportConfig::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["device_count"], 14);
        assert_eq!(json["light_repair"]["status"], "success");
        assert_eq!(json["health"]["security_online"], true);
        assert_eq!(json["lookup"]["last_accessed"], 132);
    }
}
