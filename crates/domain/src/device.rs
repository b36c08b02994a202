//! Device — one smart-home unit: a light, a thermostat, or a camera.
//!
//! Every device shares the same descriptive fields; the per-kind state
//! lives in [`DeviceKind`], a closed set matched exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::DeviceId;

/// The kind of a device, without its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Thermostat,
    Camera,
}

impl Variant {
    /// Category tag a device of this kind gets when none is given.
    #[must_use]
    pub fn default_category(self) -> &'static str {
        match self {
            Self::Light => "Lightning",
            Self::Thermostat => "Climate",
            Self::Camera => "Security",
        }
    }

    /// Boot log a device of this kind starts with when none is given.
    #[must_use]
    pub fn default_logs(self) -> &'static [&'static str] {
        match self {
            Self::Light => &["Dimming", "Full Light"],
            Self::Thermostat => &["Starting..", "Temperature check"],
            Self::Camera => &["Motion Sensor Initialized", "Lens Clean"],
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::Camera => f.write_str("camera"),
        }
    }
}

/// Light level in percent. Out-of-range input is clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: Self = Self(100);

    /// Build a brightness, clamping `level` into `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(0, 100) as u8)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for Brightness {
    fn from(level: i64) -> Self {
        Self::clamped(level)
    }
}

impl From<Brightness> for u8 {
    fn from(b: Brightness) -> Self {
        b.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Per-kind device state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    Light { brightness: Brightness },
    Thermostat { current_temp: f64 },
    Camera { motion_detected: bool },
}

impl DeviceKind {
    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Light { .. } => Variant::Light,
            Self::Thermostat { .. } => Variant::Thermostat,
            Self::Camera { .. } => Variant::Camera,
        }
    }
}

/// A smart-home device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub category: String,
    pub name: String,
    pub room: String,
    pub connected: bool,
    pub power_usage: f64,
    pub logs: Vec<String>,
    #[serde(flatten)]
    pub kind: DeviceKind,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// Brightness, for lights only.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        match self.kind {
            DeviceKind::Light { brightness } => Some(brightness),
            _ => None,
        }
    }

    /// Current temperature, for thermostats only.
    #[must_use]
    pub fn current_temp(&self) -> Option<f64> {
        match self.kind {
            DeviceKind::Thermostat { current_temp } => Some(current_temp),
            _ => None,
        }
    }

    /// Motion flag, for cameras only.
    #[must_use]
    pub fn motion_detected(&self) -> Option<bool> {
        match self.kind {
            DeviceKind::Camera { motion_detected } => Some(motion_detected),
            _ => None,
        }
    }

    /// Fail with [`ValidationError::VariantMismatch`] unless this device is
    /// of the `expected` kind.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] on a kind mismatch.
    pub fn expect_variant(&self, expected: Variant) -> Result<(), HearthError> {
        let found = self.variant();
        if found != expected {
            return Err(ValidationError::VariantMismatch {
                id: self.id,
                expected,
                found,
            }
            .into());
        }
        Ok(())
    }

    /// One-line description of what the device is doing.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            DeviceKind::Light { brightness } => format!("Light {} is at {brightness}", self.name),
            DeviceKind::Thermostat { current_temp } => {
                format!("Thermostat {} at {current_temp}", self.name)
            }
            DeviceKind::Camera { motion_detected } => format!(
                "Camera {} started. Motion detected : {motion_detected}",
                self.name
            ),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `power_usage` is negative or not finite
    ///   ([`ValidationError::NegativePowerUsage`])
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.power_usage.is_finite() || self.power_usage < 0.0 {
            return Err(ValidationError::NegativePowerUsage(self.power_usage).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
///
/// Category and logs default from the kind when not set.
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    category: Option<String>,
    name: Option<String>,
    room: Option<String>,
    connected: bool,
    power_usage: f64,
    logs: Option<Vec<String>>,
    kind: Option<DeviceKind>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(DeviceId::new(id));
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    #[must_use]
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    #[must_use]
    pub fn power_usage(mut self, watts: f64) -> Self {
        self.power_usage = watts;
        self
    }

    #[must_use]
    pub fn logs<I, S>(mut self, logs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.logs = Some(logs.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Make this a light; `level` is clamped into `0..=100`.
    #[must_use]
    pub fn light(self, level: i64) -> Self {
        self.kind(DeviceKind::Light {
            brightness: Brightness::clamped(level),
        })
    }

    #[must_use]
    pub fn thermostat(self, current_temp: f64) -> Self {
        self.kind(DeviceKind::Thermostat { current_temp })
    }

    #[must_use]
    pub fn camera(self, motion_detected: bool) -> Self {
        self.kind(DeviceKind::Camera { motion_detected })
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// A builder without a kind produces a light at full brightness.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if the id was never set, if `name`
    /// is missing or empty, or if the power draw is invalid.
    pub fn build(self) -> Result<Device, HearthError> {
        let id = self.id.ok_or(ValidationError::MissingId)?;
        let kind = self.kind.unwrap_or(DeviceKind::Light {
            brightness: Brightness::MAX,
        });
        let variant = kind.variant();
        let device = Device {
            id,
            category: self
                .category
                .unwrap_or_else(|| variant.default_category().to_string()),
            name: self.name.unwrap_or_default(),
            room: self.room.unwrap_or_default(),
            connected: self.connected,
            power_usage: self.power_usage,
            logs: self.logs.unwrap_or_else(|| {
                variant
                    .default_logs()
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect()
            }),
            kind,
        };
        device.validate()?;
        Ok(device)
    }
}
