//! Common error types used across the workspace.
//!
//! Each failure is typed; the `Display` of the innermost error is the
//! message shown to the user, so [`HearthError`] forwards it unchanged.

use crate::device::Variant;
use crate::id::DeviceId;

/// Top-level error for every fallible hearth operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HearthError {
    /// A domain rule was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup did not match anything.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Domain rule violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Requested thermostat temperature is outside `[10, 30]`.
    #[error("Wrong temperature")]
    WrongTemperature,

    /// A camera reconnect was requested but no motion was detected.
    #[error("Camera not connected")]
    MotionNotDetected,

    /// A cool-down was requested on a thermostat that is not overheated.
    #[error("Thermostat is within range")]
    WithinRange,

    /// The operation only applies to another kind of device.
    #[error("expected a {expected} but device {id} is a {found}")]
    VariantMismatch {
        id: DeviceId,
        expected: Variant,
        found: Variant,
    },

    /// Two devices in one catalog share an identifier.
    #[error("duplicate device id {0}")]
    DuplicateId(DeviceId),

    /// Power draw must be a finite, non-negative number.
    #[error("power usage must be finite and non-negative, got {0}")]
    NegativePowerUsage(f64),

    /// A device was built without an identifier.
    #[error("device id is required")]
    MissingId,

    /// Name must not be empty.
    #[error("name must not be empty")]
    EmptyName,
}

/// A lookup miss. `entity` names the kind of thing looked up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}

impl NotFoundError {
    /// Miss on a device lookup keyed by `key` (an id or a name).
    #[must_use]
    pub fn device(key: impl ToString) -> Self {
        Self {
            entity: "Device",
            key: key.to_string(),
        }
    }
}
