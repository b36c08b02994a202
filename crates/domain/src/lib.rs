//! # hearth-domain
//!
//! Pure domain model for the hearth smart-home simulator.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (lights, thermostats, cameras) as a closed set of kinds
//! - Define the **Catalog** (ordered, duplicate-free set of devices)
//! - Define the **`OperationResult`** returned by validated mutations
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.

pub mod catalog;
pub mod device;
pub mod error;
pub mod id;

use device::Device;
use error::HearthError;

/// Outcome of a validated mutation: the updated copy, or why it was refused.
pub type OperationResult = Result<Device, HearthError>;
