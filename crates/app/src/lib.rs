//! # hearth-app
//!
//! Application layer — the queries and validated mutations run against a
//! device catalog.
//!
//! ## Responsibilities
//! - **Queries** ([`queries`]): pure read-only views over power,
//!   security checks, log history, group-by reports, thermostat averages
//! - **Mutations** ([`mutations`]): validated transitions that return an
//!   updated copy of a device or a typed refusal
//! - **Tracked lookups** ([`session`]): fetch-and-remember over a catalog,
//!   with the "last accessed" id held by the caller
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus `tracing` for diagnostics and `serde`
//! for serializable views).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod mutations;
pub mod queries;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
