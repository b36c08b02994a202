//! Query layer — read-only views derived from a [`Catalog`].
//!
//! Every query is a pure function over a borrowed catalog. Results keep
//! catalog order unless documented otherwise, and aggregates over an empty
//! selection resolve to `0.0` instead of `NaN`.
//!
//! [`Catalog`]: hearth_domain::catalog::Catalog

pub mod climate;
pub mod grouping;
pub mod logs;
pub mod power;
pub mod security;
pub mod status;

/// Arithmetic mean, or `0.0` when `values` is empty.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_or_zero(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
