//! Power draw aggregates and cost estimates.

use hearth_domain::catalog::Catalog;
use hearth_domain::device::{Device, Variant};

use super::mean_or_zero;

/// Mean power draw below which a selection counts as energy efficient.
pub const ENERGY_EFFICIENT_BELOW: f64 = 20.0;

/// Mean power draw of devices in `category`, `0.0` when none match.
#[must_use]
pub fn average_power_usage(catalog: &Catalog, category: &str) -> f64 {
    mean_or_zero(
        catalog
            .iter()
            .filter(|d| d.category == category)
            .map(|d| d.power_usage),
    )
}

/// Whether the mean power draw of `category` (or the whole catalog when
/// `None`) is strictly below [`ENERGY_EFFICIENT_BELOW`].
///
/// An empty selection averages to `0.0` and is therefore efficient.
#[must_use]
pub fn is_energy_efficient(catalog: &Catalog, category: Option<&str>) -> bool {
    let average = match category {
        Some(category) => average_power_usage(catalog, category),
        None => mean_or_zero(catalog.iter().map(|d| d.power_usage)),
    };
    average < ENERGY_EFFICIENT_BELOW
}

/// Total power draw multiplied by `price_per_kwh`.
///
/// Power draw is taken as already matching the price unit; no time
/// integration happens here.
#[must_use]
pub fn daily_cost(catalog: &Catalog, price_per_kwh: f64) -> f64 {
    total_power(catalog.iter()) * price_per_kwh
}

/// Devices ordered from highest to lowest power draw. Ties keep catalog order.
#[must_use]
pub fn sorted_by_power_descending(catalog: &Catalog) -> Vec<&Device> {
    let mut devices: Vec<&Device> = catalog.iter().collect();
    devices.sort_by(|a, b| b.power_usage.total_cmp(&a.power_usage));
    devices
}

/// Number of lights drawing strictly more than `threshold`.
#[must_use]
pub fn count_high_power_lights(catalog: &Catalog, threshold: f64) -> usize {
    catalog
        .filter_by_variant(Variant::Light)
        .into_iter()
        .filter(|d| d.power_usage > threshold)
        .count()
}

/// Total power draw of devices whose name is longer than `min_len` characters.
#[must_use]
pub fn total_power_for_long_names(catalog: &Catalog, min_len: usize) -> f64 {
    let long_names = catalog.iter().filter(|d| d.name.chars().count() > min_len);
    total_power(long_names)
}

/// Sum of power draws starting from `+0.0`; `Iterator::sum` on `f64` yields
/// `-0.0` for an empty iterator.
fn total_power<'a>(devices: impl Iterator<Item = &'a Device>) -> f64 {
    devices.fold(0.0, |acc, d| acc + d.power_usage)
}
