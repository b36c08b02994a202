//! House history — the boot logs of every device merged into one list.

use std::collections::HashSet;

use hearth_domain::catalog::Catalog;

/// All log lines of the selected devices, in catalog order, each line kept
/// only at its first occurrence.
///
/// With `only_connected` set, disconnected devices are skipped.
#[must_use]
pub fn aggregate_logs(catalog: &Catalog, only_connected: bool) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|d| !only_connected || d.connected)
        .flat_map(|d| d.logs.iter().map(String::as_str))
        .filter(|line| seen.insert(*line))
        .collect()
}

/// [`aggregate_logs`], sorted lexicographically.
#[must_use]
pub fn aggregate_logs_sorted(catalog: &Catalog, only_connected: bool) -> Vec<&str> {
    let mut logs = aggregate_logs(catalog, only_connected);
    logs.sort_unstable();
    logs
}
