//! Tracked lookups — fetch a device and remember which one was asked for.

use hearth_domain::catalog::Catalog;
use hearth_domain::device::Device;
use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::id::DeviceId;

/// Caller-owned lookup context holding the last successfully fetched id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSession {
    last_accessed: Option<DeviceId>,
}

impl LookupSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the last device returned by [`fetch`](Self::fetch).
    #[must_use]
    pub fn last_accessed(&self) -> Option<DeviceId> {
        self.last_accessed
    }

    /// Look up `id` in `catalog`, logging the outcome.
    ///
    /// A hit becomes the new last accessed id; a miss leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when `catalog` has no device `id`.
    #[tracing::instrument(skip(self, catalog))]
    pub fn fetch<'a>(
        &mut self,
        catalog: &'a Catalog,
        id: DeviceId,
    ) -> Result<&'a Device, HearthError> {
        if let Some(device) = catalog.find(id) {
            tracing::debug!(name = %device.name, "device fetched");
            self.last_accessed = Some(device.id);
            Ok(device)
        } else {
            tracing::warn!("Not found");
            Err(NotFoundError::device(id).into())
        }
    }
}
