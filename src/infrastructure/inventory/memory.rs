//! Fixed in-memory site inventory.

use crate::domain::entities::Target;
use crate::domain::ports::SiteInventory;
use crate::error::CertResult;

/// Inventory over a fixed list of sites, for tests and embedding.
///
/// Snapshots are clones of the configured list; the `hide_https` filter is
/// a no-op because the list carries no binding-protocol information.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    sites: Vec<Target>,
}

impl InMemoryInventory {
    pub fn new(sites: Vec<Target>) -> Self {
        Self { sites }
    }
}

impl SiteInventory for InMemoryInventory {
    fn sites(&self, _hide_https: bool) -> CertResult<Vec<Target>> {
        Ok(self.sites.clone())
    }
}
