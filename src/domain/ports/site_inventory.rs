//! Site Inventory Port
//!
//! Supplies the ordered list of site targets currently configured on the
//! web server. The selection core only ever reads these snapshots.

use crate::domain::entities::Target;
use crate::error::CertResult;

/// Trait for querying the server's site inventory.
///
/// Implementations can be:
/// - `FileInventory`: TOML site definitions on disk
/// - `InMemoryInventory`: fixed list for tests and embedding
pub trait SiteInventory: Send + Sync {
    /// A fresh ordered snapshot of the server's sites.
    ///
    /// Site targets are produced new on every call; callers must not assume
    /// identity beyond the site id. With `hide_https` set, sites whose
    /// bindings are already fully served over https are omitted.
    fn sites(&self, hide_https: bool) -> CertResult<Vec<Target>>;
}
