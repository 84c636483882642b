//! sancert - SAN certificate automation for web-server sites
//!
//! sancert builds certificate request targets from a web server's site
//! inventory: an operator selects one or many sites, their hostname bindings
//! are merged into a single combined target, and at renewal time the
//! combined target is split back into per-site targets for installation.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod plugins;
pub mod ui;

// Re-exports for convenience
pub use domain::entities::Target;
pub use domain::services::combiner::{combine, SelectionError};
pub use domain::services::splitter::split;
pub use domain::value_objects::{Membership, RequestSettings, SiteId};
pub use error::{CertError, CertResult};
pub use plugins::{all_plugins, get_plugin, MultiSitePlugin, Options, RunLevel, TargetPlugin};
