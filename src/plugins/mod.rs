//! Target Plugins
//!
//! A target plugin decides what a certificate request covers. The renewal
//! engine drives plugins through four operations: unattended target
//! construction from options, interactive acquisition, refreshing a
//! persisted target against the live server, and splitting a combined
//! target for per-site installation steps.

pub mod multi_site;

pub use multi_site::MultiSitePlugin;

use crate::domain::entities::Target;
use crate::domain::ports::{InputService, SiteInventory, WarningSink};
use crate::error::CertResult;

/// How much the current flow is allowed to ask the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunLevel {
    /// Sensible defaults, minimal questions.
    Simple,
    /// Full control, including common-name choice.
    Advanced,
}

/// Options a plugin reads from the command line or a renewal schedule.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Selection expression: site ids, or `s` for all sites.
    pub sites: Option<String>,
    /// Comma-separated hostnames to exclude from the request.
    pub exclude_bindings: Option<String>,
    /// Requested certificate common name.
    pub common_name: Option<String>,
    /// Hide sites that are already fully served over https.
    pub hide_https: bool,
}

/// Trait for target-selection plugins.
pub trait TargetPlugin: Send + Sync {
    /// Stable plugin name used on the command line and in renewal files.
    fn name(&self) -> &'static str;

    /// One-line description shown in plugin listings.
    fn description(&self) -> &'static str;

    /// Build a target from options alone, without operator interaction.
    ///
    /// `None` means the selection flow must be aborted for this target;
    /// warnings explaining why have already been emitted.
    fn default(
        &self,
        options: &Options,
        inventory: &dyn SiteInventory,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>>;

    /// Build a target by interrogating the operator.
    fn acquire(
        &self,
        options: &Options,
        inventory: &dyn SiteInventory,
        input: &dyn InputService,
        run_level: RunLevel,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>>;

    /// Re-validate a persisted target against the live server.
    ///
    /// `None` cancels the renewal: nothing the target covers still exists.
    fn refresh(
        &self,
        scheduled: &Target,
        inventory: &dyn SiteInventory,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>>;

    /// Break a target into the per-site targets downstream steps operate on.
    fn split(&self, scheduled: &Target, inventory: &dyn SiteInventory) -> CertResult<Vec<Target>>;
}

/// All available target plugins.
pub fn all_plugins() -> Vec<Box<dyn TargetPlugin>> {
    vec![Box::new(MultiSitePlugin::new())]
}

/// Look a plugin up by its stable name.
pub fn get_plugin(name: &str) -> Option<Box<dyn TargetPlugin>> {
    all_plugins()
        .into_iter()
        .find(|plugin| plugin.name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_plugins_returns_expected_count() {
        assert_eq!(all_plugins().len(), 1);
    }

    #[test]
    fn get_plugin_is_case_insensitive() {
        assert!(get_plugin("multisite").is_some());
        assert!(get_plugin("MultiSite").is_some());
    }

    #[test]
    fn get_plugin_unknown_returns_none() {
        assert!(get_plugin("nope").is_none());
    }

    #[test]
    fn run_levels_are_ordered() {
        assert!(RunLevel::Advanced > RunLevel::Simple);
    }
}
