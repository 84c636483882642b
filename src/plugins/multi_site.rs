//! Multi-site target plugin.
//!
//! Covers all bindings of a chosen set of sites with one SAN certificate.
//! Selection resolves through the combiner; renewal-time reconstruction goes
//! through the splitter against a fresh inventory snapshot.

use std::collections::BTreeSet;

use crate::domain::entities::Target;
use crate::domain::ports::input_service::Choice;
use crate::domain::ports::warning_sink::Warning;
use crate::domain::ports::{InputService, SiteInventory, WarningSink};
use crate::domain::services::{combiner, splitter};
use crate::domain::value_objects::{Membership, SiteId};
use crate::error::{CertError, CertResult};

use super::{Options, RunLevel, TargetPlugin};

/// SAN certificate for all bindings of multiple sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSitePlugin;

impl MultiSitePlugin {
    pub fn new() -> Self {
        Self
    }
}

/// Listing rows for a site inventory, one per site.
pub fn site_choices(sites: &[Target]) -> Vec<Choice> {
    sites
        .iter()
        .map(|site| {
            let key = site
                .site_id()
                .map(|id| id.to_string())
                .unwrap_or_default();
            Choice::new(
                key,
                format!(
                    "{} ({} bindings) [@{}]",
                    site.display_host,
                    site.hostnames.len(),
                    site.web_root.display()
                ),
            )
        })
        .collect()
}

/// Split a comma-separated exclusion answer into hostnames.
fn parse_exclusions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl TargetPlugin for MultiSitePlugin {
    fn name(&self) -> &'static str {
        "multisite"
    }

    fn description(&self) -> &'static str {
        "SAN certificate for all bindings of multiple sites"
    }

    fn default(
        &self,
        options: &Options,
        inventory: &dyn SiteInventory,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>> {
        let selection = options
            .sites
            .as_deref()
            .ok_or(CertError::MissingOption { option: "sites" })?;
        let sites = inventory.sites(false)?;

        let Ok(mut combined) = combiner::combine(&sites, selection, warnings) else {
            return Ok(None);
        };
        if let Some(raw) = &options.exclude_bindings {
            combined.settings.excluded_bindings = parse_exclusions(raw);
        }
        combined.common_name = options.common_name.clone();
        if !combined.is_common_name_valid(warnings) {
            return Ok(None);
        }
        Ok(Some(combined))
    }

    fn acquire(
        &self,
        options: &Options,
        inventory: &dyn SiteInventory,
        input: &dyn InputService,
        run_level: RunLevel,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>> {
        let sites: Vec<Target> = inventory
            .sites(options.hide_https)?
            .into_iter()
            .filter(|site| !site.hidden)
            .collect();

        input.show_paged_list(&site_choices(&sites))?;
        let selection =
            input.request_string("Enter a comma separated list of site IDs, or 'S' to run for all sites")?;
        let Ok(mut combined) = combiner::combine(&sites, &selection, warnings) else {
            return Ok(None);
        };

        let host_rows: Vec<Choice> = combined
            .hostnames
            .iter()
            .map(|host| Choice::new("", host.clone()))
            .collect();
        input.show_paged_list(&host_rows)?;
        let exclusions = input.request_string(
            "Press enter to include all listed hosts, or type a comma-separated list of exclusions",
        )?;
        combined.settings.excluded_bindings = parse_exclusions(&exclusions);

        if run_level >= RunLevel::Advanced {
            let hostnames: Vec<String> = combined
                .effective_hostnames()
                .iter()
                .map(ToString::to_string)
                .collect();
            if let Some(index) =
                input.choose_from("Select the common name for the certificate", &hostnames)?
            {
                combined.common_name = Some(hostnames[index].clone());
            }
        }
        Ok(Some(combined))
    }

    fn refresh(
        &self,
        scheduled: &Target,
        inventory: &dyn SiteInventory,
        warnings: &dyn WarningSink,
    ) -> CertResult<Option<Target>> {
        let sites = inventory.sites(false)?;
        let current: BTreeSet<SiteId> = sites.iter().filter_map(Target::site_id).collect();
        let members = scheduled.membership.site_ids();

        let survivors: BTreeSet<SiteId> = members.intersection(&current).copied().collect();
        for site_id in members.difference(&current) {
            warnings.warn(&Warning::SiteRemoved { site_id: *site_id });
        }

        if survivors.is_empty() {
            return Ok(None);
        }
        if survivors == members {
            return Ok(Some(scheduled.clone()));
        }

        let membership = Membership::combined(survivors.iter().copied());
        let mut narrowed = scheduled.clone();
        narrowed.display_host = membership.encode();
        narrowed.membership = membership;
        narrowed.hostnames = Vec::new();
        for site in sites.iter().filter(|s| {
            s.site_id().is_some_and(|id| survivors.contains(&id))
        }) {
            for host in &site.hostnames {
                narrowed.push_hostname(host);
            }
        }
        Ok(Some(narrowed))
    }

    fn split(&self, scheduled: &Target, inventory: &dyn SiteInventory) -> CertResult<Vec<Target>> {
        let sites = inventory.sites(false)?;
        Ok(splitter::split(scheduled, &sites))
    }
}
