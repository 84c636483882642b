//! The certificate request target.
//!
//! A `Target` is what a certificate request covers: one physical site, or a
//! combined multi-site selection produced by the combiner. Combined targets
//! are the unit callers persist between runs; single-site targets are
//! produced fresh from every inventory snapshot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::ports::warning_sink::{Warning, WarningSink};
use crate::domain::value_objects::{Membership, RequestSettings, SiteId};

/// What a certificate request covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Covered site(s).
    pub membership: Membership,

    /// Human-readable label: a hostname for single sites, the joined id
    /// list for combined targets. Display only, never parsed.
    #[serde(default)]
    pub display_host: String,

    /// Hostname bindings to cover. Deduplicated, first-seen order.
    #[serde(default)]
    pub hostnames: Vec<String>,

    /// Physical web root of the site; empty for combined targets.
    #[serde(default)]
    pub web_root: PathBuf,

    /// Hidden sites are omitted from interactive listings.
    #[serde(default)]
    pub hidden: bool,

    /// True when hostnames come from server bindings rather than free-form
    /// DNS names typed by the operator.
    #[serde(default = "default_server_bound")]
    pub server_bound: bool,

    /// Requested certificate common name, if chosen.
    #[serde(default)]
    pub common_name: Option<String>,

    /// Request-scope settings; copied by value onto split results.
    #[serde(default)]
    pub settings: RequestSettings,
}

fn default_server_bound() -> bool {
    true
}

impl Target {
    /// A single-site target with no hostnames yet.
    pub fn site(id: SiteId, display_host: impl Into<String>) -> Self {
        Self {
            membership: Membership::Single(id),
            display_host: display_host.into(),
            hostnames: Vec::new(),
            web_root: PathBuf::new(),
            hidden: false,
            server_bound: true,
            common_name: None,
            settings: RequestSettings::default(),
        }
    }

    pub fn with_web_root(mut self, web_root: impl Into<PathBuf>) -> Self {
        self.web_root = web_root.into();
        self
    }

    pub fn with_hostnames<I, S>(mut self, hostnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for host in hostnames {
            self.push_hostname(host.as_ref());
        }
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// The site id of a single-site target, `None` for combined targets.
    pub fn site_id(&self) -> Option<SiteId> {
        self.membership.single_id()
    }

    /// Append a hostname unless it is already present (first-seen wins).
    pub fn push_hostname(&mut self, host: &str) {
        if !self.hostnames.iter().any(|h| h == host) {
            self.hostnames.push(host.to_string());
        }
    }

    /// Hostnames remaining after the exclusion list is applied.
    ///
    /// Exclusions match case-insensitively; original order is preserved.
    /// A target with no effective hostnames cannot participate in a
    /// certificate request.
    pub fn effective_hostnames(&self) -> Vec<&str> {
        self.hostnames
            .iter()
            .map(String::as_str)
            .filter(|host| {
                !self
                    .settings
                    .excluded_bindings
                    .iter()
                    .any(|excluded| excluded.eq_ignore_ascii_case(host))
            })
            .collect()
    }

    /// Check that a requested common name is covered by the request.
    ///
    /// A missing common name is valid (the first hostname is used downstream).
    /// A set common name must match one of the effective hostnames; anything
    /// else warns and fails validation.
    pub fn is_common_name_valid(&self, warnings: &dyn WarningSink) -> bool {
        let Some(name) = &self.common_name else {
            return true;
        };
        if self
            .effective_hostnames()
            .iter()
            .any(|host| host.eq_ignore_ascii_case(name))
        {
            true
        } else {
            warnings.warn(&Warning::CommonNameNotCovered {
                common_name: name.clone(),
            });
            false
        }
    }
}
