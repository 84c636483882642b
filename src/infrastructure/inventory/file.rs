//! TOML-file-backed site inventory.
//!
//! Site definitions live in a TOML file the operator maintains alongside the
//! web-server configuration. The file is re-read on every query so each call
//! observes the current state, matching the port contract.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::Target;
use crate::domain::ports::SiteInventory;
use crate::domain::value_objects::SiteId;
use crate::error::{CertError, CertResult};

/// One `[[sites]]` entry in the inventory file.
#[derive(Debug, Clone, Deserialize)]
struct SiteDefinition {
    id: u32,
    name: String,
    #[serde(default)]
    web_root: PathBuf,
    #[serde(default)]
    hostnames: Vec<String>,
    #[serde(default)]
    hidden: bool,
    /// All bindings already served over https.
    #[serde(default)]
    https: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    sites: Vec<SiteDefinition>,
}

/// Inventory backed by a TOML site-definition file.
#[derive(Debug, Clone)]
pub struct FileInventory {
    path: PathBuf,
}

impl FileInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CertResult<InventoryFile> {
        if !self.path.exists() {
            return Err(CertError::InventoryNotFound {
                path: self.path.clone(),
            });
        }
        let raw = fs::read_to_string(&self.path)?;
        toml::from_str(&raw).map_err(|err| CertError::InventoryParse {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

impl SiteInventory for FileInventory {
    fn sites(&self, hide_https: bool) -> CertResult<Vec<Target>> {
        let file = self.load()?;
        Ok(file
            .sites
            .into_iter()
            .filter(|site| !(hide_https && site.https))
            .map(|site| {
                Target::site(SiteId(site.id), site.name)
                    .with_web_root(site.web_root)
                    .with_hostnames(site.hostnames)
                    .with_hidden(site.hidden)
            })
            .collect())
    }
}
