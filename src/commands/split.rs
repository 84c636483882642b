//! `sancert split` - reconstruct per-site targets from a combined target.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use sancert::infrastructure::inventory::FileInventory;
use sancert::ui::output::render_target;
use sancert::{CertError, MultiSitePlugin, Target, TargetPlugin};

pub fn run(inventory_path: &Path, target_path: &Path, json: bool) -> Result<ExitCode> {
    let raw = fs::read_to_string(target_path)
        .with_context(|| format!("reading target from {}", target_path.display()))?;
    let scheduled: Target =
        serde_json::from_str(&raw).map_err(|err| CertError::TargetParse {
            path: target_path.to_path_buf(),
            message: err.to_string(),
        })?;

    let plugin = MultiSitePlugin::new();
    let parts = plugin.split(&scheduled, &FileInventory::new(inventory_path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
    } else if parts.is_empty() {
        // Valid steady state: every member site is gone or fully excluded.
        println!("Nothing to do: no member site resolves to a usable hostname");
    } else {
        for part in &parts {
            print!("{}", render_target(part));
        }
    }
    Ok(ExitCode::SUCCESS)
}
