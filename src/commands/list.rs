//! `sancert list` - show the site inventory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use sancert::domain::ports::SiteInventory;
use sancert::infrastructure::inventory::FileInventory;
use sancert::plugins::multi_site::site_choices;
use sancert::ui::output::format_rows;
use sancert::Target;

pub fn run(inventory: &Path, all: bool, json: bool) -> Result<ExitCode> {
    let sites: Vec<Target> = FileInventory::new(inventory)
        .sites(false)
        .context("loading site inventory")?
        .into_iter()
        .filter(|site| all || !site.hidden)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&sites)?);
    } else if sites.is_empty() {
        println!("No sites found in {}", inventory.display());
    } else {
        print!("{}", format_rows(&site_choices(&sites)));
    }
    Ok(ExitCode::SUCCESS)
}
