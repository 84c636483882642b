//! `sancert request` - build a combined certificate target.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use sancert::infrastructure::diagnostics::ConsoleSink;
use sancert::infrastructure::input::ConsoleInput;
use sancert::infrastructure::inventory::FileInventory;
use sancert::ui::output::render_target;
use sancert::{CertError, MultiSitePlugin, Options, RunLevel, TargetPlugin};

pub fn run(
    inventory_path: &Path,
    options: Options,
    advanced: bool,
    out: Option<&Path>,
    json: bool,
) -> Result<ExitCode> {
    let inventory = FileInventory::new(inventory_path);
    let warnings = ConsoleSink::new();
    let plugin = MultiSitePlugin::new();

    let target = if options.sites.is_some() {
        plugin.default(&options, &inventory, &warnings)?
    } else if std::io::stdin().is_terminal() {
        let run_level = if advanced {
            RunLevel::Advanced
        } else {
            RunLevel::Simple
        };
        plugin.acquire(&options, &inventory, &ConsoleInput::new(), run_level, &warnings)?
    } else {
        // No terminal to ask on; the selection has to come from options.
        return Err(CertError::MissingOption { option: "sites" }.into());
    };

    // An absent target means the selection flow was aborted; the warnings
    // explaining why are already on stderr.
    let Some(target) = target else {
        return Ok(ExitCode::FAILURE);
    };

    let document = serde_json::to_string_pretty(&target)?;
    if let Some(path) = out {
        fs::write(path, &document)
            .with_context(|| format!("writing target to {}", path.display()))?;
    }
    if json {
        println!("{document}");
    } else {
        print!("{}", render_target(&target));
        if let Some(path) = out {
            println!("Saved target to {}", path.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
