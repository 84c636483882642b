//! sancert CLI - SAN certificate automation for web-server sites
//!
//! Usage: sancert <COMMAND>
//!
//! Commands:
//!   list     Show the sites available in the inventory
//!   request  Build a combined certificate target from selected sites
//!   split    Reconstruct per-site targets from a combined target

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match commands::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("✗ {err:#}");
            ExitCode::FAILURE
        }
    }
}
