//! CLI command handlers

mod list;
mod request;
mod split;

use std::process::ExitCode;

use anyhow::Result;

use sancert::plugins::Options;

use crate::cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::List { inventory, all } => list::run(&inventory, all, cli.json),
        Commands::Request {
            inventory,
            sites,
            exclude_bindings,
            common_name,
            hide_https,
            advanced,
            out,
        } => {
            let options = Options {
                sites,
                exclude_bindings,
                common_name,
                hide_https,
            };
            request::run(&inventory, options, advanced, out.as_deref(), cli.json)
        }
        Commands::Split { inventory, target } => split::run(&inventory, &target, cli.json),
    }
}
