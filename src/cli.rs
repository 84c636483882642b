use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sancert - SAN certificate automation for web-server sites
#[derive(Parser, Debug)]
#[command(name = "sancert")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the sites in the inventory
    List {
        /// Path to the site inventory file
        #[arg(short, long, default_value = "sites.toml")]
        inventory: PathBuf,

        /// Include hidden sites
        #[arg(long)]
        all: bool,
    },

    /// Build a combined certificate target from selected sites
    Request {
        /// Path to the site inventory file
        #[arg(short, long, default_value = "sites.toml")]
        inventory: PathBuf,

        /// Site ids to cover (comma separated), or 's' for all sites;
        /// prompts interactively when omitted
        #[arg(short, long)]
        sites: Option<String>,

        /// Comma-separated hostnames to exclude from the request
        #[arg(long)]
        exclude_bindings: Option<String>,

        /// Requested certificate common name
        #[arg(long)]
        common_name: Option<String>,

        /// Hide sites that are already fully served over https
        #[arg(long)]
        hide_https: bool,

        /// Ask the advanced questions (common-name choice)
        #[arg(long)]
        advanced: bool,

        /// Write the combined target to a file as JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Split a previously combined target into per-site targets
    Split {
        /// Path to the site inventory file
        #[arg(short, long, default_value = "sites.toml")]
        inventory: PathBuf,

        /// Path to the persisted target JSON
        #[arg(short, long)]
        target: PathBuf,
    },
}
