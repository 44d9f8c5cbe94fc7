//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sphinxgen CLI - Sphinx configuration generation
#[derive(Parser, Debug)]
#[command(name = "sphinxgen")]
#[command(about = "Generate Sphinx search-daemon configuration from a schema manifest", long_about = None)]
pub struct Args {
    /// Settings file path (TOML)
    #[arg(short, long, env = "SPHINXGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Schema manifest path (TOML)
    #[arg(short, long, env = "SPHINXGEN_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print source+index config for every declared index
    Generate {
        /// Application labels to enumerate
        apps: Vec<String>,

        /// Enumerate every registered application
        #[arg(long)]
        all: bool,
    },
    /// Print the daemon-wide configuration (indexer + searchd)
    Daemon,
}
