//! Sphinxgen CLI
//!
//! Command-line interface for Sphinx configuration generation.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use sphinxgen_cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match sphinxgen_cli::run(&args) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) if err.is_usage() => {
            eprintln!("{err}");
            std::process::exit(2);
        }
        Err(err) => Err(err.into()),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
