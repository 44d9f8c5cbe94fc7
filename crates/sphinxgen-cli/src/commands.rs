//! Handler functions for CLI commands.
//!
//! Each handler returns the text to print so the binary stays a thin
//! shell around `println!`.

use std::path::Path;

use sphinxgen_conf::ConfigGenerator;
use sphinxgen_core::params::Params;
use sphinxgen_core::{Result, Settings};
use sphinxgen_schema::{Manifest, ModelRegistry};

use crate::cli::{Args, Command};

/// Printed when an enumeration finds no declared indexes.
pub const NO_MODELS_FOUND: &str =
    "Unable to find any models with declared search indexes.";

/// Dispatch the parsed arguments and return the output text.
pub fn run(args: &Args) -> Result<String> {
    let settings = Settings::load(args.config.as_deref())?;
    match &args.command {
        Command::Generate { apps, all } => {
            let registry = load_registry(args.schema.as_deref())?;
            cmd_generate(&settings, &registry, apps, *all)
        }
        Command::Daemon => cmd_daemon(&settings),
    }
}

/// Generate config text for the targeted applications.
///
/// Finding no declared indexes is informational, not an error; the
/// returned text is a single notice line in that case.
pub fn cmd_generate(
    settings: &Settings,
    registry: &ModelRegistry,
    apps: &[String],
    all: bool,
) -> Result<String> {
    let generator = ConfigGenerator::new(settings.clone());
    let enumeration = generator.generate_for_apps(registry, apps, all)?;
    if enumeration.is_empty() {
        Ok(NO_MODELS_FOUND.to_string())
    } else {
        Ok(enumeration.combined())
    }
}

/// Generate the daemon-wide configuration.
pub fn cmd_daemon(settings: &Settings) -> Result<String> {
    let generator = ConfigGenerator::new(settings.clone());
    generator.daemon_config(&Params::new())
}

/// Load the model registry from the manifest path.
///
/// Falls back to `./schema.toml` when no path is given; a completely
/// absent manifest yields an empty registry (and therefore the
/// informational no-models output).
pub fn load_registry(schema: Option<&Path>) -> Result<ModelRegistry> {
    match schema {
        Some(path) => Ok(Manifest::from_file(path)?.into_registry()),
        None => {
            let fallback = Path::new("schema.toml");
            if fallback.exists() {
                Ok(Manifest::from_file(fallback)?.into_registry())
            } else {
                log::debug!("No schema manifest found; registry is empty");
                Ok(ModelRegistry::new())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
