//! # sphinxgen-cli
//!
//! Command-line interface for sphinxgen: given a schema manifest and
//! settings file, prints Sphinx source/index configuration for every
//! declared index, or the daemon-wide configuration.
//!
//! The binary is a thin wrapper; all command handling lives here so it
//! can be exercised by tests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;

pub use cli::{Args, Command};
pub use commands::run;
