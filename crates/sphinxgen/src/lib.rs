//! Sphinxgen — Sphinx search-daemon configuration synthesis.
//!
//! Umbrella crate re-exporting the sphinxgen components:
//!
//! - [`core`]: errors, parameter bags, engine detection, settings
//! - [`schema`]: model/field descriptors, registry, manifest loading
//! - [`conf`]: field classification and config synthesis
//! - `cli`: the command-line interface (feature `cli`)
//!
//! # Example
//!
//! ```rust
//! use sphinxgen::conf::ConfigGenerator;
//! use sphinxgen::core::{Params, Settings};
//! use sphinxgen::schema::{FieldDescriptor, FieldKind, ModelDescriptor};
//!
//! let article = ModelDescriptor::new("Article", "blog_article", 7)
//!     .with_field(FieldDescriptor::new(FieldKind::Text, "title"))
//!     .with_field(FieldDescriptor::new(FieldKind::DateTime, "published_at"));
//!
//! let generator = ConfigGenerator::new(Settings::default());
//! let config = generator
//!     .config_for_model(&article, None, &Params::new())
//!     .unwrap();
//! assert!(config.contains("sql_attr_timestamp"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub use sphinxgen_conf as conf;
pub use sphinxgen_core as core;
pub use sphinxgen_schema as schema;

#[cfg(feature = "cli")]
pub use sphinxgen_cli as cli;

// Re-export the most common entry points at the crate root
pub use sphinxgen_conf::{ConfigGenerator, Enumeration};
pub use sphinxgen_core::{Error, Result, Settings};
pub use sphinxgen_schema::{Manifest, ModelRegistry};
