//! Sphinxgen Conf — schema-to-configuration synthesis.
//!
//! This crate is the decision core of sphinxgen: it classifies model
//! fields by semantic role, assembles renderer context bags for single
//! models and cross-model unions, and exposes the top-level config
//! assembler used by the CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      sphinxgen-conf                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ConfigGenerator (assembler / enumeration entry points)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  source (single-model contexts)                             │
//! │  union (multi-model intersection + union contexts)          │
//! │  context (parameter bag assembly)                           │
//! │  classify (field eligibility + categories)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ConfigRenderer trait                                       │
//! │  └── SphinxRenderer (sphinx.conf text)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sphinxgen_conf::ConfigGenerator;
//! use sphinxgen_core::{Params, Settings};
//! use sphinxgen_schema::{FieldDescriptor, FieldKind, ModelDescriptor};
//!
//! let article = ModelDescriptor::new("Article", "blog_article", 7)
//!     .with_field(FieldDescriptor::new(FieldKind::Text, "title"));
//!
//! let generator = ConfigGenerator::new(Settings::default());
//! let config = generator
//!     .config_for_model(&article, None, &Params::new())
//!     .unwrap();
//! assert!(config.contains("source blog_article"));
//! assert!(config.contains("index blog_article"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod context;
pub mod generate;
pub mod render;
pub mod source;
pub mod union;

mod proptests;

// Re-export key types at crate root for convenience
pub use classify::{Category, ClassifiedField, Classifier, GeoSupport};
pub use generate::{ConfigGenerator, Enumeration};
pub use render::{ConfigRenderer, SphinxRenderer, Template};
