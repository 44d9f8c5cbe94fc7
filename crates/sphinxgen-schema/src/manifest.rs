//! TOML schema manifest loading.
//!
//! The manifest is the static registration source for the registry: it
//! declares applications, their models, and each model's fields in one
//! TOML document.
//!
//! ```toml
//! [[app]]
//! name = "blog"
//!
//! [[app.model]]
//! name = "Article"
//! table = "blog_article"
//! primary_key = "id"
//! content_type = 7
//! indexes = ["blog_article"]
//!
//! [[app.model.fields]]
//! kind = "text"
//! column = "title"
//!
//! [[app.model.fields]]
//! kind = "foreign_key"
//! column = "author_id"
//! relation = "auth.User"
//! ```

use std::path::Path;

use serde::Deserialize;
use sphinxgen_core::Result;

use crate::model::ModelDescriptor;
use crate::registry::ModelRegistry;

/// One `[[app]]` manifest entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestApp {
    /// Application label.
    pub name: String,

    /// Declared models.
    #[serde(default, rename = "model")]
    pub models: Vec<ModelDescriptor>,
}

/// A parsed schema manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Declared applications.
    #[serde(default, rename = "app")]
    pub apps: Vec<ManifestApp>,
}

impl Manifest {
    /// Parse a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content)?;
        log::debug!(
            "Loaded schema manifest from {:?} ({} apps)",
            path,
            manifest.apps.len()
        );
        Ok(manifest)
    }

    /// Populate a registry from the manifest, consuming it.
    pub fn into_registry(self) -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        for app in self.apps {
            for model in app.models {
                registry.register(app.name.clone(), model);
            }
        }
        registry
    }
}

// ============================================================================
// Tests
// ============================================================================
