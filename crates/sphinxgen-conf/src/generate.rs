//! Top-level config assembly and model enumeration.
//!
//! [`ConfigGenerator`] combines the synthesizers and a renderer into
//! complete text artifacts: per-model configs (source + index), union
//! configs, the daemon-wide config, and the enumeration entry point the
//! CLI drives.

use sphinxgen_core::params::Params;
use sphinxgen_core::{Error, Result, Settings};
use sphinxgen_schema::{ModelDescriptor, ModelRegistry};

use crate::classify::Classifier;
use crate::render::{ConfigRenderer, SphinxRenderer, Template};
use crate::{context, source, union};

/// The result of enumerating declared indexes across a registry.
///
/// Finding nothing is not an error: callers report it as an
/// informational condition.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// One combined source+index config per declared index, in
    /// registration order.
    pub configs: Vec<String>,
    /// Number of declared indexes found.
    pub indexes_found: usize,
}

impl Enumeration {
    /// Whether no declared indexes were found.
    pub fn is_empty(&self) -> bool {
        self.indexes_found == 0
    }

    /// All configs concatenated with blank lines.
    pub fn combined(&self) -> String {
        self.configs.join("\n\n")
    }
}

/// Assembles complete configuration artifacts.
pub struct ConfigGenerator {
    settings: Settings,
    classifier: Classifier,
    renderer: Box<dyn ConfigRenderer>,
}

impl ConfigGenerator {
    /// Create a generator with the built-in sphinx.conf renderer.
    pub fn new(settings: Settings) -> Self {
        let classifier = Classifier::from_settings(&settings);
        Self {
            settings,
            classifier,
            renderer: Box::new(SphinxRenderer::new()),
        }
    }

    /// Swap in a different renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn ConfigRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// The classifier derived from this generator's settings.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    // ------------------------------------------------------------------
    // Single model
    // ------------------------------------------------------------------

    /// Render the source block for one model.
    pub fn source_for_model(
        &self,
        model: &ModelDescriptor,
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let params = source::source_context_for_model(
            model,
            index,
            &self.settings,
            &self.classifier,
            overrides,
        )?;
        self.renderer.render(Template::Source, &params)
    }

    /// Render the index block for one model.
    pub fn index_for_model(
        &self,
        model: &ModelDescriptor,
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let params =
            source::index_context_for_model(model, index, &self.settings, overrides)?;
        self.renderer.render(Template::Index, &params)
    }

    /// Render the combined source + index config for one model.
    pub fn config_for_model(
        &self,
        model: &ModelDescriptor,
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let source = self.source_for_model(model, index, overrides)?;
        let index = self.index_for_model(model, index, overrides)?;
        Ok(format!("{source}\n\n{index}"))
    }

    // ------------------------------------------------------------------
    // Model unions
    // ------------------------------------------------------------------

    /// Render the unioned source block for several models.
    pub fn source_for_models(
        &self,
        models: &[&ModelDescriptor],
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let params = union::union_source_context(
            models,
            index,
            &self.settings,
            &self.classifier,
            overrides,
        )?;
        self.renderer.render(Template::MultiSource, &params)
    }

    /// Render the index block over a unioned source.
    pub fn index_for_models(
        &self,
        models: &[&ModelDescriptor],
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let params = union::union_index_context(models, index, &self.settings, overrides)?;
        self.renderer.render(Template::MultiIndex, &params)
    }

    /// Render the combined union config for several models.
    pub fn config_for_models(
        &self,
        models: &[&ModelDescriptor],
        index: Option<&str>,
        overrides: &Params,
    ) -> Result<String> {
        let source = self.source_for_models(models, index, overrides)?;
        let index = self.index_for_models(models, index, overrides)?;
        Ok(format!("{source}\n\n{index}"))
    }

    // ------------------------------------------------------------------
    // Daemon config and enumeration
    // ------------------------------------------------------------------

    /// Render the daemon-wide config (indexer + searchd sections).
    pub fn daemon_config(&self, overrides: &Params) -> Result<String> {
        let params = context::conf_context(&self.settings, overrides)?;
        self.renderer.render(Template::Conf, &params)
    }

    /// Enumerate declared indexes and render each one's combined config.
    ///
    /// Targets either the named applications or, with `all`, every
    /// registered application. Abstract models are skipped; each concrete
    /// model contributes one config per declared index name.
    ///
    /// # Errors
    ///
    /// Returns a usage error when neither application names nor the
    /// `all` flag are given, and an unknown-app error for labels missing
    /// from the registry. A registry with no declared indexes is not an
    /// error: the returned enumeration is simply empty.
    pub fn generate_for_apps(
        &self,
        registry: &ModelRegistry,
        apps: &[String],
        all: bool,
    ) -> Result<Enumeration> {
        let models: Vec<&ModelDescriptor> = if all {
            registry.all_models()
        } else if !apps.is_empty() {
            registry.models_for_apps(apps)?
        } else {
            return Err(Error::usage("You must specify an app name or use --all"));
        };

        let mut enumeration = Enumeration::default();
        for model in models {
            if model.is_abstract {
                continue;
            }
            for index in &model.indexes {
                log::debug!("Generating config for {}.{} ({index})", model.app, model.name);
                enumeration
                    .configs
                    .push(self.config_for_model(model, Some(index.as_str()), &Params::new())?);
                enumeration.indexes_found += 1;
            }
        }

        if enumeration.is_empty() {
            log::info!("No models with declared search indexes found");
        }
        Ok(enumeration)
    }
}

impl std::fmt::Debug for ConfigGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigGenerator")
            .field("classifier", &self.classifier)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sphinxgen_schema::{FieldDescriptor, FieldKind};

    fn article() -> ModelDescriptor {
        ModelDescriptor::new("Article", "blog_article", 7)
            .with_field(FieldDescriptor::new(FieldKind::Text, "title"))
            .with_field(FieldDescriptor::foreign_key("author_id", "auth.User"))
            .with_field(
                FieldDescriptor::new(FieldKind::Integer, "status")
                    .with_choices(vec!["draft".into(), "live".into()]),
            )
            .with_field(FieldDescriptor::new(FieldKind::DateTime, "published_at"))
            .with_index("blog_article")
    }

    fn blog_post() -> ModelDescriptor {
        ModelDescriptor::new("BlogPost", "blog_post", 8)
            .with_field(FieldDescriptor::new(FieldKind::Text, "title"))
            .with_field(FieldDescriptor::foreign_key("author_id", "auth.User"))
            .with_field(
                FieldDescriptor::new(FieldKind::Integer, "status")
                    .with_choices(vec!["draft".into(), "live".into()]),
            )
            .with_index("blog_post")
    }

    fn generator() -> ConfigGenerator {
        let mut settings = Settings::default();
        settings.database.name = "blog".to_string();
        ConfigGenerator::new(settings)
    }

    // ------------------------------------------------------------------------
    // Single-model config tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_for_model_combines_source_and_index() {
        let config = generator()
            .config_for_model(&article(), None, &Params::new())
            .unwrap();

        assert!(config.contains("source blog_article"));
        assert!(config.contains("index blog_article"));
        let source_pos = config.find("source blog_article").unwrap();
        let index_pos = config.find("index blog_article").unwrap();
        assert!(source_pos < index_pos);
        assert!(config.contains("7 as content_type"));
    }

    #[test]
    fn test_config_for_model_explicit_index() {
        let config = generator()
            .config_for_model(&article(), Some("articles"), &Params::new())
            .unwrap();
        assert!(config.contains("source articles"));
        assert!(config.contains("index articles"));
    }

    // ------------------------------------------------------------------------
    // Union config tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_for_models() {
        let a = article();
        let b = blog_post();
        let config = generator()
            .config_for_models(&[&a, &b], None, &Params::new())
            .unwrap();

        assert!(config.contains("source blog_article_blog_post"));
        assert!(config.contains("index blog_article_blog_post"));
        assert!(config.contains("7 as content_type FROM blog_article"));
        assert!(config.contains("8 as content_type FROM blog_post"));
        // published_at only exists on Article, so the union drops it.
        assert!(!config.contains("published_at"));
    }

    // ------------------------------------------------------------------------
    // Daemon config tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_daemon_config() {
        let config = generator().daemon_config(&Params::new()).unwrap();
        assert!(config.contains("searchd"));
        assert!(config.contains("127.0.0.1:3312"));
    }

    // ------------------------------------------------------------------------
    // Enumeration tests
    // ------------------------------------------------------------------------

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register("blog", article());
        registry.register("blog", blog_post());
        registry
    }

    #[test]
    fn test_generate_for_apps_all() {
        let result = generator()
            .generate_for_apps(&registry(), &[], true)
            .unwrap();
        assert_eq!(result.indexes_found, 2);
        assert!(result.combined().contains("source blog_article"));
        assert!(result.combined().contains("source blog_post"));
    }

    #[test]
    fn test_generate_for_apps_named() {
        let result = generator()
            .generate_for_apps(&registry(), &["blog".to_string()], false)
            .unwrap();
        assert_eq!(result.indexes_found, 2);
    }

    #[test]
    fn test_generate_for_apps_no_target_is_usage_error() {
        let err = generator()
            .generate_for_apps(&registry(), &[], false)
            .unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_generate_for_apps_unknown_app() {
        let err = generator()
            .generate_for_apps(&registry(), &["missing".to_string()], false)
            .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_generate_for_apps_empty_registry_is_informational() {
        let result = generator()
            .generate_for_apps(&ModelRegistry::new(), &[], true)
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.combined(), "");
    }

    #[test]
    fn test_generate_for_apps_skips_abstract_and_unindexed() {
        let mut registry = ModelRegistry::new();
        let mut base = article();
        base.is_abstract = true;
        registry.register("blog", base);
        registry.register(
            "blog",
            ModelDescriptor::new("Draft", "blog_draft", 9)
                .with_field(FieldDescriptor::new(FieldKind::Text, "title")),
        );

        let result = generator()
            .generate_for_apps(&registry, &[], true)
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_multiple_declared_indexes_per_model() {
        let mut registry = ModelRegistry::new();
        registry.register("blog", article().with_index("blog_article_delta"));

        let result = generator()
            .generate_for_apps(&registry, &[], true)
            .unwrap();
        assert_eq!(result.indexes_found, 2);
        assert!(result.combined().contains("index blog_article_delta"));
    }
}
