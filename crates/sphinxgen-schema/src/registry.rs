//! The application/model registry.
//!
//! Models are registered explicitly at startup (directly or via the
//! schema manifest); nothing is discovered by runtime attribute scanning.
//! Registration order is preserved so generated output is stable.

use sphinxgen_core::{Error, Result};

use crate::model::ModelDescriptor;

/// One registered application and its models.
#[derive(Debug, Clone, Default)]
struct App {
    name: String,
    models: Vec<ModelDescriptor>,
}

/// Registry of applications and their models.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    apps: Vec<App>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under the given application label.
    ///
    /// The application entry is created on first use; the model's `app`
    /// field is stamped with the label.
    pub fn register(&mut self, app: impl Into<String>, mut model: ModelDescriptor) {
        let app = app.into();
        model.app = app.clone();

        match self.apps.iter_mut().find(|entry| entry.name == app) {
            Some(entry) => entry.models.push(model),
            None => self.apps.push(App {
                name: app,
                models: vec![model],
            }),
        }
    }

    /// Registered application labels, in registration order.
    pub fn app_names(&self) -> Vec<&str> {
        self.apps.iter().map(|app| app.name.as_str()).collect()
    }

    /// All registered models, in registration order.
    pub fn all_models(&self) -> Vec<&ModelDescriptor> {
        self.apps.iter().flat_map(|app| app.models.iter()).collect()
    }

    /// Models of one application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownApp`] if the label is not registered.
    pub fn models_for_app(&self, app: &str) -> Result<&[ModelDescriptor]> {
        self.apps
            .iter()
            .find(|entry| entry.name == app)
            .map(|entry| entry.models.as_slice())
            .ok_or_else(|| Error::unknown_app(app))
    }

    /// Models of the named applications, in argument order.
    pub fn models_for_apps(&self, apps: &[String]) -> Result<Vec<&ModelDescriptor>> {
        let mut models = Vec::new();
        for app in apps {
            models.extend(self.models_for_app(app)?);
        }
        Ok(models)
    }

    /// Number of registered models across all applications.
    pub fn len(&self) -> usize {
        self.apps.iter().map(|app| app.models.len()).sum()
    }

    /// Whether the registry has no models.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
