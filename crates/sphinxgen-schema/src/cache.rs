//! The explicit all-index-names cache.
//!
//! Query shortcuts search across every declared index at once, which
//! needs the full index-name list. That list is stable for the life of a
//! schema, so it is computed once and held in an owned cache object.
//! There is no implicit first-access global: callers construct the cache,
//! and a schema change means calling [`IndexNameCache::rebuild`].

use crate::registry::ModelRegistry;

/// Cached list of every declared index name in a registry.
///
/// Abstract models are skipped; order follows registration order.
#[derive(Debug, Clone, Default)]
pub struct IndexNameCache {
    names: Vec<String>,
}

impl IndexNameCache {
    /// Build the cache from a registry.
    pub fn build(registry: &ModelRegistry) -> Self {
        let names = registry
            .all_models()
            .iter()
            .filter(|model| !model.is_abstract)
            .flat_map(|model| model.indexes.iter().cloned())
            .collect();
        Self { names }
    }

    /// The cached index names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All index names joined with spaces — the form a multi-index
    /// search query addresses.
    pub fn joined(&self) -> String {
        self.names.join(" ")
    }

    /// Recompute the cache against a (possibly changed) registry.
    pub fn rebuild(&mut self, registry: &ModelRegistry) {
        *self = Self::build(registry);
    }

    /// Whether no indexes are declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
