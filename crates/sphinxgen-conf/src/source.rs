//! Single-model source/index context synthesis.
//!
//! Resolves one model's table, primary key, and classified fields into
//! the context a renderer turns into a source block, plus the paired
//! index context. The index name defaults to the model's table; the
//! model's content-type identifier is always injected as the row
//! discriminator so single-model and union indexes stay queryable the
//! same way.

use sphinxgen_core::params::Params;
use sphinxgen_core::{Result, Settings};
use sphinxgen_schema::ModelDescriptor;

use crate::classify::Classifier;
use crate::context;

/// Build the source-block context for one model.
pub fn source_context_for_model(
    model: &ModelDescriptor,
    index: Option<&str>,
    settings: &Settings,
    classifier: &Classifier,
    overrides: &Params,
) -> Result<Params> {
    let fields = classifier.classify_model(model);
    let index = index.unwrap_or(&model.table);

    let mut params = context::source_context(
        settings,
        index,
        &fields,
        Some(model.content_type),
        &Params::new(),
    )?;
    params.set("table_name", model.table.clone());
    params.set("primary_key", model.primary_key.clone());

    Ok(params.merged(overrides))
}

/// Build the index-block context for one model.
///
/// Requires only the resolved index name; it refers to the corresponding
/// source by name and carries no field-level knowledge.
pub fn index_context_for_model(
    model: &ModelDescriptor,
    index: Option<&str>,
    settings: &Settings,
    overrides: &Params,
) -> Result<Params> {
    let index = index.unwrap_or(&model.table);
    context::index_context(settings, index, overrides)
}

// ============================================================================
// Tests
// ============================================================================
