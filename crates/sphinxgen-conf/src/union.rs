//! Multi-model union source/index context synthesis.
//!
//! A union source feeds several models into one full-text index. Only
//! fields that exist with an identical four-part signature in every
//! participating model survive; each model's table is paired with that
//! model's content-type discriminator so unioned rows stay traceable to
//! their originating model.

use std::collections::HashSet;

use sphinxgen_core::params::{Params, TableSource};
use sphinxgen_core::{Error, Result, Settings};
use sphinxgen_schema::{FieldSignature, ModelDescriptor};

use crate::classify::{ClassifiedField, Classifier};
use crate::context;

/// Intersect the classified fields of the given models by signature.
///
/// Left fold: the first model's eligible fields seed the running set,
/// and each subsequent model keeps only the fields already present with
/// an identical signature. Intersection is associative, so the surviving
/// set is order-independent; the surviving *order* follows the last
/// model's declaration order, matching the fold.
pub fn intersect_fields(
    models: &[&ModelDescriptor],
    classifier: &Classifier,
) -> Vec<ClassifiedField> {
    let Some((first, rest)) = models.split_first() else {
        return Vec::new();
    };

    let mut fields = classifier.classify_model(first);
    for model in rest {
        let surviving: HashSet<FieldSignature> =
            fields.iter().map(|f| f.signature.clone()).collect();
        fields = classifier
            .classify_model(model)
            .into_iter()
            .filter(|f| surviving.contains(&f.signature))
            .collect();
    }
    fields
}

/// Default union index name: the underscore-joined table names, in
/// input order.
pub fn default_union_index(models: &[&ModelDescriptor]) -> String {
    models
        .iter()
        .map(|m| m.table.as_str())
        .collect::<Vec<_>>()
        .join("_")
}

/// Build the source-block context for a union of models.
///
/// No discriminator is injected into the shared field list here: each
/// table in the `tables` list carries its own discriminator value, and
/// the multi-source renderer emits the per-table expression.
///
/// # Errors
///
/// Returns a usage error for an empty model sequence. A single-model
/// sequence degenerates to the plain single-model field set.
pub fn union_source_context(
    models: &[&ModelDescriptor],
    index: Option<&str>,
    settings: &Settings,
    classifier: &Classifier,
    overrides: &Params,
) -> Result<Params> {
    if models.is_empty() {
        return Err(Error::usage("union requires at least one model"));
    }

    let fields = intersect_fields(models, classifier);
    let default_index = default_union_index(models);
    let index = index.unwrap_or(&default_index);

    let mut params = context::source_context(settings, index, &fields, None, &Params::new())?;
    let tables: Vec<TableSource> = models
        .iter()
        .map(|m| TableSource::new(m.table.clone(), m.content_type))
        .collect();
    params.set("tables", tables);

    Ok(params.merged(overrides))
}

/// Build the index-block context for a union of models.
pub fn union_index_context(
    models: &[&ModelDescriptor],
    index: Option<&str>,
    settings: &Settings,
    overrides: &Params,
) -> Result<Params> {
    if models.is_empty() {
        return Err(Error::usage("union requires at least one model"));
    }

    let default_index = default_union_index(models);
    let index = index.unwrap_or(&default_index);
    context::index_context(settings, index, overrides)
}

// ============================================================================
// Tests
// ============================================================================
