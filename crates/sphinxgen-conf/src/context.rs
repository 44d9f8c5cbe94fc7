//! Parameter bag assembly.
//!
//! The three context builders (daemon config, index block, source block)
//! share one merge mechanism and differ only in which extra keys they
//! inject. Every builder starts from a freshly-built default bag — the
//! defaults are never shared or mutated between calls — and finishes by
//! merging caller overrides, last write winning.

use sphinxgen_core::params::Params;
use sphinxgen_core::{DatabaseEngine, Result, Settings};

use crate::classify::{Category, ClassifiedField};

/// Build the default parameter bag from settings.
///
/// Keys: detected `database_engine`, database connection parameters, the
/// daemon's log/data/pid paths, and the daemon host/port/protocol
/// version. Rebuilt on every call.
///
/// # Errors
///
/// Fails with `UnsupportedEngine` when the configured backend identifier
/// is neither MySQL nor PostgreSQL.
pub fn base_params(settings: &Settings) -> Result<Params> {
    let engine = DatabaseEngine::detect(&settings.database.engine)?;

    let mut params = Params::new();
    params.set("database_engine", engine.as_str());
    params.set("database_host", settings.database.host.clone());
    params.set("database_port", settings.database.port);
    params.set("database_name", settings.database.name.clone());
    params.set("database_user", settings.database.user.clone());
    params.set("database_password", settings.database.password.clone());
    params.set("log_path", settings.searchd.log_path.clone());
    params.set("data_path", settings.searchd.data_path.clone());
    params.set("pid_file", settings.searchd.pid_file.clone());
    params.set("sphinx_host", settings.searchd.host.clone());
    params.set("sphinx_port", settings.searchd.port);
    params.set("sphinx_api_version", settings.searchd.api_version);
    Ok(params)
}

/// Context for the daemon-wide config: just the defaults plus overrides.
pub fn conf_context(settings: &Settings, overrides: &Params) -> Result<Params> {
    Ok(base_params(settings)?.merged(overrides))
}

/// Context for an index block.
///
/// The index block carries no field-level knowledge; it references its
/// source by name.
pub fn index_context(settings: &Settings, index: &str, overrides: &Params) -> Result<Params> {
    let mut params = base_params(settings)?;
    params.set("index_name", index);
    params.set("source_name", index);
    Ok(params.merged(overrides))
}

/// Context for a source block.
///
/// Injects the classified field lists: `field_names` (SQL select
/// expressions), and the per-category `group_columns`, `date_columns`,
/// `float_columns`. A supplied discriminator appends a literal
/// `<id> as content_type` select expression and groups `content_type`.
/// When the geospatial capability is enabled, `gis_columns` and `srid`
/// are injected, and on PostgreSQL each point column contributes
/// projected longitude/latitude expressions; other engines skip the
/// projections silently.
///
/// Table keys are the caller's concern: the single-model path sets
/// `table_name` + `primary_key`, the union path sets `tables`.
pub fn source_context(
    settings: &Settings,
    index: &str,
    fields: &[ClassifiedField],
    discriminator: Option<u32>,
    overrides: &Params,
) -> Result<Params> {
    let mut params = base_params(settings)?;
    params.set("index_name", index);
    params.set("source_name", index);

    let field_names: Vec<String> = fields.iter().map(|f| f.column().to_string()).collect();
    params.set("field_names", field_names);
    params.set("group_columns", columns_in(fields, Category::Group));
    params.set("date_columns", columns_in(fields, Category::Date));
    params.set("float_columns", columns_in(fields, Category::Float));

    if let Some(id) = discriminator {
        params.push_list_item("field_names", format!("{id} as content_type"));
        if !params.list_contains("group_columns", "content_type") {
            params.push_list_item("group_columns", "content_type");
        }
    }

    if let Some(srid) = geo_srid(settings) {
        let gis_columns = columns_in(fields, Category::Geo);
        let engine = DatabaseEngine::detect(&settings.database.engine)?;
        if engine == DatabaseEngine::Pgsql {
            for column in &gis_columns {
                params.push_list_item(
                    "field_names",
                    format!(
                        "radians(ST_X(ST_Transform({column}, {srid}))) AS {column}_longitude"
                    ),
                );
                params.push_list_item(
                    "field_names",
                    format!(
                        "radians(ST_Y(ST_Transform({column}, {srid}))) AS {column}_latitude"
                    ),
                );
            }
        }
        params.set("gis_columns", gis_columns);
        params.set("srid", srid);
    }

    Ok(params.merged(overrides))
}

fn columns_in(fields: &[ClassifiedField], category: Category) -> Vec<String> {
    fields
        .iter()
        .filter(|f| f.has_category(category))
        .map(|f| f.column().to_string())
        .collect()
}

/// The configured srid when the geospatial capability is enabled.
fn geo_srid(settings: &Settings) -> Option<u32> {
    settings.gis.enabled.then_some(settings.gis.srid)
}

// ============================================================================
// Tests
// ============================================================================
