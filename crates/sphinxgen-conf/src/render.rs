//! Config text rendering.
//!
//! Context bags fix *what* goes into a configuration block; rendering
//! fixes the syntax. The [`ConfigRenderer`] trait is the seam: the
//! built-in [`SphinxRenderer`] emits sphinx.conf text directly, and
//! alternative renderers (different daemon dialects, debugging dumps)
//! can be swapped in on the generator.
//!
//! # Context keys
//!
//! Each template consumes a fixed key set:
//!
//! | Template | Required keys |
//! |----------|---------------|
//! | `Source` | connection keys, `source_name`, `table_name`, `primary_key`, `field_names` |
//! | `MultiSource` | connection keys, `source_name`, `tables`, `field_names` |
//! | `Index` / `MultiIndex` | `index_name`, `source_name`, `data_path` |
//! | `Conf` | `sphinx_host`, `sphinx_port`, `log_path`, `pid_file` |
//!
//! Category lists (`group_columns`, `date_columns`, `float_columns`) are
//! optional; absent lists render no attribute lines.

use std::fmt;

use sphinxgen_core::params::{Params, TableSource};
use sphinxgen_core::{Error, Result};

/// The configuration block templates sphinxgen can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Single-model source block.
    Source,
    /// Single-model index block.
    Index,
    /// Unioned multi-model source block.
    MultiSource,
    /// Index block over a unioned source.
    MultiIndex,
    /// Daemon-wide config (indexer + searchd sections).
    Conf,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Source => "source",
            Self::Index => "index",
            Self::MultiSource => "source-multiple",
            Self::MultiIndex => "index-multiple",
            Self::Conf => "sphinx-conf",
        };
        f.write_str(name)
    }
}

/// Renders a context bag into configuration text.
pub trait ConfigRenderer {
    /// Render the given template from the supplied context.
    ///
    /// # Errors
    ///
    /// Returns a render error when a required context key is missing or
    /// has the wrong shape.
    fn render(&self, template: Template, params: &Params) -> Result<String>;
}

/// The built-in sphinx.conf renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphinxRenderer;

impl SphinxRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRenderer for SphinxRenderer {
    fn render(&self, template: Template, params: &Params) -> Result<String> {
        log::debug!("Rendering {template} template");
        match template {
            Template::Source => render_source(params),
            Template::MultiSource => render_multi_source(params),
            Template::Index | Template::MultiIndex => render_index(params),
            Template::Conf => render_conf(params),
        }
    }
}

fn render_source(params: &Params) -> Result<String> {
    let source_name = require_str(params, "source_name")?;
    let table = require_str(params, "table_name")?;
    let primary_key = require_str(params, "primary_key")?;
    let field_names = require_list(params, "field_names")?;

    let mut out = String::new();
    out.push_str(&format!("source {source_name}\n{{\n"));
    push_connection(&mut out, params)?;
    out.push('\n');

    let select_list = select_list(primary_key, field_names);
    line(&mut out, "sql_query", format!("SELECT {select_list} FROM {table}"));
    line(
        &mut out,
        "sql_query_info",
        format!("SELECT * FROM {table} WHERE {primary_key} = $id"),
    );
    push_attrs(&mut out, params);
    out.push_str("}\n");
    Ok(out)
}

fn render_multi_source(params: &Params) -> Result<String> {
    let source_name = require_str(params, "source_name")?;
    let field_names = require_list(params, "field_names")?;
    let tables = params
        .get_tables("tables")
        .ok_or_else(|| missing("tables"))?;
    if tables.is_empty() {
        return Err(Error::render("multi-source requires at least one table"));
    }

    let mut out = String::new();
    out.push_str(&format!("source {source_name}\n{{\n"));
    push_connection(&mut out, params)?;
    out.push('\n');

    // One SELECT per table, each tagged with that table's discriminator,
    // unioned into a single document stream.
    let selects: Vec<String> = tables
        .iter()
        .map(|TableSource { table, content_type }| {
            let select_list = select_list("id", field_names);
            format!("SELECT {select_list}, {content_type} as content_type FROM {table}")
        })
        .collect();
    line(&mut out, "sql_query", selects.join(" UNION "));
    push_attrs(&mut out, params);
    if !params.list_contains("group_columns", "content_type") {
        line(&mut out, "sql_attr_uint", "content_type");
    }
    out.push_str("}\n");
    Ok(out)
}

fn render_index(params: &Params) -> Result<String> {
    let index_name = require_str(params, "index_name")?;
    let source_name = require_str(params, "source_name")?;
    let data_path = require_str(params, "data_path")?;

    let mut out = String::new();
    out.push_str(&format!("index {index_name}\n{{\n"));
    line(&mut out, "source", source_name);
    line(&mut out, "path", format!("{data_path}/{index_name}"));
    line(&mut out, "docinfo", "extern");
    line(&mut out, "morphology", "stem_en");
    line(&mut out, "stopwords", "");
    line(&mut out, "min_word_len", 2);
    line(&mut out, "charset_type", "utf-8");
    out.push_str("}\n");
    Ok(out)
}

fn render_conf(params: &Params) -> Result<String> {
    let host = require_str(params, "sphinx_host")?;
    let port = require_int(params, "sphinx_port")?;
    let log_path = require_str(params, "log_path")?;
    let pid_file = require_str(params, "pid_file")?;

    let mut out = String::new();
    out.push_str("indexer\n{\n");
    line(&mut out, "mem_limit", "32M");
    out.push_str("}\n\n");

    out.push_str("searchd\n{\n");
    line(&mut out, "listen", format!("{host}:{port}"));
    line(&mut out, "log", format!("{log_path}/searchd.log"));
    line(&mut out, "query_log", format!("{log_path}/query.log"));
    line(&mut out, "read_timeout", 5);
    line(&mut out, "max_children", 30);
    line(&mut out, "pid_file", pid_file);
    line(&mut out, "max_matches", 1000);
    line(&mut out, "seamless_rotate", 1);
    out.push_str("}\n");
    Ok(out)
}

fn push_connection(out: &mut String, params: &Params) -> Result<()> {
    line(out, "type", require_str(params, "database_engine")?);
    line(out, "sql_host", require_str(params, "database_host")?);
    line(out, "sql_user", params.get_str("database_user").unwrap_or(""));
    line(out, "sql_pass", params.get_str("database_password").unwrap_or(""));
    line(out, "sql_db", require_str(params, "database_name")?);
    line(out, "sql_port", require_int(params, "database_port")?);
    Ok(())
}

fn push_attrs(out: &mut String, params: &Params) {
    for column in params.get_list("group_columns").unwrap_or_default() {
        line(out, "sql_attr_uint", column);
    }
    for column in params.get_list("date_columns").unwrap_or_default() {
        line(out, "sql_attr_timestamp", column);
    }
    for column in params.get_list("float_columns").unwrap_or_default() {
        line(out, "sql_attr_float", column);
    }
}

fn select_list(primary_key: &str, field_names: &[String]) -> String {
    let mut parts = Vec::with_capacity(field_names.len() + 1);
    parts.push(primary_key.to_string());
    parts.extend(field_names.iter().cloned());
    parts.join(", ")
}

fn line(out: &mut String, key: &str, value: impl fmt::Display) {
    out.push_str(&format!("    {key:<20} = {value}\n"));
}

fn require_str<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    params.get_str(key).ok_or_else(|| missing(key))
}

fn require_int(params: &Params, key: &str) -> Result<i64> {
    params.get_int(key).ok_or_else(|| missing(key))
}

fn require_list<'a>(params: &'a Params, key: &str) -> Result<&'a [String]> {
    params.get_list(key).ok_or_else(|| missing(key))
}

fn missing(key: &str) -> Error {
    Error::render(format!("missing context key '{key}'"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kv(key: &str, value: &str) -> String {
        format!("    {key:<20} = {value}")
    }

    fn source_params() -> Params {
        let mut params = Params::new();
        params.set("database_engine", "mysql");
        params.set("database_host", "127.0.0.1");
        params.set("database_port", 3306);
        params.set("database_name", "blog");
        params.set("database_user", "blog");
        params.set("database_password", "secret");
        params.set("source_name", "blog_article");
        params.set("index_name", "blog_article");
        params.set("table_name", "blog_article");
        params.set("primary_key", "id");
        params.set(
            "field_names",
            vec![
                "title".to_string(),
                "status".to_string(),
                "7 as content_type".to_string(),
            ],
        );
        params.set(
            "group_columns",
            vec!["status".to_string(), "content_type".to_string()],
        );
        params.set("date_columns", vec!["published_at".to_string()]);
        params
    }

    // ------------------------------------------------------------------------
    // Source template tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_source() {
        let text = SphinxRenderer::new()
            .render(Template::Source, &source_params())
            .unwrap();

        assert!(text.starts_with("source blog_article\n{"));
        assert!(text.contains(&kv("type", "mysql")));
        assert!(text.contains(&kv("sql_db", "blog")));
        assert!(text.contains(&kv(
            "sql_query",
            "SELECT id, title, status, 7 as content_type FROM blog_article"
        )));
        assert!(text.contains("SELECT * FROM blog_article WHERE id = $id"));
        assert!(text.contains(&kv("sql_attr_uint", "status")));
        assert!(text.contains(&kv("sql_attr_uint", "content_type")));
        assert!(text.contains(&kv("sql_attr_timestamp", "published_at")));
        assert!(!text.contains("sql_attr_float"));
        assert!(text.trim_end().ends_with('}'));
    }

    #[test]
    fn test_render_source_missing_key() {
        // Rebuild the context without table_name.
        let mut params = Params::new();
        for (key, value) in source_params().iter() {
            if key != "table_name" {
                params.set(key.clone(), value.clone());
            }
        }
        let err = SphinxRenderer::new()
            .render(Template::Source, &params)
            .unwrap_err();
        assert!(err.to_string().contains("table_name"));
    }

    // ------------------------------------------------------------------------
    // Multi-source template tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_multi_source() {
        let mut params = source_params();
        params.set(
            "tables",
            vec![
                TableSource::new("blog_article", 7),
                TableSource::new("blog_post", 8),
            ],
        );
        params.set(
            "field_names",
            vec!["title".to_string(), "status".to_string()],
        );
        params.set("group_columns", vec!["status".to_string()]);

        let text = SphinxRenderer::new()
            .render(Template::MultiSource, &params)
            .unwrap();

        assert!(text.contains(&kv(
            "sql_query",
            "SELECT id, title, status, 7 as content_type FROM blog_article \
             UNION SELECT id, title, status, 8 as content_type FROM blog_post"
        )));
        assert!(text.contains(&kv("sql_attr_uint", "content_type")));
    }

    #[test]
    fn test_render_multi_source_content_type_attr_not_doubled() {
        let mut params = source_params();
        params.set("tables", vec![TableSource::new("blog_article", 7)]);
        // group_columns already carries content_type from source_params().

        let text = SphinxRenderer::new()
            .render(Template::MultiSource, &params)
            .unwrap();
        let attr = kv("sql_attr_uint", "content_type");
        assert_eq!(text.matches(&attr).count(), 1);
    }

    #[test]
    fn test_render_multi_source_requires_tables() {
        let err = SphinxRenderer::new()
            .render(Template::MultiSource, &source_params())
            .unwrap_err();
        assert!(err.to_string().contains("tables"));
    }

    // ------------------------------------------------------------------------
    // Index template tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_index() {
        let mut params = Params::new();
        params.set("index_name", "blog_article");
        params.set("source_name", "blog_article");
        params.set("data_path", "./_data");

        let text = SphinxRenderer::new()
            .render(Template::Index, &params)
            .unwrap();

        assert!(text.starts_with("index blog_article\n{"));
        assert!(text.contains(&kv("source", "blog_article")));
        assert!(text.contains(&kv("path", "./_data/blog_article")));
    }

    #[test]
    fn test_render_multi_index_same_shape() {
        let mut params = Params::new();
        params.set("index_name", "blog_article_blog_post");
        params.set("source_name", "blog_article_blog_post");
        params.set("data_path", "./_data");

        let renderer = SphinxRenderer::new();
        let single = renderer.render(Template::Index, &params).unwrap();
        let multi = renderer.render(Template::MultiIndex, &params).unwrap();
        assert_eq!(single, multi);
    }

    // ------------------------------------------------------------------------
    // Daemon config template tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_conf() {
        let mut params = Params::new();
        params.set("sphinx_host", "127.0.0.1");
        params.set("sphinx_port", 3312);
        params.set("log_path", "/var/log/sphinxsearch");
        params.set("pid_file", "/var/run/searchd.pid");

        let text = SphinxRenderer::new().render(Template::Conf, &params).unwrap();

        assert!(text.contains("indexer\n{"));
        assert!(text.contains("searchd\n{"));
        assert!(text.contains(&kv("listen", "127.0.0.1:3312")));
        assert!(text.contains(&kv("log", "/var/log/sphinxsearch/searchd.log")));
        assert!(text.contains(&kv("pid_file", "/var/run/searchd.pid")));
    }

    #[test]
    fn test_template_display() {
        assert_eq!(Template::Source.to_string(), "source");
        assert_eq!(Template::MultiSource.to_string(), "source-multiple");
        assert_eq!(Template::Conf.to_string(), "sphinx-conf");
    }
}
