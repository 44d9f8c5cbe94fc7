//! Connection and daemon settings.
//!
//! Settings are a pre-populated parameter source: the relational store's
//! connection details, the searchd daemon's paths and ports, and the
//! optional geospatial configuration. Every field has a default so a bare
//! `[database]` / `[searchd]` TOML file (or no file at all) still yields a
//! usable configuration.
//!
//! # Example
//!
//! ```rust
//! use sphinxgen_core::Settings;
//!
//! let settings: Settings = toml::from_str(
//!     r#"
//!     [database]
//!     engine = "postgresql"
//!     name = "blog"
//!
//!     [searchd]
//!     port = 9312
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.database.engine, "postgresql");
//! assert_eq!(settings.searchd.port, 9312);
//! assert_eq!(settings.searchd.host, "127.0.0.1");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::version::VER_SPHINX_0_9_8;

/// Relational store connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Backend identifier; must contain `mysql` or `postgresql`.
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Database server host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Database server port.
    #[serde(default = "default_database_port")]
    pub port: u16,

    /// Database name.
    #[serde(default)]
    pub name: String,

    /// Connection user.
    #[serde(default)]
    pub user: String,

    /// Connection password.
    #[serde(default)]
    pub password: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            host: default_host(),
            port: default_database_port(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

/// Searchd daemon settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchdSettings {
    /// Host the daemon listens on.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the daemon listens on.
    #[serde(default = "default_searchd_port")]
    pub port: u16,

    /// Negotiated API protocol version.
    #[serde(default = "default_api_version")]
    pub api_version: u32,

    /// Directory for daemon logs. No trailing slash.
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Directory for index data files. No trailing slash.
    #[serde(default = "default_data_path")]
    pub data_path: String,

    /// Daemon pid file path.
    #[serde(default = "default_pid_file")]
    pub pid_file: String,
}

impl Default for SearchdSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_searchd_port(),
            api_version: default_api_version(),
            log_path: default_log_path(),
            data_path: default_data_path(),
            pid_file: default_pid_file(),
        }
    }
}

/// Geospatial extension settings.
///
/// Geospatial support is an optional capability; when disabled, point
/// columns simply produce no coordinate attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GisSettings {
    /// Whether the geospatial extension is available.
    #[serde(default)]
    pub enabled: bool,

    /// Spatial reference id for coordinate transforms.
    #[serde(default = "default_srid")]
    pub srid: u32,
}

impl Default for GisSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            srid: default_srid(),
        }
    }
}

/// Complete sphinxgen settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Relational store connection.
    #[serde(default)]
    pub database: DatabaseSettings,

    /// Searchd daemon configuration.
    #[serde(default)]
    pub searchd: SearchdSettings,

    /// Optional geospatial extension.
    #[serde(default)]
    pub gis: GisSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error
    /// if it is not valid settings TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        log::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load settings from an explicit path, the default location, or
    /// fall back to defaults when no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => match Self::default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Platform config file location (`<config dir>/sphinxgen/settings.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sphinxgen").join("settings.toml"))
    }
}

fn default_engine() -> String {
    "mysql".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_database_port() -> u16 {
    3306
}

fn default_searchd_port() -> u16 {
    3312
}

fn default_api_version() -> u32 {
    VER_SPHINX_0_9_8
}

fn default_log_path() -> String {
    "/var/log/sphinxsearch".to_string()
}

fn default_data_path() -> String {
    "./_data".to_string()
}

fn default_pid_file() -> String {
    "/var/run/searchd.pid".to_string()
}

fn default_srid() -> u32 {
    // lat/lng (WGS 84)
    4326
}

// ============================================================================
// Tests
// ============================================================================
