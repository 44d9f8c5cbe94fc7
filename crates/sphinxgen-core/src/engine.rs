//! Relational backend detection.
//!
//! Sphinx sources pull rows over a native database connection, so the
//! generated `type =` line must name one of the engines Sphinx ships
//! drivers for. Detection matches the configured backend identifier the
//! way ORM settings spell them (`mysql`, `django.db.backends.postgresql`,
//! `postgresql_psycopg2`, ...): by case-insensitive substring.

use std::fmt;

use crate::error::{Error, Result};

/// A relational backend supported by Sphinx sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    /// MySQL / MariaDB.
    Mysql,
    /// PostgreSQL.
    Pgsql,
}

impl DatabaseEngine {
    /// Detect the engine from a configured backend identifier.
    ///
    /// Matches case-insensitively on substring presence: identifiers
    /// containing `mysql` map to [`DatabaseEngine::Mysql`], identifiers
    /// containing `postgresql` map to [`DatabaseEngine::Pgsql`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEngine`] for any other identifier
    /// (embedded-file databases, oracle, ...). This is fatal: there is no
    /// Sphinx source type to fall back to.
    pub fn detect(identifier: &str) -> Result<Self> {
        let lowered = identifier.to_lowercase();
        if lowered.contains("mysql") {
            Ok(Self::Mysql)
        } else if lowered.contains("postgresql") {
            Ok(Self::Pgsql)
        } else {
            Err(Error::unsupported_engine(identifier))
        }
    }

    /// The spelling Sphinx expects in a source `type =` line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Pgsql => "pgsql",
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mysql() {
        assert_eq!(
            DatabaseEngine::detect("mysql").unwrap(),
            DatabaseEngine::Mysql
        );
        assert_eq!(
            DatabaseEngine::detect("django.db.backends.mysql").unwrap(),
            DatabaseEngine::Mysql
        );
    }

    #[test]
    fn test_detect_mysql_any_case() {
        assert_eq!(
            DatabaseEngine::detect("MySQL").unwrap(),
            DatabaseEngine::Mysql
        );
        assert_eq!(
            DatabaseEngine::detect("MYSQL").unwrap(),
            DatabaseEngine::Mysql
        );
    }

    #[test]
    fn test_detect_postgresql() {
        assert_eq!(
            DatabaseEngine::detect("postgresql").unwrap(),
            DatabaseEngine::Pgsql
        );
        assert_eq!(
            DatabaseEngine::detect("postgresql_psycopg2").unwrap(),
            DatabaseEngine::Pgsql
        );
        assert_eq!(
            DatabaseEngine::detect("PostgreSQL").unwrap(),
            DatabaseEngine::Pgsql
        );
    }

    #[test]
    fn test_detect_unsupported_is_fatal() {
        let err = DatabaseEngine::detect("sqlite3").unwrap_err();
        assert!(err.to_string().contains("sqlite3"));
        assert!(!err.is_usage());

        assert!(DatabaseEngine::detect("oracle").is_err());
        assert!(DatabaseEngine::detect("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DatabaseEngine::Mysql.to_string(), "mysql");
        assert_eq!(DatabaseEngine::Pgsql.to_string(), "pgsql");
    }
}
