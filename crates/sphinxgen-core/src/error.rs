//! Error types for sphinxgen.

/// Errors that can occur during configuration synthesis.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Relational backend outside the supported set
    #[error("Only MySQL and PostgreSQL engines are supported by Sphinx (got '{engine}')")]
    UnsupportedEngine {
        /// The backend identifier that failed detection
        engine: String,
    },

    /// Invalid invocation of a top-level entry point
    #[error("Usage error: {message}")]
    Usage {
        /// What was missing or malformed about the invocation
        message: String,
    },

    /// Configuration error (settings file, schema manifest, paths)
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Config text rendering error
    #[error("Render error: {message}")]
    Render {
        /// What the renderer could not produce
        message: String,
    },

    /// Application not present in the model registry
    #[error("Application not found in registry: {app}")]
    UnknownApp {
        /// Application label that was not found
        app: String,
    },

    /// I/O error (settings or manifest file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for sphinxgen operations.
///
/// This is the standard Result type used throughout the sphinxgen codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error should be reported as a usage error.
    ///
    /// Usage errors get the "invoked incorrectly" exit path in the CLI
    /// rather than the generic failure path.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }

    /// Creates a new unsupported-engine error.
    pub fn unsupported_engine<S: Into<String>>(engine: S) -> Self {
        Error::UnsupportedEngine {
            engine: engine.into(),
        }
    }

    /// Creates a new usage error.
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Error::Usage {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new render error.
    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render {
            message: message.into(),
        }
    }

    /// Creates a new unknown-application error.
    pub fn unknown_app<S: Into<String>>(app: S) -> Self {
        Error::UnknownApp { app: app.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_engine("sqlite3");
        assert_eq!(
            err.to_string(),
            "Only MySQL and PostgreSQL engines are supported by Sphinx (got 'sqlite3')"
        );
    }

    #[test]
    fn test_usage_classification() {
        assert!(Error::usage("missing app name").is_usage());
        assert!(!Error::unsupported_engine("sqlite3").is_usage());
        assert!(!Error::config("bad settings").is_usage());
    }

    #[test]
    fn test_usage_error_display() {
        let err = Error::usage("You must specify an app name or use --all");
        assert_eq!(
            err.to_string(),
            "Usage error: You must specify an app name or use --all"
        );
    }

    #[test]
    fn test_unknown_app_display() {
        let err = Error::unknown_app("blog");
        assert_eq!(err.to_string(), "Application not found in registry: blog");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_error.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
