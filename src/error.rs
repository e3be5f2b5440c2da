//! Error types for crudgen

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for crudgen operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur during schema introspection and code generation
#[derive(Error, Debug)]
pub enum GenError {
    /// MySQL driver error. Fatal when raised while opening the connection;
    /// per-table metadata failures are logged and the table is skipped.
    #[error("MySQL error: {0}")]
    Db(#[from] mysql_async::Error),

    /// A table name failed the injection-safety check
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Introspection query returned something unusable
    #[error("Unexpected introspection result: {0}")]
    Schema(String),

    /// I/O failure while writing one artifact; the remaining artifacts for
    /// the same table are still attempted
    #[error("Failed to write {artifact} for {table}: {source}")]
    ArtifactWrite {
        table: String,
        artifact: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A static support file's template is not on disk
    #[error("Template not found: {0}")]
    TemplateMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for GenError {
    fn from(err: config::ConfigError) -> Self {
        GenError::Config(err.to_string())
    }
}
