use crate::config::ConfigError;
use crate::database::DatabaseError;
use thiserror::Error;

/// Custom error types for `envkit`
#[derive(Error, Debug)]
pub enum EnvKitError {
    /// Neither the `POSTGRES_*` fields nor `DATABASE_URL` resolved to a URL
    #[error("Could not determine database URL from environment. Check .env and POSTGRES_*/DATABASE_URL.")]
    MissingDatabaseUrl,

    /// Catalog listing failed; fatal for an inspection run
    #[error("Failed to list tables: {source}")]
    ListTables {
        /// Underlying driver error
        source: DatabaseError,
    },

    /// Configuration resolution error wrapper
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Database error wrapper
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `envkit` operations
pub type Result<T> = std::result::Result<T, EnvKitError>;
