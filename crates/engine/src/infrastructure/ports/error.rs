//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A write statement completed but returned no row.
    #[error("{0}")]
    WriteFailed(String),

    /// The connection manager was closed.
    #[error("Database connection is closed")]
    Disconnected,

    /// Stored data could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn write_failed(message: impl ToString) -> Self {
        Self::WriteFailed(message.to_string())
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Failure to bring up the database connection at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Invalid Neo4j configuration: {0}")]
    InvalidConfig(String),

    #[error("Neo4j unreachable at {uri}: {message}")]
    Unreachable { uri: String, message: String },
}
