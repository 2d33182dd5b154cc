//! Error types for litequery

use thiserror::Error;

/// Result type alias for query-layer operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for the query layer
#[derive(Debug, Error)]
pub enum QueryError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement was issued before `Db::connect` succeeded
    #[error("No database connection established")]
    NotConnected,

    /// A query node failed eager validation at execute time
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Statement execution error from the underlying driver
    #[error("Execution error: {0}")]
    Execution(#[from] tokio_postgres::Error),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl QueryError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid-query error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not-connected error
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected)
    }

    /// Check if this is an invalid-query error
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, Self::InvalidQuery(_))
    }

    /// Check if this is a connection error
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
