use crate::config::ConfigError;
use thiserror::Error;

/// Why a connection attempt did not produce a usable connection
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The driver opened a session but it failed the liveness check
    #[error("connection was opened but is not active")]
    Inactive,

    /// The driver rejected the attempt (auth, unreachable host, bad port...)
    #[error("{0}")]
    Driver(#[from] mysql_async::Error),
}

/// Custom error types for `dbconnect`
#[derive(Error, Debug)]
pub enum DbConnectError {
    /// Configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Connection handling failed after the connection was handed out
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// JSON serialization error wrapper
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `dbconnect` operations
pub type Result<T> = std::result::Result<T, DbConnectError>;
