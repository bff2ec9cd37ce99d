//! `dbconnect` - A small MySQL connection factory
//!
//! Opens one verified connection per call from an explicit configuration,
//! reporting the outcome through structured logging.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command line interface definition
pub mod cli;
/// CLI command handlers
pub mod commands;
/// Configuration management for dbconnect
pub mod config;
pub mod connection;
/// Error types
pub mod error;
pub mod logging;

pub use config::{Config, DatabaseConfig};
pub use connection::{get_connection, try_connect, Connection, MySqlConnector};
pub use error::{ConnectionError, DbConnectError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
