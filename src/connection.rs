//! # Connection Factory
//!
//! Opens a single MySQL session from a [`DatabaseConfig`], verifies that it is
//! live, and hands ownership to the caller. There is no pooling and no retry:
//! every call makes exactly one attempt and yields an independent session.
//!
//! ```rust,no_run
//! use dbconnect::{get_connection, DatabaseConfig};
//!
//! # async fn example() {
//! let config = DatabaseConfig::default();
//! if let Some(conn) = get_connection(&config).await {
//!     println!("connected as session {}", conn.id());
//!     let _ = conn.disconnect().await;
//! }
//! # }
//! ```

use crate::config::DatabaseConfig;
use crate::error::ConnectionError;
use mysql_async::prelude::Queryable;
use mysql_async::Conn;
use std::fmt;
use std::future::Future;
use tracing::{debug, error, info};

/// Something that can report whether its session is still usable
pub trait LiveCheck {
    /// Ask the server whether the session is alive
    fn is_connected(&mut self) -> impl Future<Output = bool> + Send;
}

/// Opens sessions for a [`DatabaseConfig`]
pub trait Connector {
    /// The session type produced by this connector
    type Conn: LiveCheck + Send;

    /// Make one connection attempt
    fn open(
        &self,
        config: &DatabaseConfig,
    ) -> impl Future<Output = Result<Self::Conn, ConnectionError>> + Send;
}

/// Live MySQL session owned by the caller
pub struct Connection {
    conn: Conn,
}

impl Connection {
    /// Wrap an already established driver connection
    #[must_use]
    pub const fn new(conn: Conn) -> Self {
        Self { conn }
    }

    /// Server-side connection id of this session
    #[must_use]
    pub fn id(&self) -> u32 {
        self.conn.id()
    }

    /// Server version as `(major, minor, patch)`
    #[must_use]
    pub fn server_version(&self) -> (u16, u16, u16) {
        self.conn.server_version()
    }

    /// Re-check liveness with a ping
    pub async fn is_connected(&mut self) -> bool {
        self.conn.ping().await.is_ok()
    }

    /// Mutable access to the driver connection for running queries
    pub fn conn_mut(&mut self) -> &mut Conn {
        &mut self.conn
    }

    /// Give up the wrapper and keep the driver connection
    #[must_use]
    pub fn into_inner(self) -> Conn {
        self.conn
    }

    /// Close the session gracefully
    pub async fn disconnect(self) -> Result<(), ConnectionError> {
        let id = self.conn.id();
        self.conn.disconnect().await?;
        debug!("Closed MySQL connection {}", id);
        Ok(())
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.conn.id())
            .finish_non_exhaustive()
    }
}

impl LiveCheck for Connection {
    fn is_connected(&mut self) -> impl Future<Output = bool> + Send {
        Self::is_connected(self)
    }
}

/// [`Connector`] backed by `mysql_async`
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlConnector;

impl Connector for MySqlConnector {
    type Conn = Connection;

    fn open(
        &self,
        config: &DatabaseConfig,
    ) -> impl Future<Output = Result<Connection, ConnectionError>> + Send {
        let opts = config.to_opts();
        async move {
            let conn = Conn::new(opts).await?;
            Ok(Connection::new(conn))
        }
    }
}

/// Make one attempt with `connector` and keep the session only if it is live
pub async fn try_connect_with<C: Connector>(
    connector: &C,
    config: &DatabaseConfig,
) -> Result<C::Conn, ConnectionError> {
    debug!("Opening database connection to {}", config);

    let mut conn = connector.open(config).await?;
    if conn.is_connected().await {
        Ok(conn)
    } else {
        Err(ConnectionError::Inactive)
    }
}

/// Like [`try_connect_with`], but failures are logged and collapsed to `None`
pub async fn get_connection_with<C: Connector>(
    connector: &C,
    config: &DatabaseConfig,
) -> Option<C::Conn> {
    match try_connect_with(connector, config).await {
        Ok(conn) => {
            info!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                "Connected to MySQL database"
            );
            Some(conn)
        }
        Err(ConnectionError::Inactive) => {
            error!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                "Connection failed: session is not active"
            );
            None
        }
        Err(e) => {
            error!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                error = %e,
                "Error while connecting to MySQL"
            );
            None
        }
    }
}

/// Open a verified MySQL connection, surfacing the failure cause
pub async fn try_connect(config: &DatabaseConfig) -> Result<Connection, ConnectionError> {
    try_connect_with(&MySqlConnector, config).await
}

/// Open a verified MySQL connection, or `None` if that is not possible.
///
/// Never returns an error: driver failures and inactive sessions are logged
/// and reported as `None`.
pub async fn get_connection(config: &DatabaseConfig) -> Option<Connection> {
    get_connection_with(&MySqlConnector, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    struct FakeConn {
        id: u32,
        active: bool,
    }

    impl LiveCheck for FakeConn {
        fn is_connected(&mut self) -> impl Future<Output = bool> + Send {
            let active = self.active;
            async move { active }
        }
    }

    enum Outcome {
        Active,
        Inactive,
        Refused,
    }

    struct FakeConnector {
        outcome: Outcome,
        attempts: AtomicU32,
    }

    impl FakeConnector {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                attempts: AtomicU32::new(0),
            }
        }
    }

    impl Connector for FakeConnector {
        type Conn = FakeConn;

        fn open(
            &self,
            _config: &DatabaseConfig,
        ) -> impl Future<Output = Result<FakeConn, ConnectionError>> + Send {
            let id = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            let result = match self.outcome {
                Outcome::Active => Ok(FakeConn { id, active: true }),
                Outcome::Inactive => Ok(FakeConn { id, active: false }),
                Outcome::Refused => Err(ConnectionError::Driver(mysql_async::Error::from(
                    io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
                ))),
            };
            async move { result }
        }
    }

    #[tokio::test]
    async fn test_active_connection_is_returned() {
        let connector = FakeConnector::new(Outcome::Active);
        let conn = get_connection_with(&connector, &DatabaseConfig::default()).await;
        assert!(conn.is_some_and(|c| c.active));
    }

    #[tokio::test]
    async fn test_inactive_connection_is_never_returned() {
        let connector = FakeConnector::new(Outcome::Inactive);
        let config = DatabaseConfig::default();

        assert!(get_connection_with(&connector, &config).await.is_none());
        assert!(matches!(
            try_connect_with(&connector, &config).await,
            Err(ConnectionError::Inactive)
        ));
    }

    #[tokio::test]
    async fn test_driver_error_is_swallowed() {
        let connector = FakeConnector::new(Outcome::Refused);
        let config = DatabaseConfig::default();

        assert!(get_connection_with(&connector, &config).await.is_none());

        let err = try_connect_with(&connector, &config).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Driver(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_each_call_makes_a_fresh_attempt() {
        let connector = FakeConnector::new(Outcome::Active);
        let config = DatabaseConfig::default();

        let first = get_connection_with(&connector, &config).await.unwrap();
        let second = get_connection_with(&connector, &config).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(connector.attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_attempt_is_not_retried() {
        let connector = FakeConnector::new(Outcome::Refused);
        let _ = get_connection_with(&connector, &DatabaseConfig::default()).await;
        assert_eq!(connector.attempts.load(Ordering::SeqCst), 1);
    }
}
