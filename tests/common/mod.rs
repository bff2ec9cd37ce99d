/// Shared test utilities for dbconnect integration tests
use dbconnect::DatabaseConfig;
use testcontainers_modules::mysql::Mysql;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

/// A throwaway MySQL server; the container stops when this is dropped
pub struct TestMysql {
    #[allow(dead_code)]
    container: ContainerAsync<Mysql>,
    pub config: DatabaseConfig,
}

impl TestMysql {
    /// Start a MySQL container and build a config pointing at it.
    ///
    /// The image defaults to user `root` with an empty password and a `test`
    /// database.
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let container = Mysql::default().start().await?;
        let host = container.get_host().await?.to_string();
        let port = container.get_host_port_ipv4(3306).await?;

        let config = DatabaseConfig {
            host,
            port,
            user: "root".to_string(),
            password: None,
            password_env: None,
            database: "test".to_string(),
        };

        Ok(Self { container, config })
    }
}

/// A config pointing at a local port nothing listens on
#[allow(dead_code)]
pub fn unreachable_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..DatabaseConfig::default()
    }
}
