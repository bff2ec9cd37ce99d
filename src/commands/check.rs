use crate::config::DatabaseConfig;
use crate::connection::get_connection;
use crate::error::Result;
use tracing::info;

/// Handle the check command.
///
/// Returns `Ok(false)` when no connection could be made; the failure cause
/// has already been logged by the factory.
#[allow(clippy::disallowed_methods)]
pub async fn handle_check(config: &DatabaseConfig) -> Result<bool> {
    println!("🔍 Checking MySQL connection to {config}");

    let Some(conn) = get_connection(config).await else {
        println!("❌ Connection failed!");
        return Ok(false);
    };

    let (major, minor, patch) = conn.server_version();
    println!("✅ Connected to MySQL database!");
    println!("   Connection ID:  {}", conn.id());
    println!("   Server version: {major}.{minor}.{patch}");

    conn.disconnect().await?;
    info!("Connection check finished");
    Ok(true)
}
