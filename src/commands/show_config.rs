use crate::config::Config;
use crate::error::Result;
use std::env;

/// Render the effective configuration with the password redacted
pub fn render_config(config: &Config, json: bool) -> Result<String> {
    let database = config.database.redacted();

    if json {
        return Ok(serde_json::to_string_pretty(&database)?);
    }

    let password_env = match &database.password_env {
        Some(var) => {
            let state = if env::var(var).is_ok() {
                "✅ set"
            } else {
                "❌ not set"
            };
            format!("{var} ({state})")
        }
        None => "None".to_string(),
    };

    let lines = [
        "⚙️  dbconnect configuration".to_string(),
        format!("   Host:         {}:{}", database.host, database.port),
        format!("   User:         {}", database.user),
        format!("   Database:     {}", database.database),
        format!(
            "   Password:     {}",
            database.password.as_deref().unwrap_or("None")
        ),
        format!("   Password env: {password_env}"),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Handle the show-config command
#[allow(clippy::disallowed_methods)]
pub fn handle_show_config(config: &Config, json: bool) -> Result<()> {
    print!("{}", render_config(config, json)?);
    if json {
        println!();
    }
    Ok(())
}
