use anyhow::Context;
use dbconnect::cli::{Cli, Commands};
use dbconnect::commands::{check, resolve_config, show_config};
use dbconnect::logging::init_logging;
use std::process;

// Allow println in main CLI binary
#[allow(clippy::disallowed_methods)]
fn main() {
    init_logging();

    let cli = Cli::parse();
    tracing::info!("dbconnect CLI initialized");

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Run the selected command, returning whether it succeeded
#[allow(clippy::disallowed_methods)]
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = cli.command else {
        println!("dbconnect - Use --help for available commands");
        return Ok(true);
    };

    let config = resolve_config(cli.config.as_deref(), &cli.overrides())
        .context("failed to load configuration")?;

    match command {
        Commands::Check => {
            let rt = tokio::runtime::Runtime::new().context("failed to start Tokio runtime")?;
            Ok(rt.block_on(check::handle_check(&config.database))?)
        }
        Commands::ShowConfig { json } => {
            show_config::handle_show_config(&config, json)?;
            Ok(true)
        }
    }
}
