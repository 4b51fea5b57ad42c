//! Command-line client for Voicegate

use clap::Parser;
use std::process;
use tracing::{error, info, Level};

mod cli;
mod client;
mod commands;
mod config;

use cli::{Cli, Commands};
use config::VgctlConfig;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match VgctlConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let config = config.with_overrides(&args);

    info!("Using Voicegate endpoint: {}", config.endpoint);

    let result = match args.command {
        Commands::Health => commands::health::handle_health_command(&config).await,
        Commands::Transcribe { ref file } => {
            commands::transcribe::handle_transcribe_command(file, &config).await
        }
    };

    match result {
        Ok(_) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}
