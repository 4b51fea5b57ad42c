//! Voicegate local API daemon

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod config;

use config::GatewayConfig;
use voicegate_core::{PlaceholderTranscriber, PresentationAdapter, SpeechToText};
use voicegate_http::HttpGateway;

#[derive(Parser)]
#[command(name = "voicegated")]
#[command(about = "Voicegate local voice assistant API daemon")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let log_level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match GatewayConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let http_config = match config.http_config() {
        Ok(http_config) => http_config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let engine: Arc<dyn SpeechToText> = Arc::new(PlaceholderTranscriber::new());
    let gateway = HttpGateway::new(http_config);

    if let Err(e) = gateway.start(engine).await {
        error!("Gateway terminated: {}", e);
        process::exit(1);
    }

    info!("Shutdown complete");
}
