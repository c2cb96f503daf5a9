//! agentgate - HTTP gateway for configured LLM agents
//!
//! Main entry point: load configuration, initialize tracing, serve.

mod cli;

use std::path::Path;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use agentgate_api::{ApiServer, ApiServerConfig, AppState};
use agentgate_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_tracing(&config.logging)?;

    info!("Starting agentgate v{}", env!("CARGO_PKG_VERSION"));

    let validation = ConfigValidator::validate(&config);
    for warning in &validation.warnings {
        warn!("config {}: {}", warning.path, warning.message);
    }
    if !validation.is_valid() {
        for err in &validation.errors {
            error!("config {}: {}", err.path, err.message);
        }
        return Err(format!("invalid configuration ({} errors)", validation.errors.len()).into());
    }

    if config.stub.enabled {
        info!("Stub mode enabled, fixtures from {}", config.stub_dir().display());
    }

    let state = AppState::from_config(&config);
    let server = ApiServer::new(
        ApiServerConfig::new(config.server.host.clone(), config.server.port),
        state,
    );

    server.run().await
}

/// File, then process environment, then command-line flags.
fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    config.apply_process_env()?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &logging.file_dir {
        Some(dir) => Some(file_layer(dir)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}

fn file_layer<S>(dir: &Path) -> Result<impl tracing_subscriber::Layer<S>, Box<dyn std::error::Error>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    std::fs::create_dir_all(dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("agentgate")
        .filename_suffix("log")
        .max_log_files(30)
        .build(dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard stops the background writer.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    Ok(fmt::layer().with_writer(non_blocking).with_ansi(false))
}
