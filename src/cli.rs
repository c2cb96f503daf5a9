//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// agentgate CLI.
#[derive(Debug, Parser)]
#[command(name = "agentgate")]
#[command(about = "HTTP gateway for configured LLM agents")]
#[command(version)]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, env = "AGENTGATE_CONFIG", default_value = "config/agentgate.toml")]
    pub config: PathBuf,

    /// Host to bind (overrides config and BACKEND_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides config and BACKEND_PORT)
    #[arg(long)]
    pub port: Option<u16>,
}
