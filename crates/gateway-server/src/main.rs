//! HTTP entry point for the payment gateway.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gateway_server::config::Config;
use gateway_server::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "gateway-server")]
#[clap(about = "Translate JSON payments into fixed-width mainframe records")]
struct Cli {
    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides config and environment
    #[clap(short, long)]
    bind: Option<String>,

    /// Port, overrides config and environment
    #[clap(short, long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is unset
    #[clap(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    let mut config = base
        .with_overrides(|key| std::env::var(key).ok())
        .context("reading GATEWAY_* environment")?;

    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting gateway-server on {} (log_level = {})",
        config.socket_addr_string(),
        config.log_level
    );

    server::run(config).await.context("server failed")
}
