//! loglensd - read-only HTTP API over flat log files.
//!
//! Scans a directory of tab-delimited log files, caches the parsed records
//! in memory, and serves filtered, paginated, and aggregated views over
//! HTTP until shut down.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use loglens_api::{ApiConfig, ApiServer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "loglensd")]
#[command(about = "Read-only HTTP API over flat log files")]
#[command(version)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory containing the log files to serve
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// CORS allowed origin (repeatable; none means any origin)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,

    /// Window size used when a request paginates without an explicit limit
    #[arg(long, default_value_t = 100)]
    default_limit: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("loglensd=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = ApiConfig::new(cli.bind)
        .with_log_dir(&cli.log_dir)
        .with_default_limit(cli.default_limit);
    for origin in cli.cors_origins {
        config = config.with_cors_origin(origin);
    }

    info!(
        bind = %cli.bind,
        log_dir = %cli.log_dir.display(),
        "starting loglensd"
    );

    let server = ApiServer::new(config);
    server
        .serve_with_shutdown(cli.bind, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
