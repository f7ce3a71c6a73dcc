//! recordshelf server binary
//!
//! Startup order: load .env, init tracing, parse args, connect pool,
//! liveness ping, serve. Any failure before serving aborts the process.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recordshelf::db;
use recordshelf::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "recordshelf",
    version,
    about = "HTTP API for a small album catalog backed by Postgres"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8083")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Postgres connection string (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, the environment, or .env")?;

    let pool = db::create_pool(&database_url)
        .await
        .context("failed to connect to database")?;
    db::ping(&pool)
        .await
        .context("database liveness check failed")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await.context("server error")?;

    Ok(())
}
