//! carapi - HTTP CRUD server for the car inventory table
//!
//! Configuration comes from the environment (optionally a `.env` file):
//! `PORT`, `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_DATABASE`. Flags
//! override the environment where given.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use carapi_server::{create_pool, DbConfig, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "carapi", version, about = "HTTP CRUD API for the car table")]
struct Cli {
    /// Port to listen on (all interfaces)
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Full database URL; overrides the DB_* variables when set
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carapi=info,carapi_server=info,tower_http=debug")),
        )
        .init();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .unwrap_or_else(|| DbConfig::from_env().url());

    let config = ServerConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], cli.port)),
    };

    tracing::info!("Starting carapi on {}", config.bind_addr);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    carapi_server::run_server(pool, config)
        .await
        .context("Server error")?;

    Ok(())
}
