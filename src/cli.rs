// cli.rs - Command-line entry points for the server binary

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{self, AppConfig, StoreBackend};
use crate::database::DatabaseManager;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "catcollector")]
#[command(about = "Cat Collector - track your cats, their feedings and their toys")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Port to listen on (overrides PORT)")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the web server (default)")]
    Serve,

    #[command(about = "Apply database migrations and exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Migrate => migrate(config).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    config.validate()?;
    info!("Starting Cat Collector in {:?} mode", config.environment);

    let store = DatabaseManager::open(&config.database).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    let app = crate::app(AppState::new(store, config));

    info!("Cat Collector listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn migrate(config: AppConfig) -> anyhow::Result<()> {
    if config.database.backend == StoreBackend::Memory {
        info!("In-memory store has no migrations to apply");
        return Ok(());
    }

    let pool = DatabaseManager::connect(&config.database).await?;
    DatabaseManager::migrate(&pool).await?;
    Ok(())
}
