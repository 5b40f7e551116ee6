use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use customers_info::api::rest::routes;
use customers_info::domain::service::{Service, ServiceConfig};
use customers_info::infra::storage::{self, migrations::Migrator, sea_orm_repo::SeaOrmCustomersRepository};

mod config;
mod logging;

use config::AppConfig;

/// Customers Server - CRUD and filtered search over customer records
#[derive(Parser)]
#[command(name = "customers-server")]
#[command(about = "Customers Server - CRUD and filtered search over customer records")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    logging::init(&cfg.logging.level, cli.verbose);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Check => {
            info!("Configuration OK");
            Ok(())
        }
        Commands::Run => run(cfg).await,
    }
}

async fn run(cfg: AppConfig) -> Result<()> {
    info!("Connecting to database: {}", cfg.database.redacted_dsn());
    let db = storage::connect(&cfg.database.dsn).await?;

    info!("Running customers database migrations");
    Migrator::up(&db, None)
        .await
        .context("database migration failed")?;

    let repo = Arc::new(SeaOrmCustomersRepository::new(db));
    let service = Arc::new(Service::new(
        repo,
        ServiceConfig {
            default_page_size: cfg.customers_info.default_page_size,
            max_page_size: cfg.customers_info.max_page_size,
            ..ServiceConfig::default()
        },
    ));

    let app = axum::Router::new().nest("/api/v1", routes::router(service));

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {e}");
    }
}
