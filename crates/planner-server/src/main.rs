use anyhow::Context;
use clap::Parser;
use planner_core::db;
use planner_core::lifecycle::TaskService;
use planner_core::repository::SqliteRepository;
use planner_server::{api, cli::Cli, config::Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?
        .with_overrides(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let pool = db::establish_connection(&config.database_path)
        .await
        .with_context(|| format!("failed to open database {}", config.database_path))?;
    let repository = SqliteRepository::new(pool);
    let service = TaskService::new(repository.clone()).with_list_limit(config.list_limit);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    let result = api::serve(listener, api::router(Arc::new(service)), shutdown_signal()).await;

    repository.close().await;
    tracing::info!("planner shut down");
    result.context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
