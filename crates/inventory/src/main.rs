use anyhow::{Context, Result};
use inventory::{handler::AppRouter, state::AppState};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger},
};
use tracing::{error, info};

const SERVICE_NAME: &str = "inventory-service";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let logger_provider = match &config.otel_endpoint {
        Some(endpoint) => Some(
            Telemetry::new(SERVICE_NAME, endpoint.clone())
                .init_logger()
                .context("Failed to initialize OpenTelemetry logger")?,
        ),
        None => None,
    };

    init_logger(
        logger_provider.as_ref(),
        SERVICE_NAME,
        config.is_dev,
        config.enable_file_log,
    );

    info!("🚀 Starting {SERVICE_NAME} initialization...");

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(pool);

    let result = AppRouter::serve(config.port, state).await;

    shutdown(logger_provider);

    result
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Migrations applied");
    Ok(())
}

fn shutdown(logger_provider: Option<SdkLoggerProvider>) {
    info!("🛑 Shutting down {SERVICE_NAME}");

    if let Some(provider) = logger_provider {
        if let Err(e) = Telemetry::shutdown(&provider) {
            error!("❌ {e}");
        }
    }
}
