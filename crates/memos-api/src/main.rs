//! memos-api server binary.

use tracing::info;

use memos_api::{build_router, telemetry, AppState, ServerConfig};
use memos_db::{Database, PoolConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let _file_guard = telemetry::init_tracing(&telemetry::LogSettings::from_env());

    let config = ServerConfig::from_env();
    let addr = config.bind_addr()?;

    let pool_config = PoolConfig::default().max_connections(config.db_max_connections);
    let db = Database::connect_with_config(&config.database_url, pool_config).await?;
    info!(subsystem = "db", "Connected to database");

    db.migrate().await?;
    info!(subsystem = "db", "Migrations applied");

    let state = AppState::from_database(&db).with_rate_limit(config.rate_limit);
    if let Some(limit) = &config.rate_limit {
        info!(
            requests = limit.requests,
            period_secs = limit.period.as_secs(),
            "Rate limiting enabled"
        );
    }

    let app = build_router(state, &config);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
