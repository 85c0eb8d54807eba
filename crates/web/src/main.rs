use std::sync::Arc;

use anyhow::Context;
use storage::{
    Database,
    repository::{AthleteRepository, AthleteStore, MemoryAthleteStore},
    services::classification::GenderPolicy,
};
use web::{config::Config, features::chat::ChatHub, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Liftlog");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store: Arc<dyn AthleteStore> = match config.database_url.as_deref() {
        Some(database_url) => {
            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            Arc::new(AthleteRepository::new(db.pool().clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, athletes will be kept in memory only");
            Arc::new(MemoryAthleteStore::new())
        }
    };

    let gender_policy = GenderPolicy::from_strict(config.strict_gender);
    tracing::info!(?gender_policy, "Gender policy selected");

    let state = AppState::new(store, gender_policy, ChatHub::new(config.chat_capacity));
    let app = web::router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
