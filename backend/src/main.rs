//! Medical Store Inventory - Backend Server

use std::sync::Arc;

use medical_store_backend::{create_app, db, AppState, Config, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "medical_store_backend=debug,medstore_server=debug,tower_http=debug,sqlx=warn"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Medical Store Inventory Server");
    tracing::info!("Environment: {}", config.environment);

    // The pool connects on first use, so an unreachable database does not
    // stop the server from starting
    let db = Database::connect_lazy(&config.database)?;

    if let Err(e) = db::schema::initialize(&db).await {
        tracing::error!(error = %e, "Database initialization failed");
    }

    let addr = config.bind_address();
    let state = AppState {
        db,
        config: Arc::new(config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
