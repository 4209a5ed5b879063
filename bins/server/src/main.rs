//! Kontabil API Server
//!
//! Main entry point for the Kontabil backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kontabil_api::collaborators::{
    NoHolidayOverrides, TracingAuditLog, UnconfiguredDirectory, UnconfiguredPayroll,
    UnconfiguredSettings,
};
use kontabil_api::{AppState, create_router};
use kontabil_db::connect;
use kontabil_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kontabil=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Collaborator integrations: deployments replace the unconfigured
    // defaults with real payroll/HR/settings adapters.
    let state = AppState {
        db: Arc::new(db),
        payroll: Arc::new(UnconfiguredPayroll),
        employees: Arc::new(UnconfiguredDirectory),
        settings: Arc::new(UnconfiguredSettings),
        holidays: Arc::new(NoHolidayOverrides),
        audit: Arc::new(TracingAuditLog),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
