//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and debugging when you only want the REST server
//! (with OpenAPI/Swagger UI). The workspace's main `hms-run` binary is the
//! deployment entry point.

use api_rest::{router, AppState};
use hms_core::CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the standalone HMS REST API server.
///
/// # Environment Variables
/// - `HMS_REST_ADDR`: Server address (default: "0.0.0.0:5000")
/// - `HMS_DATA_DIR`: Directory for record storage (default: "hms_data")
/// - `HMS_SYMPTOM_TABLE`: Optional path to a replacement symptom table
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration (including reference data) cannot be loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HMS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());

    tracing::info!("-- Starting HMS REST API on {}", addr);

    let data_dir = std::env::var("HMS_DATA_DIR").unwrap_or_else(|_| hms_core::DEFAULT_DATA_DIR.into());
    let symptom_table_override = std::env::var("HMS_SYMPTOM_TABLE").ok().map(PathBuf::from);

    let cfg = Arc::new(CoreConfig::new(
        PathBuf::from(data_dir),
        symptom_table_override,
    )?);

    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
