use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use hms_core::CoreConfig;

/// Main entry point for the HMS application
///
/// Starts the REST server with OpenAPI/Swagger documentation on the
/// configured address.
///
/// # Environment Variables
/// - `HMS_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `HMS_DATA_DIR`: Directory for record storage (default: "hms_data")
/// - `HMS_SYMPTOM_TABLE`: Optional path to a replacement symptom table
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("hms=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("HMS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());
    let data_dir = std::env::var("HMS_DATA_DIR").unwrap_or_else(|_| hms_core::DEFAULT_DATA_DIR.into());
    let symptom_table_override = std::env::var("HMS_SYMPTOM_TABLE").ok().map(PathBuf::from);

    tracing::info!("++ Starting HMS REST on {}", rest_addr);
    tracing::info!("++ Record storage under {}", data_dir);

    let cfg = Arc::new(CoreConfig::new(
        PathBuf::from(data_dir),
        symptom_table_override,
    )?);

    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
