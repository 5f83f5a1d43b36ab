//! Health check endpoint.

use crate::wire::HealthRes;
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthRes)
    )
)]
/// Health check for monitoring and load balancers.
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        status: "OK".into(),
        message: "Server is running".into(),
    })
}
