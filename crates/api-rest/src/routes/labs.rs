//! Lab catalog and lab order endpoints.

use crate::routes::{map_err, parse_id, ApiError};
use crate::wire::{
    ErrorRes, LabOrderRes, ListLabOrdersRes, ListLabTestsRes, UpdateLabOrderStatusReq,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use hms_core::NewLabOrder;

#[utoipa::path(
    get,
    path = "/lab-tests",
    responses(
        (status = 200, description = "The lab test catalog", body = ListLabTestsRes)
    )
)]
/// Lists the lab test catalog.
pub async fn list_lab_tests(State(state): State<AppState>) -> Json<ListLabTestsRes> {
    let data = state.labs.catalog().to_vec();
    Json(ListLabTestsRes {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    get,
    path = "/lab-orders",
    responses(
        (status = 200, description = "All lab orders", body = ListLabOrdersRes)
    )
)]
/// Lists all lab orders.
pub async fn list_lab_orders(State(state): State<AppState>) -> Json<ListLabOrdersRes> {
    let data = state.labs.list();
    Json(ListLabOrdersRes {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    post,
    path = "/lab-orders",
    request_body = NewLabOrder,
    responses(
        (status = 201, description = "Order placed", body = LabOrderRes),
        (status = 400, description = "Unknown test id or invalid order", body = ErrorRes)
    )
)]
/// Places an order for a catalog test.
pub async fn create_lab_order(
    State(state): State<AppState>,
    Json(details): Json<NewLabOrder>,
) -> Result<(StatusCode, Json<LabOrderRes>), ApiError> {
    let order = state.labs.order(details).map_err(map_err)?;
    Ok((
        StatusCode::CREATED,
        Json(LabOrderRes {
            success: true,
            data: order,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/lab-orders/{id}/status",
    params(("id" = String, Path, description = "Lab order record id")),
    request_body = UpdateLabOrderStatusReq,
    responses(
        (status = 200, description = "Updated order", body = LabOrderRes),
        (status = 404, description = "Lab order not found", body = ErrorRes)
    )
)]
/// Moves a lab order to a new status.
pub async fn update_lab_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateLabOrderStatusReq>,
) -> Result<Json<LabOrderRes>, ApiError> {
    let id = parse_id(&id)?;
    let order = state.labs.set_status(&id, req.status).map_err(map_err)?;
    Ok(Json(LabOrderRes {
        success: true,
        data: order,
    }))
}
