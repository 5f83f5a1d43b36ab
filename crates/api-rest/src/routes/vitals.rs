//! Vital signs endpoints, nested under a patient.

use crate::routes::{map_err, parse_id, ApiError};
use crate::wire::{ErrorRes, ListVitalSignsRes, VitalSignsRes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use hms_core::NewVitalSigns;

#[utoipa::path(
    get,
    path = "/patients/{id}/vitals",
    params(("id" = String, Path, description = "Patient record id")),
    responses(
        (status = 200, description = "The patient's readings, newest first", body = ListVitalSignsRes),
        (status = 400, description = "Invalid patient id", body = ErrorRes)
    )
)]
/// Lists a patient's vital signs readings, newest first.
pub async fn list_vitals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListVitalSignsRes>, ApiError> {
    let patient_id = parse_id(&id)?;
    let data = state.vitals.list_for_patient(&patient_id);
    Ok(Json(ListVitalSignsRes {
        success: true,
        count: data.len(),
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/patients/{id}/vitals",
    params(("id" = String, Path, description = "Patient record id")),
    request_body = NewVitalSigns,
    responses(
        (status = 201, description = "Reading recorded", body = VitalSignsRes),
        (status = 400, description = "Invalid reading", body = ErrorRes)
    )
)]
/// Records a vital signs reading for a patient.
pub async fn record_vitals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(reading): Json<NewVitalSigns>,
) -> Result<(StatusCode, Json<VitalSignsRes>), ApiError> {
    let patient_id = parse_id(&id)?;
    let vitals = state.vitals.record(patient_id, reading).map_err(map_err)?;
    Ok((
        StatusCode::CREATED,
        Json(VitalSignsRes {
            success: true,
            data: vitals,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/vitals/latest",
    params(("id" = String, Path, description = "Patient record id")),
    responses(
        (status = 200, description = "Most recent reading", body = VitalSignsRes),
        (status = 404, description = "No readings for this patient", body = ErrorRes)
    )
)]
/// Returns the most recent reading for a patient.
pub async fn latest_vitals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VitalSignsRes>, ApiError> {
    let patient_id = parse_id(&id)?;
    let vitals = state.vitals.latest(&patient_id).map_err(map_err)?;
    Ok(Json(VitalSignsRes {
        success: true,
        data: vitals,
    }))
}
