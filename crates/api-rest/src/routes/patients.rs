//! Patient endpoints.

use crate::routes::{map_err, parse_id, ApiError};
use crate::wire::{DeletedRes, ErrorRes, ListPatientsRes, PatientRes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use hms_core::PatientDetails;

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients", body = ListPatientsRes)
    )
)]
/// Lists all registered patients.
pub async fn list_patients(State(state): State<AppState>) -> Json<ListPatientsRes> {
    let data = state.patients.list();
    Json(ListPatientsRes {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = PatientDetails,
    responses(
        (status = 201, description = "Patient registered", body = PatientRes),
        (status = 400, description = "Invalid patient details", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Registers a new patient.
pub async fn create_patient(
    State(state): State<AppState>,
    Json(details): Json<PatientDetails>,
) -> Result<(StatusCode, Json<PatientRes>), ApiError> {
    let patient = state.patients.create(details).map_err(map_err)?;
    Ok((
        StatusCode::CREATED,
        Json(PatientRes {
            success: true,
            data: patient,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient record id")),
    responses(
        (status = 200, description = "The patient", body = PatientRes),
        (status = 404, description = "Patient not found", body = ErrorRes)
    )
)]
/// Fetches one patient.
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientRes>, ApiError> {
    let id = parse_id(&id)?;
    let patient = state.patients.get(&id).map_err(map_err)?;
    Ok(Json(PatientRes {
        success: true,
        data: patient,
    }))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient record id")),
    request_body = PatientDetails,
    responses(
        (status = 200, description = "Updated patient", body = PatientRes),
        (status = 404, description = "Patient not found", body = ErrorRes)
    )
)]
/// Replaces a patient's details.
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(details): Json<PatientDetails>,
) -> Result<Json<PatientRes>, ApiError> {
    let id = parse_id(&id)?;
    let patient = state.patients.update(&id, details).map_err(map_err)?;
    Ok(Json(PatientRes {
        success: true,
        data: patient,
    }))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(("id" = String, Path, description = "Patient record id")),
    responses(
        (status = 200, description = "Patient deleted", body = DeletedRes),
        (status = 404, description = "Patient not found", body = ErrorRes)
    )
)]
/// Deletes a patient record.
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedRes>, ApiError> {
    let id = parse_id(&id)?;
    state.patients.delete(&id).map_err(map_err)?;
    Ok(Json(DeletedRes { success: true }))
}
