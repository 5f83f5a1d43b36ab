//! Doctor endpoints.

use crate::routes::{map_err, parse_id, ApiError};
use crate::wire::{DeletedRes, DoctorRes, ErrorRes, ListDoctorsRes};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use hms_core::DoctorDetails;

#[utoipa::path(
    get,
    path = "/doctors",
    responses(
        (status = 200, description = "All doctors", body = ListDoctorsRes)
    )
)]
/// Lists all doctors.
pub async fn list_doctors(State(state): State<AppState>) -> Json<ListDoctorsRes> {
    let data = state.doctors.list();
    Json(ListDoctorsRes {
        success: true,
        count: data.len(),
        data,
    })
}

#[utoipa::path(
    post,
    path = "/doctors",
    request_body = DoctorDetails,
    responses(
        (status = 201, description = "Doctor added", body = DoctorRes),
        (status = 400, description = "Invalid doctor details", body = ErrorRes)
    )
)]
/// Adds a new doctor.
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(details): Json<DoctorDetails>,
) -> Result<(StatusCode, Json<DoctorRes>), ApiError> {
    let doctor = state.doctors.create(details).map_err(map_err)?;
    Ok((
        StatusCode::CREATED,
        Json(DoctorRes {
            success: true,
            data: doctor,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor record id")),
    responses(
        (status = 200, description = "The doctor", body = DoctorRes),
        (status = 404, description = "Doctor not found", body = ErrorRes)
    )
)]
/// Fetches one doctor.
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DoctorRes>, ApiError> {
    let id = parse_id(&id)?;
    let doctor = state.doctors.get(&id).map_err(map_err)?;
    Ok(Json(DoctorRes {
        success: true,
        data: doctor,
    }))
}

#[utoipa::path(
    put,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor record id")),
    request_body = DoctorDetails,
    responses(
        (status = 200, description = "Updated doctor", body = DoctorRes),
        (status = 404, description = "Doctor not found", body = ErrorRes)
    )
)]
/// Replaces a doctor's details.
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(details): Json<DoctorDetails>,
) -> Result<Json<DoctorRes>, ApiError> {
    let id = parse_id(&id)?;
    let doctor = state.doctors.update(&id, details).map_err(map_err)?;
    Ok(Json(DoctorRes {
        success: true,
        data: doctor,
    }))
}

#[utoipa::path(
    delete,
    path = "/doctors/{id}",
    params(("id" = String, Path, description = "Doctor record id")),
    responses(
        (status = 200, description = "Doctor deleted", body = DeletedRes),
        (status = 404, description = "Doctor not found", body = ErrorRes)
    )
)]
/// Deletes a doctor record.
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedRes>, ApiError> {
    let id = parse_id(&id)?;
    state.doctors.delete(&id).map_err(map_err)?;
    Ok(Json(DeletedRes { success: true }))
}
