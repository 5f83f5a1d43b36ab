//! Appointment endpoints.

use crate::routes::{map_err, parse_id, ApiError};
use crate::wire::{AppointmentRes, DeletedRes, ErrorRes, ListAppointmentsRes};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use hms_core::{
    AppointmentChanges, AppointmentDetails, AppointmentFilter, AppointmentStatus, RecordId,
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Listing filters accepted by `GET /appointments`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AppointmentQuery {
    /// Only appointments with this doctor.
    pub doctor_id: Option<String>,
    /// Only appointments booked under this patient email.
    pub patient_email: Option<String>,
    /// Only appointments in this status.
    pub status: Option<AppointmentStatus>,
    /// Only appointments on this calendar date (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentQuery),
    responses(
        (status = 200, description = "Matching appointments", body = ListAppointmentsRes),
        (status = 400, description = "Invalid filter", body = ErrorRes)
    )
)]
/// Lists appointments, optionally filtered by doctor, patient email,
/// status, and date.
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<ListAppointmentsRes>, ApiError> {
    let doctor_id = match &query.doctor_id {
        Some(raw) => Some(RecordId::parse(raw).map_err(|e| map_err(e.into()))?),
        None => None,
    };
    let filter = AppointmentFilter {
        doctor_id,
        patient_email: query.patient_email,
        status: query.status,
        date: query.date,
    };

    let data = state.appointments.list(&filter);
    Ok(Json(ListAppointmentsRes {
        success: true,
        count: data.len(),
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = AppointmentDetails,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentRes),
        (status = 404, description = "Doctor not found", body = ErrorRes),
        (status = 400, description = "Invalid booking", body = ErrorRes)
    )
)]
/// Books an appointment with a doctor.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(details): Json<AppointmentDetails>,
) -> Result<(StatusCode, Json<AppointmentRes>), ApiError> {
    let appointment = state.appointments.create(details).map_err(map_err)?;
    Ok((
        StatusCode::CREATED,
        Json(AppointmentRes {
            success: true,
            data: appointment,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment record id")),
    responses(
        (status = 200, description = "The appointment", body = AppointmentRes),
        (status = 404, description = "Appointment not found", body = ErrorRes)
    )
)]
/// Fetches one appointment.
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppointmentRes>, ApiError> {
    let id = parse_id(&id)?;
    let appointment = state.appointments.get(&id).map_err(map_err)?;
    Ok(Json(AppointmentRes {
        success: true,
        data: appointment,
    }))
}

#[utoipa::path(
    put,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment record id")),
    request_body = AppointmentChanges,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentRes),
        (status = 404, description = "Appointment not found", body = ErrorRes)
    )
)]
/// Reschedules an appointment or changes its status or notes.
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(changes): Json<AppointmentChanges>,
) -> Result<Json<AppointmentRes>, ApiError> {
    let id = parse_id(&id)?;
    let appointment = state.appointments.modify(&id, changes).map_err(map_err)?;
    Ok(Json(AppointmentRes {
        success: true,
        data: appointment,
    }))
}

#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(("id" = String, Path, description = "Appointment record id")),
    responses(
        (status = 200, description = "Appointment deleted", body = DeletedRes),
        (status = 404, description = "Appointment not found", body = ErrorRes)
    )
)]
/// Deletes an appointment record.
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedRes>, ApiError> {
    let id = parse_id(&id)?;
    state.appointments.delete(&id).map_err(map_err)?;
    Ok(Json(DeletedRes { success: true }))
}
