//! HTTP handlers, grouped by resource.

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod labs;
pub mod medicines;
pub mod patients;
pub mod vitals;

use crate::wire::ErrorRes;
use axum::http::StatusCode;
use axum::response::Json;
use hms_core::{RecordError, RecordId};

/// Failure responses: a status code plus the error envelope.
pub(crate) type ApiError = (StatusCode, Json<ErrorRes>);

/// Maps a record error onto an HTTP failure response.
///
/// Not-found maps to 404 and bad input to 400, with the error text in the
/// envelope. Everything else is a 500 whose detail is logged rather than
/// leaked to the client.
pub(crate) fn map_err(err: RecordError) -> ApiError {
    let status = match &err {
        RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
        RecordError::InvalidInput(_) | RecordError::Id(_) => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!("record operation failed: {:?}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Server Error".to_string()
    } else {
        err.to_string()
    };
    (
        status,
        Json(ErrorRes {
            success: false,
            message,
        }),
    )
}

/// Parses a path segment as a canonical record id, or yields a 400.
pub(crate) fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::parse(raw).map_err(|e| map_err(e.into()))
}
