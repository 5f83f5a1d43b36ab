//! # API REST
//!
//! REST API implementation for the hospital management service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, CORS, error mapping)
//!
//! The router is exposed so the workspace's main binary and the tests can
//! serve the same application.

#![warn(rust_2018_idioms)]

pub mod routes;
pub mod wire;

use axum::routing::{get, patch, post};
use axum::Router;
use hms_core::{
    AppointmentService, CoreConfig, DoctorService, LabService, PatientService, RecentSearches,
    VitalsService,
};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers.
///
/// Holds one instance of each record service plus the process-wide recency
/// list for the medicine finder.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<CoreConfig>,
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentService,
    pub vitals: VitalsService,
    pub labs: LabService,
    pub recent: Arc<Mutex<RecentSearches>>,
}

impl AppState {
    /// Builds the state from startup-resolved configuration.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            patients: PatientService::new(cfg.clone()),
            doctors: DoctorService::new(cfg.clone()),
            appointments: AppointmentService::new(cfg.clone()),
            vitals: VitalsService::new(cfg.clone()),
            labs: LabService::new(cfg.clone()),
            recent: Arc::new(Mutex::new(RecentSearches::new())),
            cfg,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health,
        routes::patients::list_patients,
        routes::patients::create_patient,
        routes::patients::get_patient,
        routes::patients::update_patient,
        routes::patients::delete_patient,
        routes::doctors::list_doctors,
        routes::doctors::create_doctor,
        routes::doctors::get_doctor,
        routes::doctors::update_doctor,
        routes::doctors::delete_doctor,
        routes::appointments::list_appointments,
        routes::appointments::create_appointment,
        routes::appointments::get_appointment,
        routes::appointments::update_appointment,
        routes::appointments::delete_appointment,
        routes::vitals::list_vitals,
        routes::vitals::record_vitals,
        routes::vitals::latest_vitals,
        routes::labs::list_lab_tests,
        routes::labs::list_lab_orders,
        routes::labs::create_lab_order,
        routes::labs::update_lab_order_status,
        routes::medicines::search_medicines,
        routes::medicines::recent_searches,
        routes::medicines::list_symptoms,
    ),
    components(schemas(
        wire::HealthRes,
        wire::ErrorRes,
        wire::DeletedRes,
        wire::ListPatientsRes,
        wire::PatientRes,
        wire::ListDoctorsRes,
        wire::DoctorRes,
        wire::ListAppointmentsRes,
        wire::AppointmentRes,
        wire::ListVitalSignsRes,
        wire::VitalSignsRes,
        wire::ListLabTestsRes,
        wire::ListLabOrdersRes,
        wire::LabOrderRes,
        wire::UpdateLabOrderStatusReq,
        wire::SearchMedicinesReq,
        wire::SearchMedicinesRes,
        wire::RecentSearchesRes,
        wire::ListSymptomsRes,
        wire::SymptomMatch,
        hms_core::Patient,
        hms_core::PatientDetails,
        hms_core::patients::Address,
        hms_core::patients::Gender,
        hms_core::patients::HistoryStatus,
        hms_core::patients::AllergySeverity,
        hms_core::patients::BloodGroup,
        hms_core::patients::Height,
        hms_core::patients::Weight,
        hms_core::patients::HeightUnit,
        hms_core::patients::WeightUnit,
        hms_core::patients::MedicalHistoryEntry,
        hms_core::patients::Allergy,
        hms_core::patients::EmergencyContact,
        hms_core::Doctor,
        hms_core::DoctorDetails,
        hms_core::WorkingHours,
        hms_core::Appointment,
        hms_core::AppointmentDetails,
        hms_core::AppointmentChanges,
        hms_core::AppointmentStatus,
        hms_core::AppointmentKind,
        hms_core::PaymentStatus,
        hms_core::PaymentMethod,
        hms_core::VitalSigns,
        hms_core::NewVitalSigns,
        hms_core::BloodPressure,
        hms_core::LabTest,
        hms_core::LabOrder,
        hms_core::NewLabOrder,
        hms_core::LabOrderStatus,
    ))
)]
pub struct ApiDoc;

/// Builds the application router with every endpoint, the Swagger UI, and
/// permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/patients",
            get(routes::patients::list_patients).post(routes::patients::create_patient),
        )
        .route(
            "/patients/:id",
            get(routes::patients::get_patient)
                .put(routes::patients::update_patient)
                .delete(routes::patients::delete_patient),
        )
        .route(
            "/patients/:id/vitals",
            get(routes::vitals::list_vitals).post(routes::vitals::record_vitals),
        )
        .route("/patients/:id/vitals/latest", get(routes::vitals::latest_vitals))
        .route(
            "/doctors",
            get(routes::doctors::list_doctors).post(routes::doctors::create_doctor),
        )
        .route(
            "/doctors/:id",
            get(routes::doctors::get_doctor)
                .put(routes::doctors::update_doctor)
                .delete(routes::doctors::delete_doctor),
        )
        .route(
            "/appointments",
            get(routes::appointments::list_appointments)
                .post(routes::appointments::create_appointment),
        )
        .route(
            "/appointments/:id",
            get(routes::appointments::get_appointment)
                .put(routes::appointments::update_appointment)
                .delete(routes::appointments::delete_appointment),
        )
        .route("/lab-tests", get(routes::labs::list_lab_tests))
        .route(
            "/lab-orders",
            get(routes::labs::list_lab_orders).post(routes::labs::create_lab_order),
        )
        .route(
            "/lab-orders/:id/status",
            patch(routes::labs::update_lab_order_status),
        )
        .route("/medicines/search", post(routes::medicines::search_medicines))
        .route("/medicines/recent", get(routes::medicines::recent_searches))
        .route("/medicines/symptoms", get(routes::medicines::list_symptoms))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
