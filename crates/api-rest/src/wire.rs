//! Wire request and response types.
//!
//! Successful responses use the `{success, count?, data}` envelope; failures
//! use `{success: false, message}`. Envelope types are concrete per
//! operation so the OpenAPI document stays explicit.

use hms_core::{
    Appointment, Doctor, LabOrder, LabOrderStatus, LabTest, Patient, SymptomRecord, VitalSigns,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub message: String,
}

/// Error envelope for every failure response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorRes {
    pub success: bool,
    pub message: String,
}

/// Acknowledgement for delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedRes {
    pub success: bool,
}

// ============================================================================
// Patients
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ListPatientsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Patient>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatientRes {
    pub success: bool,
    pub data: Patient,
}

// ============================================================================
// Doctors
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ListDoctorsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Doctor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DoctorRes {
    pub success: bool,
    pub data: Doctor,
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ListAppointmentsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Appointment>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentRes {
    pub success: bool,
    pub data: Appointment,
}

// ============================================================================
// Vital signs
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ListVitalSignsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<VitalSigns>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VitalSignsRes {
    pub success: bool,
    pub data: VitalSigns,
}

// ============================================================================
// Labs
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ListLabTestsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LabTest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListLabOrdersRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<LabOrder>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LabOrderRes {
    pub success: bool,
    pub data: LabOrder,
}

/// Body of the lab order status update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLabOrderStatusReq {
    pub status: LabOrderStatus,
}

// ============================================================================
// Medicine finder
// ============================================================================

/// Free-text symptom search request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchMedicinesReq {
    /// The user's description of their complaint.
    pub text: String,
}

/// Wire model of one symptom table entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SymptomMatch {
    pub symptom: String,
    pub description: String,
    pub medicines: Vec<String>,
    pub dosage: String,
    pub warning: String,
}

impl From<&SymptomRecord> for SymptomMatch {
    fn from(record: &SymptomRecord) -> Self {
        Self {
            symptom: record.symptom.clone(),
            description: record.description.clone(),
            medicines: record.medicines.clone(),
            dosage: record.dosage.clone(),
            warning: record.warning.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchMedicinesRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SymptomMatch>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentSearchesRes {
    pub success: bool,
    pub data: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListSymptomsRes {
    pub success: bool,
    pub count: usize,
    pub data: Vec<SymptomMatch>,
}
