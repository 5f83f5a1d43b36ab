//! # HMS Core
//!
//! Core business logic for the hospital management service.
//!
//! This crate contains pure data operations and file/folder management:
//! - Record services (patients, doctors, appointments, vital signs, lab
//!   orders) over sharded JSON document storage
//! - Startup-resolved configuration, including the static reference data
//!   (symptom table, lab test catalog)
//!
//! **No API concerns**: HTTP servers, wire envelopes, and OpenAPI
//! documentation belong in `api-rest`.

pub mod appointments;
pub mod config;
pub mod doctors;
pub mod error;
pub mod labs;
pub mod patients;
pub mod store;
pub mod vitals;

pub use appointments::{
    Appointment, AppointmentChanges, AppointmentDetails, AppointmentFilter, AppointmentKind,
    AppointmentService, AppointmentStatus, PaymentMethod, PaymentStatus,
};
pub use config::{CoreConfig, DEFAULT_DATA_DIR};
pub use doctors::{Doctor, DoctorDetails, DoctorService, WorkingHours};
pub use error::{RecordError, RecordResult};
pub use labs::{LabOrder, LabOrderStatus, LabService, LabTest, NewLabOrder};
pub use patients::{Patient, PatientDetails, PatientService};
pub use store::DocStore;
pub use vitals::{BloodPressure, NewVitalSigns, VitalSigns, VitalsService};

// Re-exported so API and CLI crates can use the id and matcher types without
// depending on the leaf crates directly.
pub use hms_id::RecordId;
pub use hms_symptoms::{match_symptoms, RecentSearches, SymptomRecord, SymptomTable};
