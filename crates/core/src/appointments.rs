//! Appointment records.
//!
//! An appointment links a patient to a doctor at a date and time slot. The
//! doctor's name and specialization are denormalised into the record at
//! booking time, so listings render without a join; the doctor must exist
//! when the appointment is created.

use crate::config::CoreConfig;
use crate::doctors::DoctorService;
use crate::error::{RecordError, RecordResult};
use crate::store::DocStore;
use chrono::{DateTime, NaiveDate, Utc};
use hms_id::RecordId;
use hms_types::{EmailAddress, NonBlankText};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const COLLECTION: &str = "appointments";

/// Lifecycle status of an appointment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

/// Kind of visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentKind {
    #[default]
    Consultation,
    FollowUp,
    Emergency,
    RoutineCheckup,
}

/// Payment state for the visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Refunded,
    InsuranceClaim,
}

/// How the visit is paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    Insurance,
    Online,
}

/// Appointment details as supplied by a booking request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDetails {
    /// Patient record id, when the patient is registered.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub patient_id: Option<RecordId>,
    #[schema(value_type = String)]
    pub patient_name: NonBlankText,
    #[schema(value_type = String)]
    pub patient_email: EmailAddress,
    #[serde(default)]
    pub patient_phone: Option<String>,
    #[schema(value_type = String)]
    pub doctor_id: RecordId,
    pub appointment_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub kind: AppointmentKind,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A stored appointment record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[serde(flatten)]
    pub details: AppointmentDetails,
    /// Denormalised from the doctor record at booking time.
    pub doctor_name: String,
    /// Denormalised from the doctor record at booking time.
    pub doctor_specialization: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied to an existing appointment: rescheduling, status
/// transitions, and note edits. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct AppointmentChanges {
    #[serde(default)]
    pub appointment_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Listing filters; all criteria are conjunctive.
#[derive(Clone, Debug, Default)]
pub struct AppointmentFilter {
    pub doctor_id: Option<RecordId>,
    pub patient_email: Option<String>,
    pub status: Option<AppointmentStatus>,
    /// Matches appointments on this calendar date.
    pub date: Option<NaiveDate>,
}

impl AppointmentFilter {
    fn matches(&self, appointment: &Appointment) -> bool {
        if let Some(doctor_id) = &self.doctor_id {
            if appointment.details.doctor_id != *doctor_id {
                return false;
            }
        }
        if let Some(email) = &self.patient_email {
            if appointment.details.patient_email.as_str() != email {
                return false;
            }
        }
        if let Some(status) = self.status {
            if appointment.status != status {
                return false;
            }
        }
        if let Some(date) = self.date {
            if appointment.details.appointment_date != date {
                return false;
            }
        }
        true
    }
}

/// Appointment operations over the document store.
#[derive(Clone, Debug)]
pub struct AppointmentService {
    store: DocStore,
    doctors: DoctorService,
}

impl AppointmentService {
    /// Creates a new service bound to the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocStore::new(cfg.data_dir(), COLLECTION),
            doctors: DoctorService::new(cfg),
        }
    }

    /// Books an appointment.
    ///
    /// Looks up the referenced doctor and copies their name and
    /// specialization into the record. The new appointment starts in
    /// `Scheduled` status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the doctor does not exist.
    pub fn create(&self, details: AppointmentDetails) -> RecordResult<Appointment> {
        let doctor = self.doctors.get(&details.doctor_id)?;

        let appointment = Appointment {
            id: RecordId::new(),
            doctor_name: doctor.details.name.to_string(),
            doctor_specialization: doctor.details.specialization.to_string(),
            status: AppointmentStatus::Scheduled,
            details,
            created_at: Utc::now(),
        };
        self.store.write(&appointment.id, &appointment)?;
        tracing::info!(
            "booked appointment {} with doctor {}",
            appointment.id,
            appointment.details.doctor_id
        );
        Ok(appointment)
    }

    /// Fetches one appointment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn get(&self, id: &RecordId) -> RecordResult<Appointment> {
        self.store
            .read(id)?
            .ok_or_else(|| RecordError::not_found("appointment", id))
    }

    /// Lists appointments matching `filter`.
    pub fn list(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self.store.list();
        appointments.retain(|a| filter.matches(a));
        appointments
    }

    /// Applies a partial update (reschedule, status change, notes).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn modify(&self, id: &RecordId, changes: AppointmentChanges) -> RecordResult<Appointment> {
        let mut appointment = self.get(id)?;

        if let Some(date) = changes.appointment_date {
            appointment.details.appointment_date = date;
        }
        if let Some(start) = changes.start_time {
            appointment.details.start_time = start;
        }
        if let Some(end) = changes.end_time {
            appointment.details.end_time = end;
        }
        if let Some(status) = changes.status {
            appointment.status = status;
        }
        if let Some(notes) = changes.notes {
            appointment.details.notes = notes;
        }

        self.store.write(id, &appointment)?;
        Ok(appointment)
    }

    /// Deletes an appointment record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn delete(&self, id: &RecordId) -> RecordResult<()> {
        if self.store.remove(id)? {
            Ok(())
        } else {
            Err(RecordError::not_found("appointment", id))
        }
    }
}
