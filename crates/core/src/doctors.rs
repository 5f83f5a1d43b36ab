//! Doctor records.

use crate::config::CoreConfig;
use crate::error::{RecordError, RecordResult};
use crate::store::DocStore;
use chrono::{DateTime, Utc};
use hms_id::RecordId;
use hms_types::{EmailAddress, NonBlankText};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const COLLECTION: &str = "doctors";

/// Weekly working hours for a doctor.
///
/// Times are kept as display strings ("09:00") and days as names ("Mon");
/// scheduling does not compute with them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkingHours {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub days: Vec<String>,
}

/// Doctor details as supplied by create and update requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorDetails {
    #[schema(value_type = String)]
    pub name: NonBlankText,
    #[schema(value_type = String)]
    pub specialization: NonBlankText,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[schema(value_type = String)]
    pub email: EmailAddress,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub working_hours: Option<WorkingHours>,
}

/// A stored doctor record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[serde(flatten)]
    pub details: DoctorDetails,
    pub created_at: DateTime<Utc>,
}

/// Doctor record operations over the document store.
#[derive(Clone, Debug)]
pub struct DoctorService {
    store: DocStore,
}

impl DoctorService {
    /// Creates a new service bound to the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocStore::new(cfg.data_dir(), COLLECTION),
        }
    }

    /// Adds a new doctor.
    pub fn create(&self, details: DoctorDetails) -> RecordResult<Doctor> {
        let doctor = Doctor {
            id: RecordId::new(),
            details,
            created_at: Utc::now(),
        };
        self.store.write(&doctor.id, &doctor)?;
        tracing::info!("created doctor {}", doctor.id);
        Ok(doctor)
    }

    /// Fetches one doctor.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn get(&self, id: &RecordId) -> RecordResult<Doctor> {
        self.store
            .read(id)?
            .ok_or_else(|| RecordError::not_found("doctor", id))
    }

    /// Lists all doctors.
    pub fn list(&self) -> Vec<Doctor> {
        self.store.list()
    }

    /// Replaces a doctor's details.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn update(&self, id: &RecordId, details: DoctorDetails) -> RecordResult<Doctor> {
        let existing = self.get(id)?;
        let updated = Doctor {
            id: existing.id,
            details,
            created_at: existing.created_at,
        };
        self.store.write(id, &updated)?;
        Ok(updated)
    }

    /// Deletes a doctor record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn delete(&self, id: &RecordId) -> RecordResult<()> {
        if self.store.remove(id)? {
            Ok(())
        } else {
            Err(RecordError::not_found("doctor", id))
        }
    }
}
