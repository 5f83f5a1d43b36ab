//! Patient records.
//!
//! The patient model mirrors the registration form: demographics, contact
//! details, medical history, allergies, and insurance-adjacent extras like
//! blood group and emergency contact. Required fields use the validated text
//! types so a blank name or malformed email cannot enter the store.

use crate::config::CoreConfig;
use crate::error::{RecordError, RecordResult};
use crate::store::DocStore;
use chrono::{DateTime, NaiveDate, Utc};
use hms_id::RecordId;
use hms_types::{EmailAddress, NonBlankText};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const COLLECTION: &str = "patients";

/// Patient gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Status of a medical history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    #[default]
    Active,
    Managed,
    Resolved,
}

/// Severity of an allergy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllergySeverity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

/// ABO/Rh blood group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

/// Unit for a height measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Ft,
}

/// Unit for a weight measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

/// Height with its unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Height {
    pub value: f64,
    #[serde(default)]
    pub unit: HeightUnit,
}

/// Weight with its unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Weight {
    pub value: f64,
    #[serde(default)]
    pub unit: WeightUnit,
}

/// Postal address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// One diagnosed condition in a patient's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MedicalHistoryEntry {
    #[schema(value_type = String)]
    pub condition: NonBlankText,
    #[serde(default)]
    pub diagnosed_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: HistoryStatus,
}

/// One known allergy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Allergy {
    #[schema(value_type = String)]
    pub allergen: NonBlankText,
    #[serde(default)]
    pub severity: AllergySeverity,
    #[serde(default)]
    pub reaction: Option<String>,
}

/// Emergency contact person.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Patient details as supplied by registration and update requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDetails {
    #[schema(value_type = String)]
    pub first_name: NonBlankText,
    #[schema(value_type = String)]
    pub last_name: NonBlankText,
    #[schema(value_type = String)]
    pub email: EmailAddress,
    #[schema(value_type = String)]
    pub phone: NonBlankText,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    #[serde(default)]
    pub height: Option<Height>,
    #[serde(default)]
    pub weight: Option<Weight>,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
}

/// A stored patient record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[serde(flatten)]
    pub details: PatientDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Patient record operations over the document store.
#[derive(Clone, Debug)]
pub struct PatientService {
    store: DocStore,
}

impl PatientService {
    /// Creates a new service bound to the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocStore::new(cfg.data_dir(), COLLECTION),
        }
    }

    /// Registers a new patient, stamping `created_at`/`updated_at`.
    pub fn create(&self, details: PatientDetails) -> RecordResult<Patient> {
        let now = Utc::now();
        let patient = Patient {
            id: RecordId::new(),
            details,
            created_at: now,
            updated_at: now,
        };
        self.store.write(&patient.id, &patient)?;
        tracing::info!("created patient {}", patient.id);
        Ok(patient)
    }

    /// Fetches one patient.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn get(&self, id: &RecordId) -> RecordResult<Patient> {
        self.store
            .read(id)?
            .ok_or_else(|| RecordError::not_found("patient", id))
    }

    /// Lists all patients.
    pub fn list(&self) -> Vec<Patient> {
        self.store.list()
    }

    /// Replaces a patient's details, preserving `created_at` and refreshing
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn update(&self, id: &RecordId, details: PatientDetails) -> RecordResult<Patient> {
        let existing = self.get(id)?;
        let updated = Patient {
            id: existing.id,
            details,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
        self.store.write(id, &updated)?;
        Ok(updated)
    }

    /// Deletes a patient record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn delete(&self, id: &RecordId) -> RecordResult<()> {
        if self.store.remove(id)? {
            Ok(())
        } else {
            Err(RecordError::not_found("patient", id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    pub(crate) fn sample_details(first: &str, email: &str) -> PatientDetails {
        PatientDetails {
            first_name: NonBlankText::new(first).unwrap(),
            last_name: NonBlankText::new("Okafor").unwrap(),
            email: EmailAddress::new(email).unwrap(),
            phone: NonBlankText::new("555-0134").unwrap(),
            address: Some(Address {
                city: Some("Lagos".into()),
                country: Some("NG".into()),
                ..Address::default()
            }),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 4, 12),
            gender: Some(Gender::Female),
            medical_history: vec![MedicalHistoryEntry {
                condition: NonBlankText::new("asthma").unwrap(),
                diagnosed_date: NaiveDate::from_ymd_opt(2015, 6, 1),
                notes: None,
                status: HistoryStatus::Managed,
            }],
            allergies: vec![Allergy {
                allergen: NonBlankText::new("penicillin").unwrap(),
                severity: AllergySeverity::Severe,
                reaction: Some("rash".into()),
            }],
            blood_group: Some(BloodGroup::OPositive),
            height: Some(Height {
                value: 167.0,
                unit: HeightUnit::Cm,
            }),
            weight: Some(Weight {
                value: 61.5,
                unit: WeightUnit::Kg,
            }),
            emergency_contact: None,
        }
    }

    fn service(temp: &TempDir) -> PatientService {
        let cfg = CoreConfig::new(temp.path().to_path_buf(), None).expect("config");
        PatientService::new(Arc::new(cfg))
    }

    #[test]
    fn create_get_round_trips() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let created = service
            .create(sample_details("Aisha", "aisha@mail.example.org"))
            .expect("create");
        let fetched = service.get(&created.id).expect("get");
        assert_eq!(fetched, created);
        assert_eq!(fetched.details.blood_group, Some(BloodGroup::OPositive));
    }

    #[test]
    fn list_returns_every_patient() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service
            .create(sample_details("Aisha", "aisha@mail.example.org"))
            .expect("create");
        service
            .create(sample_details("Binta", "binta@mail.example.org"))
            .expect("create");

        let mut names: Vec<String> = service
            .list()
            .into_iter()
            .map(|p| p.details.first_name.to_string())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["Aisha", "Binta"]);
    }

    #[test]
    fn update_preserves_created_at_and_refreshes_updated_at() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let created = service
            .create(sample_details("Aisha", "aisha@mail.example.org"))
            .expect("create");
        let updated = service
            .update(&created.id, sample_details("Aisha", "new@mail.example.org"))
            .expect("update");

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.details.email.as_str(), "new@mail.example.org");
    }

    #[test]
    fn get_update_delete_missing_patient_is_not_found() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let id = RecordId::new();

        assert!(matches!(
            service.get(&id),
            Err(RecordError::NotFound { kind: "patient", .. })
        ));
        assert!(matches!(
            service.update(&id, sample_details("A", "a@b.example.co")),
            Err(RecordError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(&id),
            Err(RecordError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_removes_the_record() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let created = service
            .create(sample_details("Aisha", "aisha@mail.example.org"))
            .expect("create");
        service.delete(&created.id).expect("delete");
        assert!(service.get(&created.id).is_err());
        assert!(service.list().is_empty());
    }

    #[test]
    fn blood_group_serializes_in_clinical_notation() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
        let back: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(back, BloodGroup::OPositive);
    }
}
