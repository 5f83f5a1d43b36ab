//! Vital signs logging.
//!
//! Each reading belongs to one patient. Measurements are individually
//! optional so partial observations (a lone temperature check, a blood
//! pressure cuff reading) can still be recorded.

use crate::config::CoreConfig;
use crate::error::{RecordError, RecordResult};
use crate::store::DocStore;
use chrono::{DateTime, Utc};
use hms_id::RecordId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const COLLECTION: &str = "vitals";

/// Blood pressure in mmHg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BloodPressure {
    #[serde(default)]
    pub systolic: Option<u16>,
    #[serde(default)]
    pub diastolic: Option<u16>,
}

/// A vital signs reading as supplied by a recording request.
///
/// `recorded_at` defaults to the time of recording when absent, allowing
/// back-dated entries from paper notes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct NewVitalSigns {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub blood_pressure: Option<BloodPressure>,
    #[serde(default)]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub respiratory_rate: Option<u16>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recorded_by: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// A stored vital signs record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VitalSigns {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[schema(value_type = String)]
    pub patient_id: RecordId,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub blood_pressure: Option<BloodPressure>,
    #[serde(default)]
    pub heart_rate: Option<u16>,
    #[serde(default)]
    pub respiratory_rate: Option<u16>,
    #[serde(default)]
    pub oxygen_saturation: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    #[serde(default)]
    pub recorded_by: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Vital signs operations over the document store.
#[derive(Clone, Debug)]
pub struct VitalsService {
    store: DocStore,
}

impl VitalsService {
    /// Creates a new service bound to the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocStore::new(cfg.data_dir(), COLLECTION),
        }
    }

    /// Records a reading for `patient_id`.
    pub fn record(
        &self,
        patient_id: RecordId,
        reading: NewVitalSigns,
    ) -> RecordResult<VitalSigns> {
        let vitals = VitalSigns {
            id: RecordId::new(),
            patient_id,
            temperature: reading.temperature,
            blood_pressure: reading.blood_pressure,
            heart_rate: reading.heart_rate,
            respiratory_rate: reading.respiratory_rate,
            oxygen_saturation: reading.oxygen_saturation,
            recorded_at: reading.recorded_at.unwrap_or_else(Utc::now),
            recorded_by: reading.recorded_by,
            notes: reading.notes,
        };
        self.store.write(&vitals.id, &vitals)?;
        tracing::info!("recorded vitals {} for patient {}", vitals.id, vitals.patient_id);
        Ok(vitals)
    }

    /// Lists a patient's readings, newest first.
    pub fn list_for_patient(&self, patient_id: &RecordId) -> Vec<VitalSigns> {
        let mut readings: Vec<VitalSigns> = self.store.list();
        readings.retain(|v| v.patient_id == *patient_id);
        readings.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        readings
    }

    /// Returns the most recent reading for a patient.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the patient has no readings.
    pub fn latest(&self, patient_id: &RecordId) -> RecordResult<VitalSigns> {
        self.list_for_patient(patient_id)
            .into_iter()
            .next()
            .ok_or_else(|| RecordError::not_found("vital signs for patient", patient_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> VitalsService {
        let cfg = CoreConfig::new(temp.path().to_path_buf(), None).expect("config");
        VitalsService::new(Arc::new(cfg))
    }

    fn reading_at(hour: u32) -> NewVitalSigns {
        NewVitalSigns {
            temperature: Some(37.2),
            blood_pressure: Some(BloodPressure {
                systolic: Some(118),
                diastolic: Some(76),
            }),
            heart_rate: Some(72),
            respiratory_rate: Some(16),
            oxygen_saturation: Some(98.0),
            recorded_at: Some(Utc.with_ymd_and_hms(2026, 8, 7, hour, 0, 0).unwrap()),
            recorded_by: Some("Nurse Adeyemi".into()),
            notes: String::new(),
        }
    }

    #[test]
    fn listing_is_newest_first() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let patient = RecordId::new();

        service.record(patient.clone(), reading_at(8)).expect("r1");
        service.record(patient.clone(), reading_at(14)).expect("r2");
        service.record(patient.clone(), reading_at(11)).expect("r3");

        let readings = service.list_for_patient(&patient);
        let hours: Vec<u32> = readings
            .iter()
            .map(|v| {
                use chrono::Timelike;
                v.recorded_at.hour()
            })
            .collect();
        assert_eq!(hours, [14, 11, 8]);
    }

    #[test]
    fn latest_is_the_head_of_the_listing() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let patient = RecordId::new();

        service.record(patient.clone(), reading_at(8)).expect("r1");
        service.record(patient.clone(), reading_at(14)).expect("r2");

        let latest = service.latest(&patient).expect("latest");
        assert_eq!(latest.id, service.list_for_patient(&patient)[0].id);
    }

    #[test]
    fn readings_are_scoped_to_their_patient() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let alpha = RecordId::new();
        let beta = RecordId::new();

        service.record(alpha.clone(), reading_at(9)).expect("r1");
        service.record(beta.clone(), reading_at(10)).expect("r2");

        assert_eq!(service.list_for_patient(&alpha).len(), 1);
        assert_eq!(service.list_for_patient(&beta).len(), 1);
    }

    #[test]
    fn latest_without_readings_is_not_found() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(matches!(
            service.latest(&RecordId::new()),
            Err(RecordError::NotFound { .. })
        ));
    }

    #[test]
    fn recorded_at_defaults_to_now() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let before = Utc::now();
        let vitals = service
            .record(RecordId::new(), NewVitalSigns::default())
            .expect("record");
        assert!(vitals.recorded_at >= before);
    }
}
