//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! record services. The intent is to avoid reading process-wide environment
//! variables during request handling, which can lead to inconsistent
//! behaviour in multi-threaded runtimes and test harnesses.
//!
//! The static reference assets (symptom table, lab test catalog) are loaded
//! here as well, so services see fully-validated read-only data.

use crate::error::{RecordError, RecordResult};
use crate::labs::LabTest;
use hms_symptoms::SymptomTable;
use std::path::{Path, PathBuf};

/// Default directory for record storage, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "hms_data";

/// The lab test catalog compiled into the crate.
const LAB_TEST_CATALOG_YAML: &str = include_str!("../assets/lab_tests.yaml");

/// Core configuration resolved at startup.
#[derive(Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    symptom_table: SymptomTable,
    lab_tests: Vec<LabTest>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The symptom table is loaded from `symptom_table_override` when given,
    /// otherwise the built-in table ships. The lab test catalog is always the
    /// embedded one.
    ///
    /// # Errors
    ///
    /// Returns an error if an override table cannot be read or is invalid,
    /// or if the embedded lab catalog fails to parse.
    pub fn new(data_dir: PathBuf, symptom_table_override: Option<PathBuf>) -> RecordResult<Self> {
        let symptom_table = match symptom_table_override {
            Some(path) => SymptomTable::load(&path)?,
            None => SymptomTable::builtin(),
        };

        let lab_tests: Vec<LabTest> =
            serde_yaml::from_str(LAB_TEST_CATALOG_YAML).map_err(RecordError::CatalogParse)?;
        if lab_tests.is_empty() {
            return Err(RecordError::InvalidInput(
                "lab test catalog contains no entries".into(),
            ));
        }

        Ok(Self {
            data_dir,
            symptom_table,
            lab_tests,
        })
    }

    /// Root directory for record storage.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The read-only symptom reference table.
    pub fn symptom_table(&self) -> &SymptomTable {
        &self.symptom_table
    }

    /// The read-only lab test catalog, in catalog order.
    pub fn lab_tests(&self) -> &[LabTest] {
        &self.lab_tests
    }

    /// Looks up a catalog test by its id.
    pub fn lab_test(&self, test_id: &str) -> Option<&LabTest> {
        self.lab_tests.iter().find(|t| t.id == test_id)
    }
}
