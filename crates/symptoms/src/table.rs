//! Static symptom reference table.
//!
//! Each entry maps a canonical lowercase symptom name to its description,
//! recommended medicines, dosage text, and safety warning. The table is
//! loaded once at startup and never mutated afterwards.
//!
//! A built-in table ships inside the crate; deployments can substitute a
//! larger one by pointing the loader at a YAML file of the same shape.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The symptom table compiled into the crate.
const BUILTIN_TABLE_YAML: &str = include_str!("../assets/symptoms.yaml");

/// Errors that can occur while loading a symptom table.
#[derive(Debug, thiserror::Error)]
pub enum SymptomError {
    #[error("failed to read symptom table: {0}")]
    Read(std::io::Error),
    #[error("failed to parse symptom table: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid symptom table: {0}")]
    Invalid(String),
}

/// Result type for symptom table operations.
pub type SymptomResult<T> = std::result::Result<T, SymptomError>;

/// One entry of the symptom reference table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// Canonical lowercase name, unique within the table.
    pub symptom: String,
    /// Human-readable explanation of the condition.
    pub description: String,
    /// Recommended medicines; the first entry is the primary.
    pub medicines: Vec<String>,
    /// Dosing guidance for the primary medicine.
    pub dosage: String,
    /// Safety caveat shown alongside the medicines.
    pub warning: String,
}

impl SymptomRecord {
    /// Returns the primary (first-listed) medicine, if any.
    pub fn primary_medicine(&self) -> Option<&str> {
        self.medicines.first().map(String::as_str)
    }
}

/// The read-only symptom lookup table.
///
/// Iteration order is the order entries appear in the source document; the
/// matcher's output ordering depends on it, so it is preserved as-is.
#[derive(Clone, Debug)]
pub struct SymptomTable {
    records: Vec<SymptomRecord>,
}

impl SymptomTable {
    /// Returns the table compiled into the crate.
    pub fn builtin() -> Self {
        // The embedded asset is validated by tests; a malformed asset is a
        // build defect, not a runtime condition.
        Self::from_yaml_str(BUILTIN_TABLE_YAML).expect("embedded symptom table is valid")
    }

    /// Parses a table from YAML text.
    ///
    /// Symptom names are normalised to trimmed lowercase on load.
    ///
    /// # Errors
    ///
    /// Returns `SymptomError::Parse` for malformed YAML, or
    /// `SymptomError::Invalid` if the table is empty, an entry has a blank
    /// name or no medicines, or two entries share a name.
    pub fn from_yaml_str(input: &str) -> SymptomResult<Self> {
        let mut records: Vec<SymptomRecord> = serde_yaml::from_str(input)?;

        if records.is_empty() {
            return Err(SymptomError::Invalid("table contains no entries".into()));
        }

        for record in &mut records {
            record.symptom = record.symptom.trim().to_lowercase();
            if record.symptom.is_empty() {
                return Err(SymptomError::Invalid(
                    "entry with a blank symptom name".into(),
                ));
            }
            if record.medicines.is_empty() {
                return Err(SymptomError::Invalid(format!(
                    "symptom '{}' lists no medicines",
                    record.symptom
                )));
            }
        }

        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.symptom == record.symptom) {
                return Err(SymptomError::Invalid(format!(
                    "duplicate symptom name '{}'",
                    record.symptom
                )));
            }
        }

        Ok(Self { records })
    }

    /// Loads a table from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns `SymptomError::Read` if the file cannot be read, otherwise the
    /// same errors as [`SymptomTable::from_yaml_str`].
    pub fn load(path: &Path) -> SymptomResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(SymptomError::Read)?;
        Self::from_yaml_str(&contents)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no entries. Always false for tables
    /// constructed through the public loaders.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymptomRecord> {
        self.records.iter()
    }

    /// Looks up a record by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&SymptomRecord> {
        let needle = name.trim().to_lowercase();
        self.records.iter().find(|r| r.symptom == needle)
    }
}

impl<'a> IntoIterator for &'a SymptomTable {
    type Item = &'a SymptomRecord;
    type IntoIter = std::slice::Iter<'a, SymptomRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_table_parses_and_is_well_formed() {
        let table = SymptomTable::builtin();
        assert!(table.len() >= 20, "expected tens of entries");
        for record in table.iter() {
            assert_eq!(record.symptom, record.symptom.to_lowercase());
            assert!(!record.medicines.is_empty());
            assert!(!record.description.is_empty());
        }
    }

    #[test]
    fn get_is_case_insensitive() {
        let table = SymptomTable::builtin();
        let record = table.get("FeVeR").expect("fever is in the builtin table");
        assert_eq!(record.symptom, "fever");
        assert_eq!(record.primary_medicine(), Some("Paracetamol"));
    }

    #[test]
    fn names_are_normalised_to_lowercase_on_load() {
        let yaml = r#"
- symptom: "  Fever "
  description: "d"
  medicines: ["Paracetamol"]
  dosage: "x"
  warning: "w"
"#;
        let table = SymptomTable::from_yaml_str(yaml).expect("valid table");
        assert!(table.get("fever").is_some());
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = r#"
- symptom: "fever"
  description: "d"
  medicines: ["Paracetamol"]
  dosage: "x"
  warning: "w"
- symptom: "FEVER"
  description: "d2"
  medicines: ["Ibuprofen"]
  dosage: "y"
  warning: "w2"
"#;
        let err = SymptomTable::from_yaml_str(yaml).expect_err("duplicates rejected");
        match err {
            SymptomError::Invalid(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_table_and_missing_medicines() {
        assert!(matches!(
            SymptomTable::from_yaml_str("[]"),
            Err(SymptomError::Invalid(_))
        ));

        let yaml = r#"
- symptom: "fever"
  description: "d"
  medicines: []
  dosage: "x"
  warning: "w"
"#;
        assert!(matches!(
            SymptomTable::from_yaml_str(yaml),
            Err(SymptomError::Invalid(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"
- symptom: "fever"
  description: "d"
  medicines: ["Paracetamol"]
  dosage: "x"
  warning: "w"
"#
        )
        .expect("write yaml");

        let table = SymptomTable::load(file.path()).expect("load from file");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn load_surfaces_read_errors() {
        let err = SymptomTable::load(Path::new("/nonexistent/symptoms.yaml"))
            .expect_err("missing file");
        assert!(matches!(err, SymptomError::Read(_)));
    }
}
