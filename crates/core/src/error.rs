//! Error taxonomy for record operations.

/// Errors that can occur in record services and the document store.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid record id: {0}")]
    Id(#[from] hms_id::IdError),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write record file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read record file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to delete record: {0}")]
    FileDelete(std::io::Error),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to parse lab test catalog: {0}")]
    CatalogParse(serde_yaml::Error),
    #[error("failed to load symptom table: {0}")]
    SymptomTable(#[from] hms_symptoms::SymptomError),
}

impl RecordError {
    /// Convenience constructor for not-found conditions.
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result type for record operations.
pub type RecordResult<T> = std::result::Result<T, RecordError>;
