//! Record identifiers and sharded-path utilities.
//!
//! HMS stores every record under a sharded directory derived from its
//! identifier.
//!
//! To keep path derivation deterministic and consistent across the codebase,
//! HMS uses a *canonical* identifier representation: **32 lowercase
//! hexadecimal characters** (no hyphens) — the same value produced by
//! `Uuid::new_v4().simple().to_string()`.
//!
//! Canonical form is *required* for externally supplied identifiers (CLI or
//! API inputs). Use [`RecordId::parse`] to validate an input string;
//! non-canonical values (uppercase, hyphenated, wrong length, non-hex) are
//! rejected.
//!
//! ## Sharded directory layout
//! For a canonical id `u`, data lives under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `hms_data/patients/55/0e/550e8400e29b41d4a716446655440000/`
//!
//! The two-level fan-out keeps any single directory small even with very
//! large record counts.

mod record_id;

pub use record_id::{RecordId, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid record id: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type IdResult<T> = Result<T, IdError>;
