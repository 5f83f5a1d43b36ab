//! Canonical record identifier implementation.

use crate::{IdError, IdResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// HMS's canonical record identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed, the contained UUID is guaranteed to be in canonical form,
/// so sharded path derivation and string rendering are consistent everywhere.
///
/// # Construction
/// - [`RecordId::new`] allocates a fresh identifier for a new record.
/// - [`RecordId::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`RecordId::parse`] returns [`IdError::InvalidInput`] if the input is not
/// already canonical. Other common UUID forms (hyphenated, uppercase) are
/// **not** normalised — callers must provide the canonical representation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordId {
    /// Generates a new identifier in canonical form (RFC 4122 version 4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not 32 lowercase hex
    /// characters.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_canonical(input) {
            // is_canonical guarantees valid hex, so parse_str cannot fail
            let uuid = Uuid::parse_str(input).expect("is_canonical guarantees valid UUID");
            return Ok(Self(uuid));
        }
        Err(IdError::InvalidInput(format!(
            "record id must be 32 lowercase hex characters without hyphens, got: '{}'",
            input
        )))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// Purely syntactic: exactly 32 bytes, lowercase hex only.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/` where `s1`/`s2` are the first two
    /// hex-character pairs of this identifier.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.0.simple().to_string();
        let s1 = &canonical[0..2];
        let s2 = &canonical[2..4];
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl fmt::Display for RecordId {
    /// Formats the identifier in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = IdError;

    /// Equivalent to [`RecordId::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.simple())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_canonical() {
        let id = RecordId::new();
        let rendered = id.to_string();
        assert!(RecordId::is_canonical(&rendered));
        assert_eq!(rendered.len(), 32);
    }

    #[test]
    fn parse_accepts_canonical_form() {
        let input = "550e8400e29b41d4a716446655440000";
        let id = RecordId::parse(input).expect("canonical input");
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn parse_rejects_non_canonical_forms() {
        for input in [
            "550e8400-e29b-41d4-a716-446655440000", // hyphenated
            "550E8400E29B41D4A716446655440000",     // uppercase
            "550e8400e29b41d4a71644665544000",      // too short
            "550e8400e29b41d4a7164466554400000",    // too long
            "g50e8400e29b41d4a716446655440000",     // non-hex
            "",
        ] {
            assert!(RecordId::parse(input).is_err(), "should reject '{input}'");
        }
    }

    #[test]
    fn sharded_dir_uses_first_two_pairs() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").expect("canonical");
        let dir = id.sharded_dir(Path::new("hms_data/patients"));
        assert_eq!(
            dir,
            PathBuf::from("hms_data/patients/55/0e/550e8400e29b41d4a716446655440000")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_canonical_string() {
        let id = RecordId::parse("550e8400e29b41d4a716446655440000").expect("canonical");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"550e8400e29b41d4a716446655440000\"");
        let back: RecordId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_non_canonical_string() {
        let err = serde_json::from_str::<RecordId>("\"550e8400-e29b-41d4-a716-446655440000\"");
        assert!(err.is_err());
    }
}
