//! # HMS Types
//!
//! Validated text primitives shared across the HMS crates.
//!
//! Record models use these wrappers at their required-field seams so that an
//! invalid value cannot be constructed or deserialized into the domain. The
//! wire layer surfaces the resulting errors as bad-request responses.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input was not a plausible email address
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
}

/// A string type that guarantees non-blank content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is trimmed of leading and trailing
/// whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonBlankText(String);

impl NonBlankText {
    /// Creates a new `NonBlankText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonBlankText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonBlankText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonBlankText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonBlankText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonBlankText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A shape-checked email address.
///
/// The check is deliberately light: exactly one `@`, a non-empty local part,
/// a domain containing at least one dot, and no whitespace. Full RFC 5322
/// validation is out of scope; delivery problems surface operationally, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a new `EmailAddress` from the given input.
    ///
    /// The input is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input, or
    /// `TextError::InvalidEmail` if the trimmed input does not look like an
    /// email address.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if !Self::is_plausible(trimmed) {
            return Err(TextError::InvalidEmail(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    fn is_plausible(s: &str) -> bool {
        if s.chars().any(char::is_whitespace) {
            return false;
        }
        let mut parts = s.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = match parts.next() {
            Some(d) => d,
            None => return false,
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        // Domain must have a dot-separated label structure with no empty labels.
        !domain.is_empty()
            && domain.contains('.')
            && domain.split('.').all(|label| !label.is_empty())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_text_trims_input() {
        let text = NonBlankText::new("  Aisha  ").expect("valid text");
        assert_eq!(text.as_str(), "Aisha");
    }

    #[test]
    fn non_blank_text_rejects_whitespace_only() {
        assert!(matches!(NonBlankText::new("   \t"), Err(TextError::Empty)));
        assert!(matches!(NonBlankText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn non_blank_text_deserializes_through_validation() {
        let err = serde_json::from_str::<NonBlankText>("\"  \"").expect_err("blank rejected");
        assert!(err.to_string().contains("empty"));

        let ok: NonBlankText = serde_json::from_str("\"Rivera\"").expect("valid");
        assert_eq!(ok.as_str(), "Rivera");
    }

    #[test]
    fn email_accepts_common_shapes() {
        for input in ["a@b.co", "first.last@clinic.example.org", "x+tag@mail.example"] {
            assert!(EmailAddress::new(input).is_ok(), "should accept {input}");
        }
    }

    #[test]
    fn email_rejects_malformed_input() {
        for input in [
            "plainaddress",
            "@no-local.example",
            "two@@ats.example",
            "spaces in@mail.example",
            "no-dot@domain",
            "trailing-dot@domain.",
        ] {
            assert!(EmailAddress::new(input).is_err(), "should reject {input}");
        }
    }

    #[test]
    fn email_round_trips_serde() {
        let email = EmailAddress::new("ward@clinic.example.org").expect("valid");
        let json = serde_json::to_string(&email).expect("serialize");
        assert_eq!(json, "\"ward@clinic.example.org\"");
        let back: EmailAddress = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, email);
    }
}
