//! Participant Names
//!
//! Validated identifiers for the two sides of a match.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::RegistryError;

/// Name of a participant.
///
/// Never empty or whitespace-only. The stored value is kept exactly as given,
/// so `"Spain"` and `" Spain"` are different participants.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Validate and wrap a name.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        Self::try_from(raw.to_string())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(RegistryError::InvalidArgument(
                "participant name cannot be empty or blank".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl From<ParticipantName> for String {
    fn from(name: ParticipantName) -> Self {
        name.0
    }
}

impl Borrow<str> for ParticipantName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let name = ParticipantName::parse("Mexico").unwrap();
        assert_eq!(name.as_str(), "Mexico");
        assert_eq!(name.to_string(), "Mexico");
    }

    #[test]
    fn test_parse_keeps_surrounding_whitespace() {
        let name = ParticipantName::parse(" Mexico ").unwrap();
        assert_eq!(name.as_str(), " Mexico ");
        assert_ne!(name, ParticipantName::parse("Mexico").unwrap());
    }

    #[test]
    fn test_parse_rejects_blank() {
        for raw in ["", " ", "\t", " \n "] {
            let result = ParticipantName::parse(raw);
            assert!(
                matches!(result, Err(RegistryError::InvalidArgument(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ParticipantName = serde_json::from_str("\"Canada\"").unwrap();
        assert_eq!(ok.as_str(), "Canada");

        let blank: Result<ParticipantName, _> = serde_json::from_str("\"  \"");
        assert!(blank.is_err());
    }
}
