use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::validate_name;

/// External identifier of a browser profile.
///
/// Chosen by the client (the browser extension), never generated here. It is
/// the sole identity key of a `Profile` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Create a validated profile ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the ID is blank or longer than
    /// `MAX_NAME_LENGTH` characters. The ID is stored as given.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        validate_name(id.into(), "Profile ID").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProfileId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::MAX_NAME_LENGTH;

    #[test]
    fn keeps_id_verbatim() {
        let id = ProfileId::new(" abc123").expect("valid id");
        assert_eq!(id.as_str(), " abc123");
        assert_eq!(id.to_string(), " abc123");
    }

    #[test]
    fn rejects_blank_id() {
        assert!(matches!(
            ProfileId::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn rejects_overlong_id() {
        let long = "p".repeat(MAX_NAME_LENGTH + 1);
        assert!(ProfileId::new(long).is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let id: ProfileId = serde_json::from_str("\"abc123\"").expect("valid json");
        assert_eq!(id.as_str(), "abc123");
        assert!(serde_json::from_str::<ProfileId>("\"\"").is_err());
    }
}
