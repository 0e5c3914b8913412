//! Validated name newtypes for settings
//!
//! These newtypes ensure that names are valid by construction:
//! - Not blank
//! - Within length limits
//!
//! The value is kept exactly as given: `" theme"` and `"theme"` are two
//! different keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for identifiers and names (profile IDs, setting keys, categories)
pub const MAX_NAME_LENGTH: usize = 200;

pub(crate) fn validate_name(value: String, label: &str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{label} cannot be empty")));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{label} cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(value)
}

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a validated ", $label, ".")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the value is blank or
            /// exceeds `MAX_NAME_LENGTH` characters.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                validate_name(value.into(), $label).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_name!(
    /// Key of a setting, unique within one profile.
    SettingKey,
    "Setting key"
);

define_name!(
    /// Name of a category node. Unique across the whole graph, not per profile.
    CategoryName,
    "Category name"
);
