//! History entity - append-only log of setting writes per profile.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::SettingKey;

/// Kind of change recorded in a history entry.
///
/// Only `Update` is ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Update,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "UPDATE",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPDATE" => Ok(Self::Update),
            other => Err(DomainError::parse(format!("Unknown change type: {other}"))),
        }
    }
}

/// One recorded setting write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub setting_key: SettingKey,
    /// Never populated: no write path captures the previous value.
    pub old_value: Option<String>,
    pub new_value: String,
    pub timestamp: DateTime<Utc>,
    pub change_type: ChangeType,
}
