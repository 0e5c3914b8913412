//! Setting entity - one key/value pair owned by a profile.

use chrono::{DateTime, Utc};

use crate::value_objects::{CategoryName, SettingKey, SettingValue};

/// A setting as stored on a `Setting` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: SettingKey,
    pub value: SettingValue,
    pub category: CategoryName,
    /// `None` when the stored timestamp is missing or unreadable.
    pub updated_at: Option<DateTime<Utc>>,
}
