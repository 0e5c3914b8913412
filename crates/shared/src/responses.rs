//! Response payloads of the REST surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A profile as returned by `POST /profiles` and `GET /profiles/{id}`.
///
/// Timestamps are RFC 3339 strings, empty when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile_id: String,
    pub profile_name: Option<String>,
    pub created_at: Option<String>,
    pub last_accessed_at: Option<String>,
}

/// A single setting. `value` is always the stored string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingResponse {
    pub key: String,
    pub value: String,
    pub category: String,
    pub updated_at: Option<String>,
}

/// All settings of a profile, key to stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntryResponse {
    pub setting_key: String,
    /// Always `None`: previous values are not captured.
    pub old_value: Option<String>,
    pub new_value: String,
    pub timestamp: String,
    pub change_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntryResponse>,
}

/// Plain acknowledgement, e.g. after a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthResponse {
    Healthy { neo4j: String },
    Unhealthy { error: String },
}

impl HealthResponse {
    pub fn connected() -> Self {
        Self::Healthy {
            neo4j: "connected".to_string(),
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self::Unhealthy {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_response_uses_status_tag() {
        let value = serde_json::to_value(HealthResponse::connected()).expect("serializable");
        assert_eq!(value, json!({"status": "healthy", "neo4j": "connected"}));

        let value =
            serde_json::to_value(HealthResponse::unhealthy("connection refused")).expect("ok");
        assert_eq!(
            value,
            json!({"status": "unhealthy", "error": "connection refused"})
        );
    }

    #[test]
    fn history_entry_serializes_missing_old_value_as_null() {
        let entry = HistoryEntryResponse {
            setting_key: "theme".to_string(),
            old_value: None,
            new_value: "dark".to_string(),
            timestamp: "2024-01-15T10:30:00+00:00".to_string(),
            change_type: "UPDATE".to_string(),
        };
        let value = serde_json::to_value(entry).expect("serializable");
        assert_eq!(value["old_value"], serde_json::Value::Null);
        assert_eq!(value["change_type"], "UPDATE");
    }
}
