use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `PUT /profiles/{profile_id}/settings/{key}`.
///
/// `value` may be any JSON scalar, array or object; the engine stores its
/// string form. The optional `key` is accepted for older clients that echo
/// it in the body; the path segment always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSettingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: Value,
    pub category: String,
}

/// Body of `POST /profiles/{profile_id}/settings`.
///
/// One category applies to every key in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsBulkUpdateRequest {
    pub settings: BTreeMap<String, Value>,
    pub category: String,
}

/// Query string of `GET /profiles/{profile_id}/history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Only entries for this setting key.
    #[serde(default)]
    pub key: Option<String>,
    /// Maximum number of entries, newest first.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_accepts_any_json_value() {
        let req: UpdateSettingRequest =
            serde_json::from_value(json!({"value": {"size": 14}, "category": "appearance"}))
                .expect("valid body");
        assert_eq!(req.key, None);
        assert_eq!(req.value, json!({"size": 14}));
    }

    #[test]
    fn update_request_requires_category() {
        let err = serde_json::from_value::<UpdateSettingRequest>(json!({"value": "dark"}))
            .expect_err("category is required");
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn bulk_request_keeps_every_key() {
        let req: SettingsBulkUpdateRequest = serde_json::from_value(json!({
            "settings": {"theme": "dark", "fontSize": 14},
            "category": "appearance"
        }))
        .expect("valid body");
        assert_eq!(req.settings.len(), 2);
        assert_eq!(req.settings["fontSize"], json!(14));
    }
}
