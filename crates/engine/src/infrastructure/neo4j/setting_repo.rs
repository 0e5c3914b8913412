//! Neo4j setting repository.
//!
//! Graph layout:
//! - `(:Profile)-[:HAS_SETTING]->(:Setting {key, value, category, updatedAt})`
//! - `(:Setting)-[:BELONGS_TO]->(:Category {name})`, categories shared by all profiles
//! - `(:Profile)-[:HAS_HISTORY]->(:History {settingKey, newValue, timestamp, changeType})`
//!
//! None of these statements create the profile: they all start with a
//! `MATCH` on it, so a missing profile turns a write into a no-op.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{query, Row};

use myfun_domain::{
    CategoryName, ChangeType, HistoryEntry, ProfileId, Setting, SettingKey, SettingValue,
};

use super::executor::QueryExecutor;
use super::helpers::{to_stored_timestamp, RowExt};
use crate::infrastructure::ports::{ClockPort, RepoError, SettingRepo};

/// Re-points the category edge of every `s` in scope, dropping an edge to a
/// previous category so a setting belongs to exactly one.
const LINK_CATEGORY: &str = "WITH s
     OPTIONAL MATCH (s)-[old:BELONGS_TO]->(previous:Category)
     WHERE previous.name <> $category
     DELETE old
     WITH DISTINCT s
     MERGE (c:Category {name: $category})
     MERGE (s)-[:BELONGS_TO]->(c)";

pub struct Neo4jSettingRepo {
    executor: QueryExecutor,
    clock: Arc<dyn ClockPort>,
}

impl Neo4jSettingRepo {
    pub fn new(executor: QueryExecutor, clock: Arc<dyn ClockPort>) -> Self {
        Self { executor, clock }
    }

    /// Append one `UPDATE` entry. Old values are not captured.
    async fn append_history(
        &self,
        profile_id: &ProfileId,
        key: &SettingKey,
        value: &SettingValue,
    ) -> Result<(), RepoError> {
        let q = query(
            "MATCH (p:Profile {profileId: $profile_id})
             CREATE (h:History {
                 settingKey: $key,
                 newValue: $value,
                 timestamp: $now,
                 changeType: $change_type
             })
             CREATE (p)-[:HAS_HISTORY]->(h)",
        )
        .param("profile_id", profile_id.as_str())
        .param("key", key.as_str())
        .param("value", value.as_str())
        .param("now", to_stored_timestamp(self.clock.now()))
        .param("change_type", ChangeType::Update.as_str());

        self.executor
            .write(q, "append_history", |_| Ok(()))
            .await?;
        Ok(())
    }
}

fn row_to_setting(row: Row) -> Result<Setting, RepoError> {
    let key = SettingKey::new(row.get_string_strict("key")?).map_err(RepoError::serialization)?;
    let category = CategoryName::new(row.get_string_strict("category")?)
        .map_err(RepoError::serialization)?;

    Ok(Setting {
        key,
        value: SettingValue::text(row.get_string_strict("value")?),
        category,
        updated_at: row.get_optional_datetime("updated_at"),
    })
}

fn row_to_history(row: Row) -> Result<HistoryEntry, RepoError> {
    let setting_key = SettingKey::new(row.get_string_strict("setting_key")?)
        .map_err(RepoError::serialization)?;
    let timestamp = row.get_datetime_strict("timestamp")?;
    let change_type = row
        .get_string_or("change_type", ChangeType::Update.as_str())
        .parse::<ChangeType>()
        .map_err(RepoError::serialization)?;

    Ok(HistoryEntry {
        setting_key,
        old_value: row.get_optional_string("old_value"),
        new_value: row.get_string_strict("new_value")?,
        timestamp,
        change_type,
    })
}

#[async_trait]
impl SettingRepo for Neo4jSettingRepo {
    async fn get_all(
        &self,
        profile_id: &ProfileId,
    ) -> Result<BTreeMap<String, String>, RepoError> {
        let q = query(
            "MATCH (p:Profile {profileId: $profile_id})-[:HAS_SETTING]->(s:Setting)
             RETURN s.key AS key, s.value AS value",
        )
        .param("profile_id", profile_id.as_str());

        let pairs = self
            .executor
            .read(q, "get_all_settings", |row| {
                let key = row.get_string_strict("key")?;
                let value = row.get_string_strict("value")?;
                Ok((key, value))
            })
            .await?;

        Ok(pairs.into_iter().collect())
    }

    async fn get(
        &self,
        profile_id: &ProfileId,
        key: &SettingKey,
    ) -> Result<Option<Setting>, RepoError> {
        let q = query(
            "MATCH (p:Profile {profileId: $profile_id})-[:HAS_SETTING]->(s:Setting {key: $key})
             RETURN s.key AS key, s.value AS value, s.category AS category,
                    s.updatedAt AS updated_at",
        )
        .param("profile_id", profile_id.as_str())
        .param("key", key.as_str());

        self.executor.read_first(q, "get_setting", row_to_setting).await
    }

    async fn set(
        &self,
        profile_id: &ProfileId,
        key: &SettingKey,
        value: &SettingValue,
        category: &CategoryName,
    ) -> Result<bool, RepoError> {
        let q = query(&format!(
            "MATCH (p:Profile {{profileId: $profile_id}})
             MERGE (p)-[:HAS_SETTING]->(s:Setting {{key: $key}})
             SET s.value = $value, s.category = $category, s.updatedAt = $now
             {LINK_CATEGORY}
             RETURN s.key AS key"
        ))
        .param("profile_id", profile_id.as_str())
        .param("key", key.as_str())
        .param("value", value.as_str())
        .param("category", category.as_str())
        .param("now", to_stored_timestamp(self.clock.now()));

        let written = self
            .executor
            .write(q, "set_setting", |row| row.get_string_strict("key"))
            .await?;

        // Recorded even when the setting write matched nothing; the history
        // statement matches the profile itself and is then a no-op too.
        self.append_history(profile_id, key, value).await?;

        tracing::debug!(
            profile_id = %profile_id,
            key = %key,
            category = %category,
            written = !written.is_empty(),
            "Setting written"
        );
        Ok(!written.is_empty())
    }

    async fn bulk_set(
        &self,
        profile_id: &ProfileId,
        settings: &BTreeMap<SettingKey, SettingValue>,
        category: &CategoryName,
    ) -> Result<bool, RepoError> {
        let (keys, values): (Vec<String>, Vec<String>) = settings
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .unzip();

        // No history entries on this path.
        let q = query(&format!(
            "MATCH (p:Profile {{profileId: $profile_id}})
             UNWIND range(0, size($keys) - 1) AS i
             MERGE (p)-[:HAS_SETTING]->(s:Setting {{key: $keys[i]}})
             SET s.value = $values[i], s.category = $category, s.updatedAt = $now
             {LINK_CATEGORY}"
        ))
        .param("profile_id", profile_id.as_str())
        .param("keys", keys)
        .param("values", values)
        .param("category", category.as_str())
        .param("now", to_stored_timestamp(self.clock.now()));

        self.executor
            .write(q, "bulk_set_settings", |_| Ok(()))
            .await?;

        tracing::debug!(
            profile_id = %profile_id,
            count = settings.len(),
            category = %category,
            "Settings bulk written"
        );
        Ok(true)
    }

    async fn delete(&self, profile_id: &ProfileId, key: &SettingKey) -> Result<bool, RepoError> {
        let q = query(
            "MATCH (p:Profile {profileId: $profile_id})-[:HAS_SETTING]->(s:Setting {key: $key})
             DETACH DELETE s
             RETURN count(*) AS deleted",
        )
        .param("profile_id", profile_id.as_str())
        .param("key", key.as_str());

        let deleted = self
            .executor
            .write(q, "delete_setting", |row| Ok(row.get_i64_or("deleted", 0)))
            .await?
            .into_iter()
            .next()
            .unwrap_or(0);

        if deleted > 0 {
            tracing::debug!(profile_id = %profile_id, key = %key, "Setting deleted");
        }
        Ok(deleted > 0)
    }

    async fn history(
        &self,
        profile_id: &ProfileId,
        key: Option<SettingKey>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, RepoError> {
        let q = query(
            "MATCH (p:Profile {profileId: $profile_id})-[:HAS_HISTORY]->(h:History)
             WHERE $key = '' OR h.settingKey = $key
             RETURN h.settingKey AS setting_key, h.oldValue AS old_value,
                    h.newValue AS new_value, h.timestamp AS timestamp,
                    h.changeType AS change_type
             ORDER BY h.timestamp DESC
             LIMIT $limit",
        )
        .param("profile_id", profile_id.as_str())
        .param("key", key.map(String::from).unwrap_or_default())
        .param("limit", i64::from(limit));

        self.executor
            .read(q, "get_history", row_to_history)
            .await
    }
}
