//! Settings management use cases.
//!
//! Every write first gets-or-creates the owning profile, so a client can
//! store settings for a profile it never registered explicitly.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use myfun_domain::{
    common::StringExt, CategoryName, DomainError, HistoryEntry, ProfileId, Setting, SettingKey,
    SettingValue,
};

use crate::infrastructure::ports::{ProfileRepo, RepoError, SettingRepo};

/// Entries returned by a history query when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 100;
/// Upper bound on a requested history limit.
pub const MAX_HISTORY_LIMIT: u32 = 1000;

/// Settings operations use case.
pub struct SettingsOps {
    profiles: Arc<dyn ProfileRepo>,
    settings: Arc<dyn SettingRepo>,
}

impl SettingsOps {
    pub fn new(profiles: Arc<dyn ProfileRepo>, settings: Arc<dyn SettingRepo>) -> Self {
        Self { profiles, settings }
    }

    /// A profile that cannot be upserted is logged and otherwise ignored;
    /// the following statement then simply matches nothing.
    async fn ensure_profile(&self, profile_id: &ProfileId) -> Result<(), SettingsError> {
        if self.profiles.get_or_create(profile_id, None).await?.is_none() {
            tracing::warn!(profile_id = %profile_id, "Profile upsert returned nothing");
        }
        Ok(())
    }

    /// All settings of a profile. Creates the profile when absent.
    pub async fn get_all(&self, profile_id: &str) -> Result<BTreeMap<String, String>, SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        self.ensure_profile(&profile_id).await?;
        Ok(self.settings.get_all(&profile_id).await?)
    }

    pub async fn get(&self, profile_id: &str, key: &str) -> Result<Setting, SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        let key = SettingKey::new(key)?;
        let setting = self.settings.get(&profile_id, &key).await?;
        setting.ok_or(SettingsError::NotFound(key))
    }

    /// Write one setting and record it in the history.
    ///
    /// The returned setting carries the stored string value and the
    /// `updated_at` read back after the write (`None` if the read-back
    /// found nothing).
    pub async fn update(
        &self,
        profile_id: &str,
        key: &str,
        value: Value,
        category: &str,
    ) -> Result<Setting, SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        let key = SettingKey::new(key)?;
        let value = SettingValue::from_json(value)?;
        let category = CategoryName::new(category)?;

        self.ensure_profile(&profile_id).await?;

        let written = self
            .settings
            .set(&profile_id, &key, &value, &category)
            .await?;
        if !written {
            return Err(RepoError::write_failed("Failed to update setting").into());
        }

        let updated_at = self
            .settings
            .get(&profile_id, &key)
            .await?
            .and_then(|stored| stored.updated_at);

        tracing::info!(
            profile_id = %profile_id,
            key = %key,
            category = %category,
            "Setting updated"
        );

        Ok(Setting {
            key,
            value,
            category,
            updated_at,
        })
    }

    /// Write many settings under one category and return the full map.
    ///
    /// The whole batch is validated before anything is written. Keys are
    /// taken verbatim, so keys differing only in whitespace stay distinct.
    pub async fn bulk_update(
        &self,
        profile_id: &str,
        settings: BTreeMap<String, Value>,
        category: &str,
    ) -> Result<BTreeMap<String, String>, SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        let category = CategoryName::new(category)?;
        let batch = settings
            .into_iter()
            .map(|(key, value)| -> Result<_, DomainError> {
                Ok((SettingKey::new(key)?, SettingValue::from_json(value)?))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        self.ensure_profile(&profile_id).await?;

        if !self
            .settings
            .bulk_set(&profile_id, &batch, &category)
            .await?
        {
            return Err(RepoError::write_failed("Failed to update settings").into());
        }

        tracing::info!(
            profile_id = %profile_id,
            count = batch.len(),
            category = %category,
            "Settings bulk updated"
        );

        Ok(self.settings.get_all(&profile_id).await?)
    }

    /// Remove a setting. Its history entries are kept.
    pub async fn delete(&self, profile_id: &str, key: &str) -> Result<(), SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        let key = SettingKey::new(key)?;

        if !self.settings.delete(&profile_id, &key).await? {
            return Err(SettingsError::NotFound(key));
        }

        tracing::info!(profile_id = %profile_id, key = %key, "Setting deleted");
        Ok(())
    }

    /// Change history of a profile, newest first.
    ///
    /// A blank `key` means no filter. `limit` defaults to
    /// [`DEFAULT_HISTORY_LIMIT`] and is clamped to `1..=MAX_HISTORY_LIMIT`.
    pub async fn history(
        &self,
        profile_id: &str,
        key: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<HistoryEntry>, SettingsError> {
        let profile_id = ProfileId::new(profile_id)?;
        let key = key.into_option().map(SettingKey::new).transpose()?;
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .clamp(1, MAX_HISTORY_LIMIT);

        Ok(self.settings.history(&profile_id, key, limit).await?)
    }
}

/// Errors that can occur during settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Setting not found")]
    NotFound(SettingKey),
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}
