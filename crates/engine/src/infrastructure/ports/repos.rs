//! Repository port traits for database access.

use std::collections::BTreeMap;

use async_trait::async_trait;
use myfun_domain::{CategoryName, HistoryEntry, Profile, ProfileId, Setting, SettingKey, SettingValue};

use super::error::RepoError;

// =============================================================================
// Connectivity
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseHealth: Send + Sync {
    /// Round-trip a trivial statement to the database.
    async fn verify_connectivity(&self) -> Result<(), RepoError>;
}

// =============================================================================
// Profiles
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// Create the profile if absent, otherwise refresh `lastAccessedAt`.
    ///
    /// A blank or missing `profile_name` keeps the stored name (or, on
    /// creation, falls back to the profile ID). Returns `None` when the write
    /// unexpectedly yields no row.
    async fn get_or_create(
        &self,
        profile_id: &ProfileId,
        profile_name: Option<String>,
    ) -> Result<Option<Profile>, RepoError>;

    /// Read-only lookup.
    async fn get(&self, profile_id: &ProfileId) -> Result<Option<Profile>, RepoError>;
}

// =============================================================================
// Settings
// =============================================================================

/// Settings scoped to an existing profile.
///
/// None of these create the profile; callers get-or-create it first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingRepo: Send + Sync {
    /// Every setting of the profile, key to stored value.
    async fn get_all(
        &self,
        profile_id: &ProfileId,
    ) -> Result<BTreeMap<String, String>, RepoError>;

    async fn get(
        &self,
        profile_id: &ProfileId,
        key: &SettingKey,
    ) -> Result<Option<Setting>, RepoError>;

    /// Upsert one setting, its category link, and append a history entry.
    ///
    /// Returns `false` if the setting write produced no row (profile missing).
    async fn set(
        &self,
        profile_id: &ProfileId,
        key: &SettingKey,
        value: &SettingValue,
        category: &CategoryName,
    ) -> Result<bool, RepoError>;

    /// Upsert many settings under one category in a single statement.
    ///
    /// Does not append history entries. Always `true` once the statement ran.
    async fn bulk_set(
        &self,
        profile_id: &ProfileId,
        settings: &BTreeMap<SettingKey, SettingValue>,
        category: &CategoryName,
    ) -> Result<bool, RepoError>;

    /// Detach-delete the setting. `false` when nothing matched.
    async fn delete(&self, profile_id: &ProfileId, key: &SettingKey) -> Result<bool, RepoError>;

    /// History of the profile, newest first.
    async fn history(
        &self,
        profile_id: &ProfileId,
        key: Option<SettingKey>,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, RepoError>;
}
