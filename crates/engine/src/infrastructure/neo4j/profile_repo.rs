//! Neo4j profile repository.
//!
//! Profiles are `(:Profile {profileId})` nodes, merged on first reference.

use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{query, Row};

use myfun_domain::{Profile, ProfileId};

use super::executor::QueryExecutor;
use super::helpers::{to_stored_timestamp, RowExt};
use crate::infrastructure::ports::{ClockPort, ProfileRepo, RepoError};

const PROFILE_COLUMNS: &str = "p.profileId AS profile_id,
        p.profileName AS profile_name,
        p.createdAt AS created_at,
        p.lastAccessedAt AS last_accessed_at";

pub struct Neo4jProfileRepo {
    executor: QueryExecutor,
    clock: Arc<dyn ClockPort>,
}

impl Neo4jProfileRepo {
    pub fn new(executor: QueryExecutor, clock: Arc<dyn ClockPort>) -> Self {
        Self { executor, clock }
    }
}

fn row_to_profile(row: Row) -> Result<Profile, RepoError> {
    let id = row.get_string_strict("profile_id")?;
    let profile_id = ProfileId::new(id).map_err(RepoError::serialization)?;
    let profile_name = row.get_string_or("profile_name", profile_id.as_str());

    Ok(Profile {
        profile_name,
        created_at: row.get_datetime_strict("created_at")?,
        last_accessed_at: row.get_datetime_strict("last_accessed_at")?,
        profile_id,
    })
}

#[async_trait]
impl ProfileRepo for Neo4jProfileRepo {
    async fn get_or_create(
        &self,
        profile_id: &ProfileId,
        profile_name: Option<String>,
    ) -> Result<Option<Profile>, RepoError> {
        // An empty $profile_name means "not supplied": keep what is stored,
        // or fall back to the profile ID on creation.
        let q = query(&format!(
            "MERGE (p:Profile {{profileId: $profile_id}})
             ON CREATE SET p.createdAt = $now,
                           p.lastAccessedAt = $now,
                           p.profileName = CASE WHEN $profile_name = '' THEN $profile_id ELSE $profile_name END
             ON MATCH SET p.lastAccessedAt = $now,
                          p.profileName = CASE WHEN $profile_name = ''
                                               THEN coalesce(p.profileName, $profile_id)
                                               ELSE $profile_name END
             RETURN {PROFILE_COLUMNS}"
        ))
        .param("profile_id", profile_id.as_str())
        .param(
            "profile_name",
            profile_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_default(),
        )
        .param("now", to_stored_timestamp(self.clock.now()));

        let profile = self
            .executor
            .write(q, "get_or_create_profile", row_to_profile)
            .await?
            .into_iter()
            .next();

        match &profile {
            Some(p) => tracing::debug!(profile_id = %p.profile_id, "Profile touched"),
            None => tracing::warn!(profile_id = %profile_id, "Profile upsert returned no row"),
        }
        Ok(profile)
    }

    async fn get(&self, profile_id: &ProfileId) -> Result<Option<Profile>, RepoError> {
        let q = query(&format!(
            "MATCH (p:Profile {{profileId: $profile_id}})
             RETURN {PROFILE_COLUMNS}"
        ))
        .param("profile_id", profile_id.as_str());

        self.executor
            .read_first(q, "get_profile", row_to_profile)
            .await
    }
}
