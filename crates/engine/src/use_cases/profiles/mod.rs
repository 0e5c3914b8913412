//! Profile use cases.
//!
//! A profile is created implicitly the first time it is referenced; these
//! operations are the explicit entry points.

use std::sync::Arc;

use myfun_domain::{DomainError, Profile, ProfileId};

use crate::infrastructure::ports::{ProfileRepo, RepoError};

/// Container for profile use cases.
pub struct ProfileUseCases {
    pub ops: Arc<ProfileOps>,
}

impl ProfileUseCases {
    pub fn new(ops: Arc<ProfileOps>) -> Self {
        Self { ops }
    }
}

/// Profile operations.
pub struct ProfileOps {
    repo: Arc<dyn ProfileRepo>,
}

impl ProfileOps {
    pub fn new(repo: Arc<dyn ProfileRepo>) -> Self {
        Self { repo }
    }

    /// Create the profile or refresh its last access time.
    ///
    /// A supplied non-blank name replaces the stored one.
    pub async fn create_or_touch(
        &self,
        profile_id: &str,
        profile_name: Option<String>,
    ) -> Result<Profile, ProfileError> {
        let profile_id = ProfileId::new(profile_id)?;
        let profile = self
            .repo
            .get_or_create(&profile_id, profile_name)
            .await?
            .ok_or_else(|| RepoError::write_failed("Failed to create profile"))?;

        tracing::info!(profile_id = %profile.profile_id, "Profile created or touched");
        Ok(profile)
    }

    /// Read-only lookup; never creates the profile.
    pub async fn get(&self, profile_id: &str) -> Result<Profile, ProfileError> {
        let profile_id = ProfileId::new(profile_id)?;
        let profile = self.repo.get(&profile_id).await?;
        profile.ok_or(ProfileError::NotFound(profile_id))
    }
}

/// Errors that can occur during profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound(ProfileId),
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockProfileRepo;
    use chrono::{TimeZone, Utc};

    fn test_profile(id: &str, name: &str) -> Profile {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid date");
        Profile {
            profile_id: ProfileId::new(id).expect("valid id"),
            profile_name: name.to_string(),
            created_at: at,
            last_accessed_at: at,
        }
    }

    #[tokio::test]
    async fn create_or_touch_passes_name_through() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get_or_create()
            .withf(|id, name| id.as_str() == "chrome-1" && name.as_deref() == Some("Work"))
            .times(1)
            .returning(|_, _| Ok(Some(test_profile("chrome-1", "Work"))));

        let ops = ProfileOps::new(Arc::new(repo));
        let profile = ops
            .create_or_touch("chrome-1", Some("Work".to_string()))
            .await
            .expect("profile");

        assert_eq!(profile.profile_name, "Work");
    }

    #[tokio::test]
    async fn create_or_touch_without_row_is_a_write_failure() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get_or_create().returning(|_, _| Ok(None));

        let ops = ProfileOps::new(Arc::new(repo));
        let result = ops.create_or_touch("chrome-1", None).await;

        assert!(matches!(
            result,
            Err(ProfileError::Repo(RepoError::WriteFailed(_)))
        ));
    }

    #[tokio::test]
    async fn blank_profile_id_is_rejected_before_the_repo() {
        let repo = MockProfileRepo::new();

        let ops = ProfileOps::new(Arc::new(repo));
        let result = ops.create_or_touch("   ", None).await;

        assert!(matches!(result, Err(ProfileError::Invalid(_))));
    }

    #[tokio::test]
    async fn get_missing_profile_is_not_found() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_get_or_create().never();

        let ops = ProfileOps::new(Arc::new(repo));
        let err = ops.get("unknown").await.expect_err("must fail");

        assert!(matches!(err, ProfileError::NotFound(ref id) if id.as_str() == "unknown"));
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[tokio::test]
    async fn database_errors_surface_unchanged() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::database("get_profile", "connection reset")));

        let ops = ProfileOps::new(Arc::new(repo));
        let err = ops.get("chrome-1").await.expect_err("must fail");

        assert_eq!(
            err.to_string(),
            "Database error in get_profile: connection reset"
        );
    }
}
