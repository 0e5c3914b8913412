//! Profile entity - one browser profile and its access timestamps.

use chrono::{DateTime, Utc};

use crate::ids::ProfileId;

/// A browser profile as stored on a `Profile` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub profile_id: ProfileId,
    /// Display name. Falls back to the profile ID when none was ever supplied.
    pub profile_name: String,
    /// Set once, when the node is created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every get-or-create.
    pub last_accessed_at: DateTime<Utc>,
}
