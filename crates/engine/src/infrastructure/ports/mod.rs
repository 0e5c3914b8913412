//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (profiles, settings and their history, connectivity)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::{ConnectionError, RepoError};
pub use repos::{DatabaseHealth, ProfileRepo, SettingRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::{MockDatabaseHealth, MockProfileRepo, MockSettingRepo};
#[cfg(test)]
pub use testing::MockClockPort;
