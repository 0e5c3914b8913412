//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area. Use cases take
//! raw request input, validate it into domain types and drive the repository
//! ports.

pub mod profiles;
pub mod settings;

pub use profiles::{ProfileError, ProfileOps, ProfileUseCases};
pub use settings::{SettingsError, SettingsOps, SettingsUseCases};
