//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    neo4j::Neo4jRepositories,
    ports::{DatabaseHealth, ProfileRepo, SettingRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds the repository ports and the use cases built on them.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub health: Arc<dyn DatabaseHealth>,
}

/// Container for all repository ports.
pub struct Repositories {
    pub profile: Arc<dyn ProfileRepo>,
    pub setting: Arc<dyn SettingRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub profiles: use_cases::ProfileUseCases,
    pub settings: use_cases::SettingsUseCases,
}

impl App {
    /// Compose the application over the Neo4j repositories.
    pub fn new(repos: Neo4jRepositories, health: Arc<dyn DatabaseHealth>) -> Self {
        Self::from_ports(repos.profile, repos.setting, health)
    }

    /// Compose the application over arbitrary port implementations.
    pub fn from_ports(
        profile: Arc<dyn ProfileRepo>,
        setting: Arc<dyn SettingRepo>,
        health: Arc<dyn DatabaseHealth>,
    ) -> Self {
        let profile_ops = Arc::new(use_cases::ProfileOps::new(profile.clone()));
        let settings_ops = Arc::new(use_cases::SettingsOps::new(
            profile.clone(),
            setting.clone(),
        ));

        Self {
            repositories: Repositories { profile, setting },
            use_cases: UseCases {
                profiles: use_cases::ProfileUseCases::new(profile_ops),
                settings: use_cases::SettingsUseCases::new(settings_ops),
            },
            health,
        }
    }
}
