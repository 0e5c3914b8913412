//! Neo4j database implementations.

use std::sync::Arc;

use crate::infrastructure::ports::ClockPort;

mod connection;
mod executor;
mod helpers;
mod profile_repo;
mod schema;
mod setting_repo;


pub use connection::Neo4jConnection;
pub use executor::QueryExecutor;
pub use helpers::to_stored_timestamp;
pub use profile_repo::Neo4jProfileRepo;
pub use schema::ensure_schema;
pub use setting_repo::Neo4jSettingRepo;

/// Create all Neo4j repositories over one shared executor.
pub struct Neo4jRepositories {
    pub profile: Arc<Neo4jProfileRepo>,
    pub setting: Arc<Neo4jSettingRepo>,
}

impl Neo4jRepositories {
    pub fn new(executor: QueryExecutor, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            profile: Arc::new(Neo4jProfileRepo::new(executor.clone(), clock.clone())),
            setting: Arc::new(Neo4jSettingRepo::new(executor, clock)),
        }
    }
}
