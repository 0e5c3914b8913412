//! Neo4j schema initialization - constraints and indexes.

use neo4rs::query;

use super::executor::QueryExecutor;
use crate::infrastructure::ports::RepoError;

const SCHEMA_STATEMENTS: &[(&str, &str)] = &[
    (
        "profile_id_unique",
        "CREATE CONSTRAINT profile_id_unique IF NOT EXISTS
         FOR (p:Profile) REQUIRE p.profileId IS UNIQUE",
    ),
    (
        "category_name_unique",
        "CREATE CONSTRAINT category_name_unique IF NOT EXISTS
         FOR (c:Category) REQUIRE c.name IS UNIQUE",
    ),
    (
        "setting_key",
        "CREATE INDEX setting_key IF NOT EXISTS
         FOR (s:Setting) ON (s.key)",
    ),
    (
        "history_setting_key",
        "CREATE INDEX history_setting_key IF NOT EXISTS
         FOR (h:History) ON (h.settingKey)",
    ),
];

/// Initialize Neo4j schema with required constraints and indexes.
///
/// This should be called once on startup. Every statement uses
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(executor: &QueryExecutor) -> Result<(), RepoError> {
    for (name, statement) in SCHEMA_STATEMENTS {
        executor.run(query(statement), "ensure_schema").await?;
        tracing::debug!(name, "Schema statement applied");
    }

    tracing::info!("Neo4j schema initialized (constraints and indexes ensured)");
    Ok(())
}
