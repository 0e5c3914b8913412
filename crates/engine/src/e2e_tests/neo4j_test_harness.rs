//! Neo4j test harness for integration testing.
//!
//! Provides testcontainer-based Neo4j instance management.

use std::sync::Arc;
use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use crate::infrastructure::neo4j::{ensure_schema, Neo4jConnection, QueryExecutor};

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

/// Community edition only serves the default database.
const TEST_DATABASE: &str = "neo4j";

pub type HarnessResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
    uri: String,
}

impl Neo4jTestHarness {
    /// Start a new Neo4j container, connect and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or connection cannot be established.
    pub async fn start() -> HarnessResult<Self> {
        let container: ContainerAsync<GenericImage> =
            neo4j_image(TEST_NEO4J_PASSWORD).start().await;
        let bolt_port = container.get_host_port_ipv4(7687).await;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD).await?;

        let harness = Self {
            _container: container,
            graph,
            uri,
        };
        ensure_schema(&harness.executor()).await?;
        Ok(harness)
    }

    /// Raw driver handle, for assertions on the stored graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A fresh connection manager over the container's driver.
    pub fn connection(&self) -> Arc<Neo4jConnection> {
        Arc::new(Neo4jConnection::from_graph(
            self.graph.clone(),
            &self.uri,
            TEST_DATABASE,
        ))
    }

    pub fn executor(&self) -> QueryExecutor {
        QueryExecutor::new(self.connection())
    }

    /// Clean all data from the database.
    pub async fn clean(&self) -> HarnessResult<()> {
        clean_db(&self.graph).await
    }

    /// Run a single-column count query.
    pub async fn count(&self, cypher: &str, profile_id: &str) -> HarnessResult<i64> {
        let mut result = self
            .graph
            .execute(query(cypher).param("profile_id", profile_id))
            .await?;
        let row = result.next().await?.ok_or("count query returned no row")?;
        Ok(row.get::<i64>("count")?)
    }
}

/// Create a Neo4j container image with the given password.
///
/// Configuration for reliability:
/// - Pinned version for consistency across runs
/// - Memory limits to prevent JVM crashes
/// - Connection readiness is verified by connect_with_retry
pub fn neo4j_image(password: &str) -> GenericImage {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(7687)
        .with_wait_for(WaitFor::seconds(5))
}

/// Connect to Neo4j, retrying with capped exponential backoff.
pub async fn connect_with_retry(uri: &str, user: &str, pass: &str) -> HarnessResult<Graph> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(5);
    let mut delay = Duration::from_millis(500);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match Graph::new(uri, user, pass).await {
            Ok(graph) => match graph.run(query("RETURN 1")).await {
                Ok(()) => {
                    tracing::info!(attempt, uri, "Neo4j test container ready");
                    return Ok(graph);
                }
                Err(e) => last_err = Some(format!("Connection test query failed: {e}")),
            },
            Err(e) => last_err = Some(e.to_string()),
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis() as u64,
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying Neo4j connection"
        );
        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to Neo4j at {uri} after {max_attempts} attempts: {last_err:?}"
    )
    .into())
}

/// Clean all data from a Neo4j database.
pub async fn clean_db(graph: &Graph) -> HarnessResult<()> {
    graph
        .run(query("MATCH (n) DETACH DELETE n"))
        .await
        .map_err(|e| format!("Failed to clean database: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires docker (testcontainers)"]
    async fn harness_starts_and_connects() {
        let harness = Neo4jTestHarness::start()
            .await
            .expect("Failed to start Neo4j harness");

        harness
            .connection()
            .verify_connectivity()
            .await
            .expect("connectivity");
    }

    #[tokio::test]
    #[ignore = "requires docker (testcontainers)"]
    async fn clean_removes_all_data() {
        let harness = Neo4jTestHarness::start()
            .await
            .expect("Failed to start Neo4j harness");

        harness
            .graph()
            .run(query("CREATE (:Profile {profileId: 'p1'})"))
            .await
            .expect("Create failed");
        harness.clean().await.expect("Clean failed");

        let count = harness
            .count(
                "MATCH (p:Profile {profileId: $profile_id}) RETURN count(p) AS count",
                "p1",
            )
            .await
            .expect("count");
        assert_eq!(count, 0);
    }
}
