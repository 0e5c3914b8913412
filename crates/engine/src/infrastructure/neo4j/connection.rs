//! Connection manager: the single long-lived Neo4j handle of the process.
//!
//! `main` creates it with [`Neo4jConnection::connect`] and releases it with
//! [`Neo4jConnection::close`] after the HTTP server has drained. Everything
//! else reaches the database through [`Neo4jConnection::session`].

use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph};
use tokio::sync::RwLock;

use crate::infrastructure::config::Neo4jConfig;
use crate::infrastructure::ports::{ConnectionError, DatabaseHealth, RepoError};

const CONNECTIVITY_QUERY: &str = "RETURN 1";

pub struct Neo4jConnection {
    graph: RwLock<Option<Graph>>,
    uri: String,
    database: String,
}

impl Neo4jConnection {
    /// Build the driver and check connectivity once.
    ///
    /// Fails fast: an unreachable database aborts startup instead of
    /// surfacing on the first request. There is no retry.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, ConnectionError> {
        let driver_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .build()
            .map_err(|e| ConnectionError::InvalidConfig(e.to_string()))?;

        let unreachable = |e: neo4rs::Error| ConnectionError::Unreachable {
            uri: config.uri.clone(),
            message: e.to_string(),
        };

        let graph = Graph::connect(driver_config).await.map_err(unreachable)?;
        graph.run(query(CONNECTIVITY_QUERY)).await.map_err(unreachable)?;

        tracing::info!(
            uri = %config.uri,
            database = %config.database,
            "Connected to Neo4j"
        );

        Ok(Self::from_graph(graph, &config.uri, &config.database))
    }

    /// Wrap an already connected graph (test harnesses build their own).
    pub fn from_graph(graph: Graph, uri: &str, database: &str) -> Self {
        Self {
            graph: RwLock::new(Some(graph)),
            uri: uri.to_string(),
            database: database.to_string(),
        }
    }

    /// A working handle scoped to the configured database.
    ///
    /// The handle shares the driver's pool; each query checks a connection
    /// out of it and returns it when done.
    pub async fn session(&self) -> Result<Graph, RepoError> {
        self.graph.read().await.clone().ok_or(RepoError::Disconnected)
    }

    /// Re-run the startup connectivity check.
    pub async fn verify_connectivity(&self) -> Result<(), RepoError> {
        let graph = self.session().await?;
        graph
            .run(query(CONNECTIVITY_QUERY))
            .await
            .map_err(|e| RepoError::database("verify_connectivity", e))
    }

    /// Release the handle. Calling it again is a no-op.
    ///
    /// In-flight queries keep their own clone of the handle and finish; the
    /// pool is dropped with the last clone.
    pub async fn close(&self) {
        if self.graph.write().await.take().is_some() {
            tracing::info!(uri = %self.uri, "Neo4j connection closed");
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.graph.read().await.is_none()
    }
}

#[async_trait]
impl DatabaseHealth for Neo4jConnection {
    async fn verify_connectivity(&self) -> Result<(), RepoError> {
        Neo4jConnection::verify_connectivity(self).await
    }
}

impl std::fmt::Debug for Neo4jConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jConnection")
            .field("uri", &self.uri)
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}
