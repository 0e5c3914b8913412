//! Query executor: one parameterized statement per call.
//!
//! Reads run in auto-commit mode; writes run inside an explicit transaction
//! that covers exactly that one statement. Rows are materialized eagerly and
//! decoded by a caller-supplied converter.

use std::sync::Arc;
use std::time::Instant;

use neo4rs::{Query, Row, Txn};

use super::connection::Neo4jConnection;
use crate::infrastructure::ports::RepoError;

#[derive(Clone)]
pub struct QueryExecutor {
    connection: Arc<Neo4jConnection>,
}

impl QueryExecutor {
    pub fn new(connection: Arc<Neo4jConnection>) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &Arc<Neo4jConnection> {
        &self.connection
    }

    /// Execute a read query and collect results using a converter function.
    pub async fn read<T, F>(
        &self,
        query: Query,
        operation: &'static str,
        converter: F,
    ) -> Result<Vec<T>, RepoError>
    where
        F: Fn(Row) -> Result<T, RepoError>,
    {
        let graph = self.connection.session().await?;
        let start = Instant::now();

        let mut result = graph
            .execute(query)
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let mut items = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database(operation, e))?
        {
            items.push(converter(row)?);
        }

        record(operation, start, items.len());
        Ok(items)
    }

    /// Execute a read query and return the first result, if any.
    pub async fn read_first<T, F>(
        &self,
        query: Query,
        operation: &'static str,
        converter: F,
    ) -> Result<Option<T>, RepoError>
    where
        F: Fn(Row) -> Result<T, RepoError>,
    {
        Ok(self
            .read(query, operation, converter)
            .await?
            .into_iter()
            .next())
    }

    /// Execute a write statement inside its own transaction.
    ///
    /// The transaction is committed before any row is decoded, so a converter
    /// failure never leaves it open. A failing statement is rolled back.
    pub async fn write<T, F>(
        &self,
        query: Query,
        operation: &'static str,
        converter: F,
    ) -> Result<Vec<T>, RepoError>
    where
        F: Fn(Row) -> Result<T, RepoError>,
    {
        let graph = self.connection.session().await?;
        let start = Instant::now();

        let mut txn = graph
            .start_txn()
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let rows = match collect_in_txn(&mut txn, query).await {
            Ok(rows) => rows,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        operation,
                        error = %rollback_err,
                        "Rollback after failed write also failed"
                    );
                }
                return Err(RepoError::database(operation, e));
            }
        };

        txn.commit()
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        record(operation, start, rows.len());
        rows.into_iter().map(converter).collect()
    }

    /// Execute an auto-commit statement with no return value.
    pub async fn run(&self, query: Query, operation: &'static str) -> Result<(), RepoError> {
        let graph = self.connection.session().await?;
        let start = Instant::now();
        graph
            .run(query)
            .await
            .map_err(|e| RepoError::database(operation, e))?;
        record(operation, start, 0);
        Ok(())
    }
}

async fn collect_in_txn(txn: &mut Txn, query: Query) -> Result<Vec<Row>, neo4rs::Error> {
    let mut stream = txn.execute(query).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await? {
        rows.push(row);
    }
    Ok(rows)
}

fn record(operation: &'static str, start: Instant, rows: usize) {
    tracing::trace!(
        operation,
        rows,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Neo4j query finished"
    );
}
