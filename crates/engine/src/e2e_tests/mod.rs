//! Backend integration tests.
//!
//! These tests run against a real Neo4j database started with
//! testcontainers and are ignored by default.
//!
//! # Running
//!
//! ```bash
//! # Requires Docker
//! cargo test -p myfun-engine --lib -- --ignored --test-threads=1
//! ```

mod neo4j_test_harness;

pub use neo4j_test_harness::*;
