//! Infrastructure implementations.
//!
//! Contains configuration loading and the port trait implementations for
//! Neo4j and the system clock.

pub mod clock;
pub mod config;
pub mod neo4j;
pub mod ports;
