//! myFun Engine library.
//!
//! Server-side code of the myFun profile settings service.
//!
//! ## Structure
//!
//! - `use_cases/` - Profile and settings operations over the repository ports
//! - `infrastructure/` - Ports plus their Neo4j, clock and config adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Integration tests against a real Neo4j via testcontainers.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
