//! Process configuration read from the environment.
//!
//! Supported environment variables:
//! - NEO4J_URI, NEO4J_USER, NEO4J_PASSWORD, NEO4J_DATABASE
//! - NEO4J_MAX_CONNECTIONS: driver pool size (range: 1-512)
//! - API_HOST, API_PORT (PORT is accepted as a fallback)
//! - CORS_ALLOWED_ORIGINS: `*` or a comma-separated origin list; unset disables CORS

use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7688";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_PASSWORD: &str = "myfun123";
const DEFAULT_NEO4J_DATABASE: &str = "myfun";
const DEFAULT_MAX_CONNECTIONS: usize = 16;
const DEFAULT_API_HOST: &str = "0.0.0.0";
const DEFAULT_API_PORT: u16 = 8000;

/// Neo4j connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    /// Database namespace every session is scoped to.
    pub database: String,
    pub max_connections: usize,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_NEO4J_URI.to_string(),
            user: DEFAULT_NEO4J_USER.to_string(),
            password: DEFAULT_NEO4J_PASSWORD.to_string(),
            database: DEFAULT_NEO4J_DATABASE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub neo4j: Neo4jConfig,
    pub api_host: String,
    pub api_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neo4j: Neo4jConfig::default(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let max_connections = match var("NEO4J_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if (1..=512).contains(&n) => n,
                Ok(n) => {
                    tracing::warn!(n, "NEO4J_MAX_CONNECTIONS out of range [1, 512], ignoring");
                    DEFAULT_MAX_CONNECTIONS
                }
                Err(_) => {
                    tracing::warn!(val = %raw, "NEO4J_MAX_CONNECTIONS is not a valid number, ignoring");
                    DEFAULT_MAX_CONNECTIONS
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let api_port = match var("API_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(val = %raw, "API_PORT is not a valid port, using {}", DEFAULT_API_PORT);
                DEFAULT_API_PORT
            }),
            None => DEFAULT_API_PORT,
        };

        Self {
            neo4j: Neo4jConfig {
                uri: var("NEO4J_URI").unwrap_or(defaults.neo4j.uri),
                user: var("NEO4J_USER").unwrap_or(defaults.neo4j.user),
                password: var("NEO4J_PASSWORD").unwrap_or(defaults.neo4j.password),
                database: var("NEO4J_DATABASE").unwrap_or(defaults.neo4j.database),
                max_connections,
            },
            api_host: var("API_HOST").unwrap_or(defaults.api_host),
            api_port,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        }
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.api_host, self.api_port).parse()
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
///
/// Variables already set in the process environment are never overridden.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load env file");
            }
        }
    }
}
