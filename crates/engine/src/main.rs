//! myFun Engine - Main entry point.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use myfun_engine::api;
use myfun_engine::infrastructure::{
    clock::SystemClock,
    config::{load_dotenv_from_repo_root, EngineConfig},
    neo4j::{ensure_schema, Neo4jConnection, Neo4jRepositories, QueryExecutor},
    ports::ClockPort,
};
use myfun_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "myfun_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting myFun Engine");

    let config = EngineConfig::from_env();

    // Connect to Neo4j
    tracing::info!(
        uri = %config.neo4j.uri,
        database = %config.neo4j.database,
        "Connecting to Neo4j"
    );
    let connection = Arc::new(Neo4jConnection::connect(&config.neo4j).await?);
    let executor = QueryExecutor::new(connection.clone());

    // Ensure database schema (constraints and indexes)
    ensure_schema(&executor).await?;

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let repos = Neo4jRepositories::new(executor, clock);
    let app = Arc::new(App::new(repos, connection.clone()));

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // The connection is closed whether or not the server came up.
    let served = serve(&config, router, shutdown_signal()).await;

    connection.close().await;
    tracing::info!("Shutting down myFun Engine");

    served
}

/// Bind the HTTP listener and serve until `shutdown` resolves.
async fn serve(
    config: &EngineConfig,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        // The extension sends JSON bodies, which trigger CORS preflights.
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            tracing::warn!(
                value = allowed_origins,
                "CORS_ALLOWED_ORIGINS has no valid origin, CORS disabled"
            );
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
