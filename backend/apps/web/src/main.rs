//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-time errors are
//! `auth::AuthError`, rendered as problem-details JSON.
//!
//! The binary only restores the persisted session and logs its changes.
//! Nothing here produces `auth::domain::AuthChange` events: the auth provider's
//! client feeds them through `SessionStore::listen`.

use anyhow::Context;
use auth::{GateConfig, SessionStore, gated_pages_router};
use axum::{Router, routing::get};
use platform::storage::{FileStorage, KeyValueStorage};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,platform=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gate_config = GateConfig::from_env().context("Invalid gate configuration")?;
    tracing::info!(
        cookie = %gate_config.cookie_name,
        public_routes = ?gate_config.routes.public_routes().collect::<Vec<_>>(),
        anonymous_only_routes = ?gate_config.routes.anonymous_only_routes().collect::<Vec<_>>(),
        "Gate configured"
    );

    // Session store: persistent when a storage directory is configured
    let storage: Option<Arc<dyn KeyValueStorage>> = match env::var("SESSION_STORAGE_DIR") {
        Ok(dir) => Some(Arc::new(
            FileStorage::open(&dir).with_context(|| format!("Cannot open session storage {dir}"))?,
        )),
        Err(_) => None,
    };
    let sessions = SessionStore::new(storage);
    if sessions.init() {
        tracing::info!("Session restored from storage");
    } else if !sessions.has_persistent_storage() {
        tracing::info!("No session storage configured, running in memory");
    }

    // Restore-and-report only; an auth client wires itself in via `listen`
    let mut session_changes = sessions.subscribe();
    tokio::spawn(async move {
        while session_changes.changed().await.is_ok() {
            let authenticated = session_changes.borrow_and_update().authenticated;
            tracing::info!(authenticated, "Auth state changed");
        }
    });

    let app = build_app(gate_config).layer(TraceLayer::new_for_http());

    // Start server
    let port = match env::var("PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT: {raw}"))?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `/health` answers before the gate; everything else goes through it.
fn build_app(gate_config: GateConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(gated_pages_router(gate_config))
}

/// GET /health
async fn health() -> &'static str {
    "OK"
}
