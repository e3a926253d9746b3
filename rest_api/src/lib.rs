// rest_api/src/lib.rs

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::FromRef;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use security::password;
use security::SessionStore;
use storage::Store;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;

pub use config::{load_config, ServerConfig};
pub use error::ApiError;


/// The seeded admin account; only the password hash is kept in memory.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password_hash: String,
}

/// Shared state for the axum application.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionStore,
    pub admin: Arc<AdminAccount>,
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> SessionStore {
        state.sessions.clone()
    }
}

// Handler for the /api/v1/health endpoint
async fn health_check_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "records API is healthy" })),
    )
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_origin(Any);

    Router::new()
        .route("/api/v1/health", get(health_check_handler))
        .merge(handlers::admin::router())
        .merge(handlers::patients::router())
        .merge(handlers::doctors::router())
        .merge(handlers::pharmacies::router())
        .merge(handlers::pharmacists::router())
        .merge(handlers::consultations::router())
        .merge(handlers::patient_portal::router())
        .merge(handlers::doctor_portal::router())
        .merge(handlers::pharmacy_portal::router())
        .merge(handlers::pharmacist_portal::router())
        .with_state(state)
        .layer(cors)
}

/// Opens the store, applies migrations and seeds the in-memory state.
/// Migrations run here, once, before the listener exists.
pub async fn build_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let store = Store::connect(&config.database_url)
        .await
        .context("failed to open the database")?;
    store
        .migrate()
        .await
        .context("failed to run database migrations")?;

    let password_hash = password::hash_password(&config.admin_password)
        .context("failed to hash the seeded admin password")?;

    Ok(AppState {
        store,
        sessions: SessionStore::with_ttl_secs(config.session_ttl_secs),
        admin: Arc::new(AdminAccount {
            username: config.admin_username.clone(),
            password_hash,
        }),
    })
}

// Main function to start the REST API server
pub async fn start_server(
    config: ServerConfig,
    shutdown_rx: oneshot::Receiver<()>,
) -> anyhow::Result<()> {
    let state = build_state(&config).await?;
    let app = router(state);

    let addr = SocketAddr::new(
        config.host.parse().context("invalid host address")?,
        config.port,
    );
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("failed to bind to address: {}", addr))?;
    info!(%addr, "records API server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .await
        .context("records API server failed")?;

    info!("records API server stopped");
    Ok(())
}
