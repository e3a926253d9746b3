// rest_api/src/handlers/admin.rs

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use security::password;
use security::session::SESSION_COOKIE;
use security::{Principal, Role};
use storage::DashboardCounts;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::session_cookie;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/login", post(login))
        .route("/api/v1/logout", post(logout))
        .route("/api/v1/admin/dashboard", get(dashboard))
}

#[derive(Debug, Deserialize)]
struct AdminLogin {
    username: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<AdminLogin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let admin = &state.admin;
    let matches = payload.username == admin.username
        && password::verify_password(&payload.password, &admin.password_hash)?;
    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(Principal::new(Role::Admin, admin.username.clone()))
        .await;
    info!(username = %admin.username, "admin signed in");
    Ok((
        jar.add(session_cookie(session.token)),
        Json(json!({ "success": "Signed in" })),
    ))
}

/// Destroys the current session regardless of role. Unauthenticated calls
/// are a harmless no-op.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    Ok((
        jar.remove(removal),
        Json(json!({ "success": "Signed out" })),
    ))
}

async fn dashboard(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>, ApiError> {
    principal.require(Role::Admin)?;
    let counts = state.store.dashboard_counts().await?;
    Ok(Json(counts))
}
