// rest_api/src/handlers/pharmacist_portal.rs

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use security::password;
use security::{Principal, Role};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::session_cookie;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/pharmacist/signin", post(signin))
        .route("/api/v1/pharmacist/profile", get(profile))
}

#[derive(Debug, Deserialize)]
struct PharmacistSignin {
    pharmacist_id: String,
    password: String,
}

async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<PharmacistSignin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Some(pharmacist) = state.store.get_pharmacist(&payload.pharmacist_id).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    if !password::verify_password(&payload.password, &pharmacist.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(Principal::new(
            Role::Pharmacist,
            pharmacist.pharmacist_id.clone(),
        ))
        .await;
    info!(pharmacist_id = %pharmacist.pharmacist_id, "pharmacist signed in");
    Ok((
        jar.add(session_cookie(session.token)),
        Json(json!({
            "success": "Signed in",
            "pharmacist_id": pharmacist.pharmacist_id,
        })),
    ))
}

async fn profile(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let principal = principal.require(Role::Pharmacist)?;
    let pharmacist = state
        .store
        .get_pharmacist(&principal.id)
        .await?
        .ok_or(ApiError::NotFound("Pharmacist"))?;
    Ok(Json(json!({ "pharmacist": pharmacist })))
}
