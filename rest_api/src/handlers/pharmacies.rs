// rest_api/src/handlers/pharmacies.rs

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use models::{NewPharmacy, UpdatePharmacy};
use security::password;
use security::{Principal, Role};

use crate::error::{entity, ApiError};
use crate::extract::ApiJson;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/pharmacies", get(list))
        .route("/api/v1/admin/pharmacies/add", post(add))
        .route("/api/v1/admin/pharmacies/edit", post(edit))
        .route(
            "/api/v1/admin/pharmacies/:pharmacy_id/reset_password",
            post(reset_password),
        )
        .route("/api/v1/admin/pharmacies/:pharmacy_id", delete(remove))
}

async fn list(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    let pharmacies = state.store.list_pharmacies().await?;
    Ok(Json(json!({ "pharmacies": pharmacies })))
}

async fn add(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewPharmacy>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    if !state.store.pharmacist_exists(&payload.pharmacist_id).await? {
        return Err(ApiError::NotFound("Pharmacist"));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let pharmacy = state.store.create_pharmacy(&payload, &password_hash).await?;
    Ok(Json(json!({
        "success": "Pharmacy added successfully",
        "pharmacy": pharmacy,
    })))
}

async fn edit(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdatePharmacy>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;

    let password_hash = match payload.password.as_deref().filter(|p| !p.is_empty()) {
        Some(plain) => Some(password::hash_password(plain)?),
        None => None,
    };
    let pharmacy = state
        .store
        .update_pharmacy(&payload, password_hash.as_deref())
        .await
        .map_err(|e| entity(e, "Pharmacy"))?;
    Ok(Json(json!({
        "success": "Pharmacy updated successfully",
        "pharmacy": pharmacy,
    })))
}

async fn remove(
    principal: Principal,
    State(state): State<AppState>,
    Path(pharmacy_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    state
        .store
        .delete_pharmacy(&pharmacy_id)
        .await
        .map_err(|e| entity(e, "Pharmacy"))?;
    Ok(Json(json!({ "success": "Pharmacy deleted successfully" })))
}

#[derive(Debug, Deserialize)]
struct ResetPharmacyPassword {
    password: String,
}

async fn reset_password(
    principal: Principal,
    State(state): State<AppState>,
    Path(pharmacy_id): Path<String>,
    ApiJson(payload): ApiJson<ResetPharmacyPassword>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    if payload.password.is_empty() {
        return Err(ApiError::validation("field 'password' is required"));
    }

    let password_hash = password::hash_password(&payload.password)?;
    state
        .store
        .set_pharmacy_password(&pharmacy_id, &password_hash)
        .await
        .map_err(|e| entity(e, "Pharmacy"))?;
    Ok(Json(json!({ "success": "Password reset successfully" })))
}
