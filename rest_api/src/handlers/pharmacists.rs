// rest_api/src/handlers/pharmacists.rs

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use models::{NewPharmacist, UpdatePharmacist};
use security::password;
use security::{Principal, Role};

use crate::error::{entity, ApiError};
use crate::extract::ApiJson;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/pharmacists", get(list))
        .route("/api/v1/admin/pharmacists/add", post(add))
        .route("/api/v1/admin/pharmacists/edit", post(edit))
        .route(
            "/api/v1/admin/pharmacists/reset_password",
            post(reset_password),
        )
        .route("/api/v1/admin/pharmacists/:pharmacist_id", delete(remove))
}

async fn list(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    let pharmacists = state.store.list_pharmacists().await?;
    Ok(Json(json!({ "pharmacists": pharmacists })))
}

async fn add(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewPharmacist>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    let password_hash = password::hash_password(&payload.password)?;
    let pharmacist = state
        .store
        .create_pharmacist(&payload, &password_hash)
        .await?;
    Ok(Json(json!({
        "success": "Pharmacist added successfully",
        "pharmacist": pharmacist,
    })))
}

async fn edit(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdatePharmacist>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    let password_hash = match payload.password.as_deref().filter(|p| !p.is_empty()) {
        Some(plain) => Some(password::hash_password(plain)?),
        None => None,
    };
    let pharmacist = state
        .store
        .update_pharmacist(&payload, password_hash.as_deref())
        .await
        .map_err(|e| entity(e, "Pharmacist"))?;
    Ok(Json(json!({
        "success": "Pharmacist updated successfully",
        "pharmacist": pharmacist,
    })))
}

async fn remove(
    principal: Principal,
    State(state): State<AppState>,
    Path(pharmacist_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    state
        .store
        .delete_pharmacist(&pharmacist_id)
        .await
        .map_err(|e| entity(e, "Pharmacist"))?;
    Ok(Json(json!({ "success": "Pharmacist deleted successfully" })))
}

#[derive(Debug, Deserialize)]
struct ResetPharmacistPassword {
    pharmacist_id: String,
    new_password: String,
}

async fn reset_password(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetPharmacistPassword>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    if payload.new_password.is_empty() {
        return Err(ApiError::validation("field 'new_password' is required"));
    }

    let password_hash = password::hash_password(&payload.new_password)?;
    state
        .store
        .set_pharmacist_password(&payload.pharmacist_id, &password_hash)
        .await
        .map_err(|e| entity(e, "Pharmacist"))?;
    Ok(Json(
        json!({ "success": "Pharmacist password reset successfully" }),
    ))
}
