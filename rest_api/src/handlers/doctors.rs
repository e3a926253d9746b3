// rest_api/src/handlers/doctors.rs

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use models::{NewDoctor, UpdateDoctor};
use security::password;
use security::{Principal, Role};

use crate::error::{entity, ApiError};
use crate::extract::ApiJson;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/doctors", get(list))
        .route("/api/v1/admin/doctors/add", post(add))
        .route("/api/v1/admin/doctors/edit", post(edit))
        .route("/api/v1/admin/doctors/reset_password", post(reset_password))
        .route("/api/v1/admin/doctors/:doctor_id", delete(remove))
}

async fn list(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    let doctors = state.store.list_doctors().await?;
    Ok(Json(json!({ "doctors": doctors })))
}

async fn add(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewDoctor>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    let password_hash = password::hash_password(&payload.password)?;
    let doctor = state.store.create_doctor(&payload, &password_hash).await?;
    Ok(Json(json!({
        "success": "Doctor added successfully",
        "doctor": doctor,
    })))
}

async fn edit(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateDoctor>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    let password_hash = match payload.password.as_deref().filter(|p| !p.is_empty()) {
        Some(plain) => Some(password::hash_password(plain)?),
        None => None,
    };
    let doctor = state
        .store
        .update_doctor(&payload, password_hash.as_deref())
        .await
        .map_err(|e| entity(e, "Doctor"))?;
    Ok(Json(json!({
        "success": "Doctor updated successfully",
        "doctor": doctor,
    })))
}

async fn remove(
    principal: Principal,
    State(state): State<AppState>,
    Path(doctor_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    state
        .store
        .delete_doctor(doctor_id)
        .await
        .map_err(|e| entity(e, "Doctor"))?;
    Ok(Json(json!({ "success": "Doctor deleted successfully" })))
}

#[derive(Debug, Deserialize)]
struct ResetDoctorPassword {
    doctor_id: i64,
    new_password: String,
}

async fn reset_password(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetDoctorPassword>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    if payload.new_password.is_empty() {
        return Err(ApiError::validation("field 'new_password' is required"));
    }

    let password_hash = password::hash_password(&payload.new_password)?;
    state
        .store
        .set_doctor_password(payload.doctor_id, &password_hash)
        .await
        .map_err(|e| entity(e, "Doctor"))?;
    Ok(Json(json!({ "success": "Doctor password reset successfully" })))
}
