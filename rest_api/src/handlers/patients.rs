// rest_api/src/handlers/patients.rs

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use models::{EditPatient, NewPatient};
use security::password;
use security::{Principal, Role};

use crate::error::{entity, ApiError};
use crate::extract::ApiJson;
use crate::handlers::DEFAULT_PATIENT_PASSWORD;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/patients", get(list))
        .route("/api/v1/admin/patients/add", post(add))
        .route("/api/v1/admin/patients/edit", post(edit))
        .route("/api/v1/admin/patients/reset_password", post(reset_password))
        .route("/api/v1/admin/patients/:medical_id", delete(remove))
}

async fn list(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    let patients = state.store.list_patients().await?;
    Ok(Json(json!({ "patients": patients })))
}

async fn add(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewPatient>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    let supplied = payload.password.as_deref().filter(|p| !p.is_empty());
    let password_hash =
        password::hash_password(supplied.unwrap_or(DEFAULT_PATIENT_PASSWORD))?;
    let patient = state.store.create_patient(&payload, &password_hash).await?;

    Ok(Json(json!({
        "success": "Patient added successfully",
        "patient": patient,
    })))
}

async fn edit(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EditPatient>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    state
        .store
        .edit_patient(&payload)
        .await
        .map_err(|e| entity(e, "Patient"))?;
    Ok(Json(json!({ "success": "Patient updated successfully" })))
}

async fn remove(
    principal: Principal,
    State(state): State<AppState>,
    Path(medical_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    state
        .store
        .delete_patient(&medical_id)
        .await
        .map_err(|e| entity(e, "Patient"))?;
    Ok(Json(json!({ "success": "Patient deleted successfully" })))
}

#[derive(Debug, Deserialize)]
struct ResetPatientPassword {
    medical_id: String,
}

/// Issues a fresh random password and returns the plaintext exactly once;
/// only its hash is stored.
async fn reset_password(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetPatientPassword>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;

    let new_password = password::random_password(8);
    let password_hash = password::hash_password(&new_password)?;
    state
        .store
        .set_patient_password(&payload.medical_id, &password_hash)
        .await
        .map_err(|e| entity(e, "Patient"))?;

    Ok(Json(json!({
        "success": "Password reset successful",
        "new_password": new_password,
    })))
}
