// rest_api/src/handlers/consultations.rs

use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use models::{EditConsultation, NewConsultation};
use security::{Principal, Role};

use crate::error::{entity, ApiError};
use crate::extract::ApiJson;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/admin/consultations", get(list))
        .route("/api/v1/admin/consultations/add", post(add))
        .route("/api/v1/admin/consultations/edit", post(edit))
        .route("/api/v1/admin/consultations/:id", delete(remove))
}

async fn list(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    let consultations = state.store.list_consultations().await?;
    Ok(Json(json!({ "consultations": consultations })))
}

async fn add(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewConsultation>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    if !state.store.patient_exists(&payload.medical_id).await? {
        return Err(ApiError::NotFound("Patient"));
    }
    if state.store.get_doctor(payload.doctor_id).await?.is_none() {
        return Err(ApiError::NotFound("Doctor"));
    }

    let consultation = state
        .store
        .insert_consultation(
            &payload.medical_id,
            payload.doctor_id,
            payload.consultation_date,
            Some(&payload.description),
            Some(&payload.prescription),
            None,
        )
        .await?;
    Ok(Json(json!({
        "success": "Consultation added successfully",
        "consultation": consultation,
    })))
}

async fn edit(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EditConsultation>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    payload.validate()?;

    state
        .store
        .edit_consultation(&payload)
        .await
        .map_err(|e| entity(e, "Consultation"))?;
    Ok(Json(json!({ "success": "Consultation updated successfully" })))
}

async fn remove(
    principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Admin)?;
    state
        .store
        .delete_consultation(id)
        .await
        .map_err(|e| entity(e, "Consultation"))?;
    Ok(Json(json!({ "success": "Consultation deleted successfully" })))
}
