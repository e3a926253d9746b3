// rest_api/src/handlers/patient_portal.rs
//
// The patient-facing surface: self-signup, sign-in and the profile view
// combining the record with both history tables.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use models::NewPatient;
use security::password;
use security::{Principal, Role};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::{session_cookie, DEFAULT_PATIENT_PASSWORD};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/patient/signup", post(signup))
        .route("/api/v1/patient/signin", post(signin))
        .route("/api/v1/patient/profile", get(profile))
}

async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewPatient>,
) -> Result<Json<Value>, ApiError> {
    payload.validate()?;

    let supplied = payload.password.as_deref().filter(|p| !p.is_empty());
    let password_hash =
        password::hash_password(supplied.unwrap_or(DEFAULT_PATIENT_PASSWORD))?;
    let patient = state.store.create_patient(&payload, &password_hash).await?;

    info!(medical_id = %patient.medical_id, "patient signed up");
    Ok(Json(json!({
        "success": "Signup successful",
        "medical_id": patient.medical_id,
    })))
}

#[derive(Debug, Deserialize)]
struct PatientSignin {
    identifier: String,
    password: String,
}

async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<PatientSignin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Some(patient) = state.store.get_patient(&payload.identifier).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    if !password::verify_password(&payload.password, &patient.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(Principal::new(Role::Patient, patient.medical_id.clone()))
        .await;
    info!(medical_id = %patient.medical_id, "patient signed in");
    Ok((
        jar.add(session_cookie(session.token)),
        Json(json!({
            "success": "Signed in",
            "medical_id": patient.medical_id,
        })),
    ))
}

async fn profile(
    principal: Principal,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let principal = principal.require(Role::Patient)?;
    let medical_id = &principal.id;

    let patient = state
        .store
        .get_patient(medical_id)
        .await?
        .ok_or(ApiError::NotFound("Patient"))?;
    let consultation_history = state.store.consultations_for_patient(medical_id).await?;
    let medical_history = state.store.medical_history_for_patient(medical_id).await?;

    Ok(Json(json!({
        "patient": patient,
        "consultation_history": consultation_history,
        "medical_history": medical_history,
    })))
}
