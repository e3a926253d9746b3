// rest_api/src/handlers/doctor_portal.rs

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
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
        .route("/api/v1/doctor/signin", post(signin))
        .route("/api/v1/doctor/search_patient", post(search_patient))
        .route("/api/v1/doctor/consultations/add", post(add_consultation))
        .route("/api/v1/doctor/consultations/view", post(view_history))
}

#[derive(Debug, Deserialize)]
struct DoctorSignin {
    doctor_id: i64,
    password: String,
}

async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<DoctorSignin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Some(doctor) = state.store.get_doctor(payload.doctor_id).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    if !password::verify_password(&payload.password, &doctor.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(Principal::new(Role::Doctor, doctor.doctor_id.to_string()))
        .await;
    info!(doctor_id = doctor.doctor_id, "doctor signed in");
    Ok((
        jar.add(session_cookie(session.token)),
        Json(json!({
            "success": "Signed in",
            "doctor_id": doctor.doctor_id,
            "name": doctor.name,
        })),
    ))
}

/// Resolves the signed-in doctor's integer id out of the principal.
fn doctor_id_of(principal: &Principal) -> Result<i64, ApiError> {
    principal.id.parse().map_err(|_| ApiError::Unauthenticated)
}

#[derive(Debug, Deserialize)]
struct SearchPatient {
    medical_id: String,
}

async fn search_patient(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SearchPatient>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Doctor)?;
    if payload.medical_id.is_empty() {
        return Err(ApiError::validation("field 'medical_id' is required"));
    }

    let patient = state
        .store
        .get_patient(&payload.medical_id)
        .await?
        .ok_or(ApiError::NotFound("Patient"))?;
    let consultation_history = state
        .store
        .consultations_for_patient(&patient.medical_id)
        .await?;

    Ok(Json(json!({
        "success": format!(
            "Found {} records for patient {}",
            consultation_history.len(),
            patient.medical_id
        ),
        "patient": patient,
        "consultation_history": consultation_history,
    })))
}

#[derive(Debug, Deserialize)]
struct DoctorConsultation {
    patient_medical_id: String,
    description: Option<String>,
    prescription: Option<String>,
    report_link: Option<String>,
}

/// Records a visit against an existing patient. The treating doctor comes
/// from the session, the visit date is today.
async fn add_consultation(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DoctorConsultation>,
) -> Result<Json<Value>, ApiError> {
    let principal = principal.require(Role::Doctor)?;
    let doctor_id = doctor_id_of(principal)?;

    if !state.store.patient_exists(&payload.patient_medical_id).await? {
        return Err(ApiError::NotFound("Patient"));
    }

    let consultation = state
        .store
        .insert_consultation(
            &payload.patient_medical_id,
            doctor_id,
            Utc::now().date_naive(),
            payload.description.as_deref(),
            payload.prescription.as_deref(),
            payload.report_link.as_deref(),
        )
        .await?;

    Ok(Json(json!({
        "success": "Consultation record added successfully",
        "consultation": consultation,
    })))
}

#[derive(Debug, Deserialize)]
struct ViewHistory {
    medical_id: String,
}

async fn view_history(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ViewHistory>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Doctor)?;
    if payload.medical_id.is_empty() {
        return Err(ApiError::validation("field 'medical_id' is required"));
    }

    let consultation_history = state
        .store
        .consultations_with_doctor(&payload.medical_id)
        .await?;
    if consultation_history.is_empty() {
        return Err(ApiError::NotFound("consultation records"));
    }

    Ok(Json(json!({ "consultation_history": consultation_history })))
}
