// rest_api/src/handlers/pharmacy_portal.rs

use axum::extract::State;
use axum::routing::post;
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
        .route("/api/v1/pharmacy/signin", post(signin))
        .route("/api/v1/pharmacy/patient_history", post(patient_history))
}

#[derive(Debug, Deserialize)]
struct PharmacySignin {
    shop_id: String,
    password: String,
}

async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(payload): ApiJson<PharmacySignin>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Some(pharmacy) = state.store.get_pharmacy(&payload.shop_id).await? else {
        return Err(ApiError::InvalidCredentials);
    };
    if !password::verify_password(&payload.password, &pharmacy.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state
        .sessions
        .create(Principal::new(Role::Pharmacy, pharmacy.pharmacy_id.clone()))
        .await;
    info!(pharmacy_id = %pharmacy.pharmacy_id, "pharmacy signed in");
    Ok((
        jar.add(session_cookie(session.token)),
        Json(json!({
            "success": "Signed in",
            "pharmacy_id": pharmacy.pharmacy_id,
            "pharmacy_name": pharmacy.pharmacy_name,
        })),
    ))
}

#[derive(Debug, Deserialize)]
struct PatientHistory {
    patient_medical_id: String,
}

/// Consultation lookup for dispensing: history rows for a patient, most
/// recent first.
async fn patient_history(
    principal: Principal,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PatientHistory>,
) -> Result<Json<Value>, ApiError> {
    principal.require(Role::Pharmacy)?;

    let consultation_history = state
        .store
        .consultations_for_patient(&payload.patient_medical_id)
        .await?;
    if consultation_history.is_empty() {
        return Err(ApiError::NotFound("consultation records"));
    }

    Ok(Json(json!({ "consultation_history": consultation_history })))
}
