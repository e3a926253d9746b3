// rest_api/src/handlers/mod.rs

use axum_extra::extract::cookie::Cookie;

use security::session::SESSION_COOKIE;

pub mod admin;
pub mod consultations;
pub mod doctor_portal;
pub mod doctors;
pub mod patient_portal;
pub mod patients;
pub mod pharmacies;
pub mod pharmacist_portal;
pub mod pharmacists;
pub mod pharmacy_portal;

/// Credential every patient record starts with when none is supplied.
pub(crate) const DEFAULT_PATIENT_PASSWORD: &str = "1111";

pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}
