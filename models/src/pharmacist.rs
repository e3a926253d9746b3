// models/src/pharmacist.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Pharmacist {
    pub pharmacist_id: String,
    pub pharmacist_name: String,
    pub mobile_number: String,
    pub license_number: String,
    pub aadhaar_number: String,
    pub email_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPharmacist {
    pub pharmacist_name: String,
    pub mobile_number: String,
    pub license_number: String,
    pub aadhaar_number: String,
    pub email_id: String,
    pub password: String,
}

impl NewPharmacist {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("pharmacist_name", &self.pharmacist_name)?;
        validate::digit_range("mobile_number", &self.mobile_number, 10, 15)?;
        validate::non_empty("license_number", &self.license_number)?;
        validate::digits("aadhaar_number", &self.aadhaar_number, 12)?;
        validate::email("email_id", &self.email_id)?;
        validate::non_empty("password", &self.password)?;
        Ok(())
    }
}

/// Pharmacist edit payload: merge-not-replace.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePharmacist {
    pub pharmacist_id: String,
    pub pharmacist_name: Option<String>,
    pub mobile_number: Option<String>,
    pub license_number: Option<String>,
    pub aadhaar_number: Option<String>,
    pub email_id: Option<String>,
    pub password: Option<String>,
}

impl UpdatePharmacist {
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(ref mobile) = self.mobile_number {
            validate::digit_range("mobile_number", mobile, 10, 15)?;
        }
        if let Some(ref aadhaar) = self.aadhaar_number {
            validate::digits("aadhaar_number", aadhaar, 12)?;
        }
        if let Some(ref email) = self.email_id {
            validate::email("email_id", email)?;
        }
        Ok(())
    }
}
