// models/src/pharmacy.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::validate;

/// A pharmacy outlet. One pharmacist owns at most one pharmacy, enforced by
/// the unique constraint on `pharmacist_id`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Pharmacy {
    pub pharmacy_id: String,
    pub pharmacy_name: String,
    pub location: String,
    pub pharmacist_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPharmacy {
    pub pharmacy_name: String,
    pub location: String,
    pub pharmacist_id: String,
    pub password: String,
}

impl NewPharmacy {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("pharmacy_name", &self.pharmacy_name)?;
        validate::non_empty("location", &self.location)?;
        validate::non_empty("pharmacist_id", &self.pharmacist_id)?;
        validate::non_empty("password", &self.password)?;
        Ok(())
    }
}

/// Pharmacy edit payload: merge-not-replace.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePharmacy {
    pub pharmacy_id: String,
    pub pharmacy_name: Option<String>,
    pub location: Option<String>,
    pub pharmacist_id: Option<String>,
    pub password: Option<String>,
}
