// models/src/consultation.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ConsultationRecord {
    pub id: i64,
    pub medical_id: String,
    pub doctor_id: i64,
    pub consultation_date: NaiveDate,
    pub description: Option<String>,
    pub prescription: Option<String>,
    pub report_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A consultation row joined with the treating doctor's name, for the
/// doctor-facing history view.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ConsultationWithDoctor {
    pub id: i64,
    pub medical_id: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub consultation_date: NaiveDate,
    pub description: Option<String>,
    pub prescription: Option<String>,
    pub report_link: Option<String>,
}

/// Admin create payload; every field is required on this surface.
#[derive(Debug, Clone, Deserialize)]
pub struct NewConsultation {
    pub medical_id: String,
    pub doctor_id: i64,
    pub consultation_date: NaiveDate,
    pub description: String,
    pub prescription: String,
}

impl NewConsultation {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::digits("medical_id", &self.medical_id, 12)?;
        validate::non_empty("description", &self.description)?;
        validate::non_empty("prescription", &self.prescription)?;
        Ok(())
    }
}

/// Admin edit payload: the date and the visit notes.
#[derive(Debug, Clone, Deserialize)]
pub struct EditConsultation {
    pub consultation_id: i64,
    pub date: NaiveDate,
    pub notes: String,
}

impl EditConsultation {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("notes", &self.notes)?;
        Ok(())
    }
}
