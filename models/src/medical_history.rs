// models/src/medical_history.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Long-term medical background for a patient. This table has no write
/// route on the served surface; rows are read into the patient profile.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MedicalHistoryRecord {
    pub id: i64,
    pub medical_id: String,
    pub doctor_id: i64,
    pub known_allergies: Option<String>,
    pub chronic_diseases: Option<String>,
    pub past_surgeries: Option<String>,
    pub previous_hospitalizations: Option<String>,
    pub family_medical_history: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
