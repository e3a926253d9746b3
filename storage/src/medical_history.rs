// storage/src/medical_history.rs
//
// Medical history has no write route on the served surface; rows arrive
// out-of-band and are read into the patient profile. The insert below is
// the seam that out-of-band population (and the tests) go through.

use chrono::Utc;
use models::MedicalHistoryRecord;

use crate::errors::{StorageError, StorageResult};
use crate::Store;

#[derive(Debug, Clone, Default)]
pub struct NewMedicalHistory {
    pub medical_id: String,
    pub doctor_id: i64,
    pub known_allergies: Option<String>,
    pub chronic_diseases: Option<String>,
    pub past_surgeries: Option<String>,
    pub previous_hospitalizations: Option<String>,
    pub family_medical_history: Option<String>,
}

impl Store {
    pub async fn insert_medical_history(
        &self,
        new: &NewMedicalHistory,
    ) -> StorageResult<MedicalHistoryRecord> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO medical_history (medical_id, doctor_id, known_allergies, \
             chronic_diseases, past_surgeries, previous_hospitalizations, \
             family_medical_history, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.medical_id)
        .bind(new.doctor_id)
        .bind(&new.known_allergies)
        .bind(&new.chronic_diseases)
        .bind(&new.past_surgeries)
        .bind(&new.previous_hospitalizations)
        .bind(&new.family_medical_history)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        let record = sqlx::query_as::<_, MedicalHistoryRecord>(
            "SELECT * FROM medical_history WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        record.ok_or(StorageError::NotFound)
    }

    /// A patient's medical background, most recently updated first.
    pub async fn medical_history_for_patient(
        &self,
        medical_id: &str,
    ) -> StorageResult<Vec<MedicalHistoryRecord>> {
        let records = sqlx::query_as::<_, MedicalHistoryRecord>(
            "SELECT * FROM medical_history WHERE medical_id = ? ORDER BY updated_at DESC",
        )
        .bind(medical_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
