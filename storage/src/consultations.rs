// storage/src/consultations.rs

use chrono::{NaiveDate, Utc};
use models::{ConsultationRecord, ConsultationWithDoctor, EditConsultation};
use tracing::info;

use crate::errors::{StorageError, StorageResult};
use crate::Store;

impl Store {
    /// Inserts a consultation row. Admin creation requires description and
    /// prescription up front; the doctor surface passes whatever the visit
    /// produced, so the optional fields stay optional here.
    pub async fn insert_consultation(
        &self,
        medical_id: &str,
        doctor_id: i64,
        consultation_date: NaiveDate,
        description: Option<&str>,
        prescription: Option<&str>,
        report_link: Option<&str>,
    ) -> StorageResult<ConsultationRecord> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO consultation_history (medical_id, doctor_id, consultation_date, \
             description, prescription, report_link, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(medical_id)
        .bind(doctor_id)
        .bind(consultation_date)
        .bind(description)
        .bind(prescription)
        .bind(report_link)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(%medical_id, doctor_id, id, "consultation record created");
        self.get_consultation(id).await?.ok_or(StorageError::NotFound)
    }

    pub async fn get_consultation(&self, id: i64) -> StorageResult<Option<ConsultationRecord>> {
        let record = sqlx::query_as::<_, ConsultationRecord>(
            "SELECT * FROM consultation_history WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Admin listing, joined against patients and doctors the way the
    /// display table presents them.
    pub async fn list_consultations(&self) -> StorageResult<Vec<ConsultationRecord>> {
        let records = sqlx::query_as::<_, ConsultationRecord>(
            "SELECT c.id, c.medical_id, c.doctor_id, c.consultation_date, c.description, \
             c.prescription, c.report_link, c.created_at, c.updated_at \
             FROM consultation_history c \
             JOIN patients p ON p.medical_id = c.medical_id \
             JOIN doctors d ON d.doctor_id = c.doctor_id \
             ORDER BY c.consultation_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// A patient's consultation history, most recent visit first.
    pub async fn consultations_for_patient(
        &self,
        medical_id: &str,
    ) -> StorageResult<Vec<ConsultationRecord>> {
        let records = sqlx::query_as::<_, ConsultationRecord>(
            "SELECT * FROM consultation_history WHERE medical_id = ? \
             ORDER BY consultation_date DESC",
        )
        .bind(medical_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Same history, each row carrying the treating doctor's name.
    pub async fn consultations_with_doctor(
        &self,
        medical_id: &str,
    ) -> StorageResult<Vec<ConsultationWithDoctor>> {
        let records = sqlx::query_as::<_, ConsultationWithDoctor>(
            "SELECT c.id, c.medical_id, c.doctor_id, d.name AS doctor_name, \
             c.consultation_date, c.description, c.prescription, c.report_link \
             FROM consultation_history c \
             JOIN doctors d ON d.doctor_id = c.doctor_id \
             WHERE c.medical_id = ? \
             ORDER BY c.consultation_date DESC",
        )
        .bind(medical_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Admin edit touches the visit date and the notes.
    pub async fn edit_consultation(&self, edit: &EditConsultation) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE consultation_history SET consultation_date = ?, description = ?, \
             updated_at = ? WHERE id = ?",
        )
        .bind(edit.date)
        .bind(&edit.notes)
        .bind(Utc::now())
        .bind(edit.consultation_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_consultation(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM consultation_history WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        info!(id, "consultation record deleted");
        Ok(())
    }
}
