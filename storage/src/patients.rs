// storage/src/patients.rs

use chrono::Utc;
use models::{EditPatient, NewPatient, Patient};
use tracing::info;

use crate::errors::{unique_or, StorageError, StorageResult};
use crate::{ids, Store};

impl Store {
    pub async fn patient_exists(&self, medical_id: &str) -> StorageResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM patients WHERE medical_id = ?",
        )
        .bind(medical_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found > 0)
    }

    /// Creates a patient under a freshly allocated medical id. Used by both
    /// admin add and self-signup; the caller supplies the password already
    /// hashed.
    pub async fn create_patient(
        &self,
        new: &NewPatient,
        password_hash: &str,
    ) -> StorageResult<Patient> {
        let medical_id = ids::allocate(|id| async move { self.patient_exists(&id).await }).await?;
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO patients (medical_id, name, aadhaar_number, mobile_number, \
             date_of_birth, gender, blood_group, address, password_hash, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&medical_id)
        .bind(&new.name)
        .bind(&new.aadhaar_number)
        .bind(&new.mobile_number)
        .bind(new.date_of_birth)
        .bind(new.gender)
        .bind(new.blood_group)
        .bind(&new.address)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "aadhaar_number"))?;

        info!(%medical_id, "patient record created");
        self.get_patient(&medical_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list_patients(&self) -> StorageResult<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients")
            .fetch_all(&self.pool)
            .await?;
        Ok(patients)
    }

    pub async fn get_patient(&self, medical_id: &str) -> StorageResult<Option<Patient>> {
        let patient =
            sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE medical_id = ?")
                .bind(medical_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(patient)
    }

    /// Full-field replace keyed by medical id; the id itself is immutable.
    pub async fn edit_patient(&self, edit: &EditPatient) -> StorageResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE patients SET name = ?, aadhaar_number = ?, mobile_number = ?, \
             date_of_birth = ?, gender = ?, blood_group = ?, address = ?, updated_at = ? \
             WHERE medical_id = ?",
        )
        .bind(&edit.name)
        .bind(&edit.aadhaar_number)
        .bind(&edit.mobile_number)
        .bind(edit.date_of_birth)
        .bind(edit.gender)
        .bind(edit.blood_group)
        .bind(&edit.address)
        .bind(now)
        .bind(&edit.medical_id)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "aadhaar_number"))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn set_patient_password(
        &self,
        medical_id: &str,
        password_hash: &str,
    ) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE patients SET password_hash = ?, updated_at = ? WHERE medical_id = ?",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(medical_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Deletes a patient and every history row that references it, in one
    /// transaction, so a partial failure cannot orphan history rows.
    pub async fn delete_patient(&self, medical_id: &str) -> StorageResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM consultation_history WHERE medical_id = ?")
            .bind(medical_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM medical_history WHERE medical_id = ?")
            .bind(medical_id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM patients WHERE medical_id = ?")
            .bind(medical_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        tx.commit().await?;

        info!(%medical_id, "patient record deleted");
        Ok(())
    }
}
