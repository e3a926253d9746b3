// storage/src/doctors.rs

use chrono::Utc;
use models::{Doctor, DoctorStatus, NewDoctor, UpdateDoctor};
use tracing::info;

use crate::errors::{unique_or, StorageError, StorageResult};
use crate::Store;

impl Store {
    pub async fn create_doctor(
        &self,
        new: &NewDoctor,
        password_hash: &str,
    ) -> StorageResult<Doctor> {
        let now = Utc::now();
        let status = new.status.unwrap_or_default();
        let result = sqlx::query(
            "INSERT INTO doctors (name, specialization, password_hash, email, phone_number, \
             address, gender, date_of_birth, license_number, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(&new.specialization)
        .bind(password_hash)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(&new.address)
        .bind(new.gender)
        .bind(new.date_of_birth)
        .bind(&new.license_number)
        .bind(status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "email or license_number"))?;

        let doctor_id = result.last_insert_rowid();
        info!(doctor_id, "doctor record created");
        self.get_doctor(doctor_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list_doctors(&self) -> StorageResult<Vec<Doctor>> {
        let doctors = sqlx::query_as::<_, Doctor>("SELECT * FROM doctors")
            .fetch_all(&self.pool)
            .await?;
        Ok(doctors)
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> StorageResult<Option<Doctor>> {
        let doctor = sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE doctor_id = ?")
            .bind(doctor_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doctor)
    }

    /// Merge-not-replace: fields absent from the payload keep their stored
    /// values. The caller hashes a new password if one was supplied.
    pub async fn update_doctor(
        &self,
        update: &UpdateDoctor,
        password_hash: Option<&str>,
    ) -> StorageResult<Doctor> {
        let existing = self
            .get_doctor(update.doctor_id)
            .await?
            .ok_or(StorageError::NotFound)?;

        let name = update.name.as_deref().unwrap_or(&existing.name);
        let specialization = update
            .specialization
            .as_deref()
            .unwrap_or(&existing.specialization);
        let password_hash = password_hash.unwrap_or(&existing.password_hash);
        let email = update.email.as_deref().unwrap_or(&existing.email);
        let phone_number = update
            .phone_number
            .as_deref()
            .unwrap_or(&existing.phone_number);
        let address = update.address.as_deref().or(existing.address.as_deref());
        let gender = update.gender.unwrap_or(existing.gender);
        let date_of_birth = update.date_of_birth.unwrap_or(existing.date_of_birth);
        let license_number = update
            .license_number
            .as_deref()
            .unwrap_or(&existing.license_number);
        let status: DoctorStatus = update.status.unwrap_or(existing.status);

        sqlx::query(
            "UPDATE doctors SET name = ?, specialization = ?, password_hash = ?, email = ?, \
             phone_number = ?, address = ?, gender = ?, date_of_birth = ?, license_number = ?, \
             status = ?, updated_at = ? WHERE doctor_id = ?",
        )
        .bind(name)
        .bind(specialization)
        .bind(password_hash)
        .bind(email)
        .bind(phone_number)
        .bind(address)
        .bind(gender)
        .bind(date_of_birth)
        .bind(license_number)
        .bind(status)
        .bind(Utc::now())
        .bind(update.doctor_id)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "email or license_number"))?;

        self.get_doctor(update.doctor_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn set_doctor_password(
        &self,
        doctor_id: i64,
        password_hash: &str,
    ) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE doctors SET password_hash = ?, updated_at = ? WHERE doctor_id = ?",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(doctor_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_doctor(&self, doctor_id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM doctors WHERE doctor_id = ?")
            .bind(doctor_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        info!(doctor_id, "doctor record deleted");
        Ok(())
    }
}
