// storage/src/pharmacists.rs

use chrono::Utc;
use models::{NewPharmacist, Pharmacist, UpdatePharmacist};
use tracing::info;

use crate::errors::{unique_or, StorageError, StorageResult};
use crate::{ids, Store};

impl Store {
    pub async fn pharmacist_exists(&self, pharmacist_id: &str) -> StorageResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM pharmacists WHERE pharmacist_id = ?",
        )
        .bind(pharmacist_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found > 0)
    }

    pub async fn pharmacist_email_exists(&self, email_id: &str) -> StorageResult<bool> {
        let found =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pharmacists WHERE email_id = ?")
                .bind(email_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(found > 0)
    }

    pub async fn create_pharmacist(
        &self,
        new: &NewPharmacist,
        password_hash: &str,
    ) -> StorageResult<Pharmacist> {
        // Checked ahead of the insert so the duplicate-email case gets its
        // own message; the unique constraint still backstops races.
        if self.pharmacist_email_exists(&new.email_id).await? {
            return Err(StorageError::Duplicate("email_id"));
        }

        let pharmacist_id =
            ids::allocate(|id| async move { self.pharmacist_exists(&id).await }).await?;
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO pharmacists (pharmacist_id, pharmacist_name, mobile_number, \
             license_number, aadhaar_number, email_id, password_hash, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&pharmacist_id)
        .bind(&new.pharmacist_name)
        .bind(&new.mobile_number)
        .bind(&new.license_number)
        .bind(&new.aadhaar_number)
        .bind(&new.email_id)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "mobile_number, license_number, aadhaar_number or email_id"))?;

        info!(%pharmacist_id, "pharmacist record created");
        self.get_pharmacist(&pharmacist_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list_pharmacists(&self) -> StorageResult<Vec<Pharmacist>> {
        let pharmacists = sqlx::query_as::<_, Pharmacist>("SELECT * FROM pharmacists")
            .fetch_all(&self.pool)
            .await?;
        Ok(pharmacists)
    }

    pub async fn get_pharmacist(&self, pharmacist_id: &str) -> StorageResult<Option<Pharmacist>> {
        let pharmacist =
            sqlx::query_as::<_, Pharmacist>("SELECT * FROM pharmacists WHERE pharmacist_id = ?")
                .bind(pharmacist_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(pharmacist)
    }

    /// Merge-not-replace: fields absent from the payload keep their stored
    /// values.
    pub async fn update_pharmacist(
        &self,
        update: &UpdatePharmacist,
        password_hash: Option<&str>,
    ) -> StorageResult<Pharmacist> {
        let existing = self
            .get_pharmacist(&update.pharmacist_id)
            .await?
            .ok_or(StorageError::NotFound)?;

        let pharmacist_name = update
            .pharmacist_name
            .as_deref()
            .unwrap_or(&existing.pharmacist_name);
        let mobile_number = update
            .mobile_number
            .as_deref()
            .unwrap_or(&existing.mobile_number);
        let license_number = update
            .license_number
            .as_deref()
            .unwrap_or(&existing.license_number);
        let aadhaar_number = update
            .aadhaar_number
            .as_deref()
            .unwrap_or(&existing.aadhaar_number);
        let email_id = update.email_id.as_deref().unwrap_or(&existing.email_id);
        let password_hash = password_hash.unwrap_or(&existing.password_hash);

        sqlx::query(
            "UPDATE pharmacists SET pharmacist_name = ?, mobile_number = ?, license_number = ?, \
             aadhaar_number = ?, email_id = ?, password_hash = ?, updated_at = ? \
             WHERE pharmacist_id = ?",
        )
        .bind(pharmacist_name)
        .bind(mobile_number)
        .bind(license_number)
        .bind(aadhaar_number)
        .bind(email_id)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(&update.pharmacist_id)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "mobile_number, license_number, aadhaar_number or email_id"))?;

        self.get_pharmacist(&update.pharmacist_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn set_pharmacist_password(
        &self,
        pharmacist_id: &str,
        password_hash: &str,
    ) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE pharmacists SET password_hash = ?, updated_at = ? WHERE pharmacist_id = ?",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(pharmacist_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_pharmacist(&self, pharmacist_id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM pharmacists WHERE pharmacist_id = ?")
            .bind(pharmacist_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        info!(%pharmacist_id, "pharmacist record deleted");
        Ok(())
    }
}
