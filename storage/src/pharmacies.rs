// storage/src/pharmacies.rs

use chrono::Utc;
use models::{NewPharmacy, Pharmacy, UpdatePharmacy};
use tracing::info;

use crate::errors::{unique_or, StorageError, StorageResult};
use crate::{ids, Store};

impl Store {
    pub async fn pharmacy_exists(&self, pharmacy_id: &str) -> StorageResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM pharmacies WHERE pharmacy_id = ?",
        )
        .bind(pharmacy_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(found > 0)
    }

    pub async fn create_pharmacy(
        &self,
        new: &NewPharmacy,
        password_hash: &str,
    ) -> StorageResult<Pharmacy> {
        let pharmacy_id =
            ids::allocate(|id| async move { self.pharmacy_exists(&id).await }).await?;
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO pharmacies (pharmacy_id, pharmacy_name, location, pharmacist_id, \
             password_hash, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&pharmacy_id)
        .bind(&new.pharmacy_name)
        .bind(&new.location)
        .bind(&new.pharmacist_id)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "pharmacist_id"))?;

        info!(%pharmacy_id, "pharmacy record created");
        self.get_pharmacy(&pharmacy_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list_pharmacies(&self) -> StorageResult<Vec<Pharmacy>> {
        let pharmacies = sqlx::query_as::<_, Pharmacy>("SELECT * FROM pharmacies")
            .fetch_all(&self.pool)
            .await?;
        Ok(pharmacies)
    }

    pub async fn get_pharmacy(&self, pharmacy_id: &str) -> StorageResult<Option<Pharmacy>> {
        let pharmacy =
            sqlx::query_as::<_, Pharmacy>("SELECT * FROM pharmacies WHERE pharmacy_id = ?")
                .bind(pharmacy_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(pharmacy)
    }

    /// Merge-not-replace: fields absent from the payload keep their stored
    /// values.
    pub async fn update_pharmacy(
        &self,
        update: &UpdatePharmacy,
        password_hash: Option<&str>,
    ) -> StorageResult<Pharmacy> {
        let existing = self
            .get_pharmacy(&update.pharmacy_id)
            .await?
            .ok_or(StorageError::NotFound)?;

        let pharmacy_name = update
            .pharmacy_name
            .as_deref()
            .unwrap_or(&existing.pharmacy_name);
        let location = update.location.as_deref().unwrap_or(&existing.location);
        let pharmacist_id = update
            .pharmacist_id
            .as_deref()
            .unwrap_or(&existing.pharmacist_id);
        let password_hash = password_hash.unwrap_or(&existing.password_hash);

        sqlx::query(
            "UPDATE pharmacies SET pharmacy_name = ?, location = ?, pharmacist_id = ?, \
             password_hash = ?, updated_at = ? WHERE pharmacy_id = ?",
        )
        .bind(pharmacy_name)
        .bind(location)
        .bind(pharmacist_id)
        .bind(password_hash)
        .bind(Utc::now())
        .bind(&update.pharmacy_id)
        .execute(&self.pool)
        .await
        .map_err(|e| unique_or(e, "pharmacist_id"))?;

        self.get_pharmacy(&update.pharmacy_id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn set_pharmacy_password(
        &self,
        pharmacy_id: &str,
        password_hash: &str,
    ) -> StorageResult<()> {
        let result = sqlx::query(
            "UPDATE pharmacies SET password_hash = ?, updated_at = ? WHERE pharmacy_id = ?",
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(pharmacy_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_pharmacy(&self, pharmacy_id: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM pharmacies WHERE pharmacy_id = ?")
            .bind(pharmacy_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        info!(%pharmacy_id, "pharmacy record deleted");
        Ok(())
    }
}
