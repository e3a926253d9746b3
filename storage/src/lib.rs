// storage/src/lib.rs
//
// The entity store. One SQLite pool behind a cloneable handle; per-entity
// operations live in their own modules as `impl Store` blocks.

use std::str::FromStr;

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod errors;
pub mod ids;

mod consultations;
mod doctors;
mod medical_history;
mod patients;
mod pharmacists;
mod pharmacies;

pub use errors::{StorageError, StorageResult};
pub use medical_history::NewMedicalHistory;

#[cfg(test)]
mod tests;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct Store {
    pub(crate) pool: SqlitePool,
}

impl Store {
    /// Opens (creating if missing) the database file and returns a handle.
    /// Foreign keys are enforced on every connection.
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// An in-memory store with the schema applied, for tests. Capped at a
    /// single connection: every SQLite `:memory:` connection is its own
    /// database.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Runs the embedded versioned migrations. Called once at startup,
    /// before the server begins accepting requests.
    pub async fn migrate(&self) -> StorageResult<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }
}

/// Entity counts for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub patients: i64,
    pub doctors: i64,
    pub pharmacies: i64,
    pub pharmacists: i64,
    pub consultations: i64,
}

impl Store {
    pub async fn dashboard_counts(&self) -> StorageResult<DashboardCounts> {
        let patients = self.count("patients").await?;
        let doctors = self.count("doctors").await?;
        let pharmacies = self.count("pharmacies").await?;
        let pharmacists = self.count("pharmacists").await?;
        let consultations = self.count("consultation_history").await?;
        Ok(DashboardCounts {
            patients,
            doctors,
            pharmacies,
            pharmacists,
            consultations,
        })
    }

    async fn count(&self, table: &'static str) -> StorageResult<i64> {
        let n = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
