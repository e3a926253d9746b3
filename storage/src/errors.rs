// storage/src/errors.rs

pub use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A primary-key lookup (or keyed delete/update) matched no row.
    #[error("record not found")]
    NotFound,
    /// A unique constraint was violated.
    #[error("duplicate value for {0}")]
    Duplicate(&'static str),
    /// The bounded identifier-allocation loop ran out of attempts.
    #[error("identifier space exhausted after {0} attempts")]
    IdSpaceExhausted(u32),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Maps a unique-constraint violation onto `Duplicate(what)`, so handler
/// messages can name the conflicting field instead of echoing SQL.
pub(crate) fn unique_or(err: sqlx::Error, what: &'static str) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Duplicate(what),
        _ => StorageError::Database(err),
    }
}

/// A type alias for a `Result` that returns a `StorageError` on failure.
pub type StorageResult<T> = Result<T, StorageError>;
