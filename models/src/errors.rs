// models/src/errors.rs

pub use thiserror::Error;

/// A validation error raised while checking request payloads against the
/// record schemas.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("field '{0}' is required")]
    MissingField(&'static str),
    /// A field that must be exactly N decimal digits was not.
    #[error("field '{field}' must be exactly {len} digits")]
    InvalidDigits { field: &'static str, len: usize },
    /// A numeric field fell outside its allowed length range.
    #[error("field '{field}' must be {min} to {max} digits")]
    InvalidDigitRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
    /// An email field did not look like an email address.
    #[error("field '{0}' is not a valid email address")]
    InvalidEmail(&'static str),
    /// A value was not one of the allowed enumeration members.
    #[error("'{value}' is not a valid {kind}")]
    InvalidEnumValue { kind: &'static str, value: String },
    /// A record identifier did not match the 12-digit format.
    #[error("'{0}' is not a valid 12-digit record identifier")]
    InvalidRecordId(String),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
