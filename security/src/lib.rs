// security/src/lib.rs

use std::fmt;

pub use thiserror::Error;

pub mod middleware;
pub mod password;
pub mod principal;
pub mod session;

pub use principal::{Principal, Role};
pub use session::{Session, SessionStore};

/// Authentication and authorization failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No session, or the session has expired.
    #[error("missing or expired session")]
    Unauthenticated,
    /// The session's role does not cover the requested operation.
    #[error("access denied: {required} privileges required")]
    Forbidden { required: Role, actual: Role },
    /// Identifier/password pair did not match a stored record.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Password hashing or verification failed internally.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Pharmacy => "pharmacy",
            Role::Pharmacist => "pharmacist",
            Role::Patient => "patient",
        };
        write!(f, "{}", name)
    }
}
