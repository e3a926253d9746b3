// security/src/password.rs
//
// Credentials are stored as salted bcrypt hashes and never compared as
// plaintext; `bcrypt::verify` does the constant-time comparison.

use bcrypt::{hash, verify, DEFAULT_COST};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

use crate::AuthError;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(verify(password, password_hash)?)
}

/// A one-time password for admin-driven resets, returned to the caller
/// exactly once and stored only as a hash.
pub fn random_password(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_accepts_the_original_password_only() {
        let hashed = hash_password("1111").unwrap();
        assert!(verify_password("1111", &hashed).unwrap());
        assert!(!verify_password("1112", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn random_passwords_have_requested_length() {
        let pw = random_password(8);
        assert_eq!(pw.len(), 8);
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
