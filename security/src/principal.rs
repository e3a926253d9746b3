// security/src/principal.rs

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// The five actor roles the service recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Pharmacy,
    Pharmacist,
    Patient,
}

/// The authenticated actor bound to a session: one shape for every role,
/// checked by one generic guard, in place of per-role session layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub role: Role,
    pub id: String,
}

impl Principal {
    pub fn new(role: Role, id: impl Into<String>) -> Self {
        Self {
            role,
            id: id.into(),
        }
    }

    /// The generic authorization check: admits the principal only if its
    /// role matches the one the route demands.
    pub fn require(&self, required: Role) -> Result<&Self, AuthError> {
        if self.role == required {
            Ok(self)
        } else {
            Err(AuthError::Forbidden {
                required,
                actual: self.role,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_role_is_admitted() {
        let principal = Principal::new(Role::Doctor, "42");
        assert!(principal.require(Role::Doctor).is_ok());
    }

    #[test]
    fn role_mismatch_is_forbidden_not_partial() {
        let principal = Principal::new(Role::Doctor, "42");
        let err = principal.require(Role::Admin).unwrap_err();
        assert_eq!(
            err,
            AuthError::Forbidden {
                required: Role::Admin,
                actual: Role::Doctor
            }
        );
    }
}
