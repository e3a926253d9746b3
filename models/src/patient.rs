// models/src/patient.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::types::{BloodGroup, Gender};
use crate::validate;

/// A stored patient record. The medical id doubles as the sign-in
/// identifier, so the password hash never leaves the crate boundary in a
/// serialized response.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Patient {
    pub medical_id: String,
    pub name: String,
    pub aadhaar_number: String,
    pub mobile_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub address: String,
    pub report_link_text: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a patient, via admin add or self-signup. The
/// medical id is allocated by the store, never supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub aadhaar_number: String,
    pub mobile_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub address: String,
    pub password: Option<String>,
}

impl NewPatient {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("name", &self.name)?;
        validate::digits("aadhaar_number", &self.aadhaar_number, 12)?;
        validate::digits("mobile_number", &self.mobile_number, 10)?;
        validate::non_empty("address", &self.address)?;
        Ok(())
    }
}

/// Admin edit payload. Every field except the password is required on
/// edit, so this is a full replace keyed by medical id.
#[derive(Debug, Clone, Deserialize)]
pub struct EditPatient {
    pub medical_id: String,
    pub name: String,
    pub aadhaar_number: String,
    pub mobile_number: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub address: String,
}

impl EditPatient {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("name", &self.name)?;
        validate::digits("aadhaar_number", &self.aadhaar_number, 12)?;
        validate::digits("mobile_number", &self.mobile_number, 10)?;
        validate::non_empty("address", &self.address)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    fn sample() -> NewPatient {
        NewPatient {
            name: "Asha Rao".to_string(),
            aadhaar_number: "123412341234".to_string(),
            mobile_number: "9876543210".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            blood_group: BloodGroup::OPositive,
            address: "14 MG Road, Mysuru".to_string(),
            password: None,
        }
    }

    #[test]
    fn should_accept_complete_payload() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn should_reject_short_aadhaar() {
        let mut p = sample();
        p.aadhaar_number = "1234".to_string();
        assert_eq!(
            p.validate(),
            Err(ValidationError::InvalidDigits {
                field: "aadhaar_number",
                len: 12
            })
        );
    }

    #[test]
    fn should_reject_blank_name() {
        let mut p = sample();
        p.name = String::new();
        assert_eq!(p.validate(), Err(ValidationError::MissingField("name")));
    }
}
