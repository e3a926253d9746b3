// models/src/doctor.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::types::{DoctorStatus, Gender};
use crate::validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Doctor {
    pub doctor_id: i64,
    pub name: String,
    pub specialization: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub license_number: String,
    pub status: DoctorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub license_number: String,
    pub status: Option<DoctorStatus>,
}

impl NewDoctor {
    pub fn validate(&self) -> ValidationResult<()> {
        validate::non_empty("name", &self.name)?;
        validate::non_empty("specialization", &self.specialization)?;
        validate::non_empty("password", &self.password)?;
        validate::email("email", &self.email)?;
        validate::digit_range("phone_number", &self.phone_number, 10, 15)?;
        validate::non_empty("license_number", &self.license_number)?;
        Ok(())
    }
}

/// Doctor edit payload: only supplied fields change (merge-not-replace).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDoctor {
    pub doctor_id: i64,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub license_number: Option<String>,
    pub status: Option<DoctorStatus>,
}

impl UpdateDoctor {
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(ref email) = self.email {
            validate::email("email", email)?;
        }
        if let Some(ref phone) = self.phone_number {
            validate::digit_range("phone_number", phone, 10, 15)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_bad_phone_on_create() {
        let doctor = NewDoctor {
            name: "Dr. Meera Nair".to_string(),
            specialization: "Cardiology".to_string(),
            password: "s3cret".to_string(),
            email: "meera.nair@hospital.example.org".to_string(),
            phone_number: "12345".to_string(),
            address: None,
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1978, 9, 2).unwrap(),
            license_number: "KA-MED-4411".to_string(),
            status: None,
        };
        assert!(doctor.validate().is_err());
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        let update = UpdateDoctor {
            doctor_id: 7,
            name: None,
            specialization: None,
            password: None,
            email: None,
            phone_number: None,
            address: None,
            gender: None,
            date_of_birth: None,
            license_number: None,
            status: None,
        };
        assert!(update.validate().is_ok());
    }
}
