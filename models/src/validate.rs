// models/src/validate.rs
//
// Field-level checks shared by the request DTOs. The store enforces the
// same constraints again through its schema; these exist so a bad payload
// is answered with a field-specific message instead of a constraint error.

use crate::errors::{ValidationError, ValidationResult};

pub fn non_empty(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub fn digits(field: &'static str, value: &str, len: usize) -> ValidationResult<()> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidDigits { field, len });
    }
    Ok(())
}

pub fn digit_range(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> ValidationResult<()> {
    if value.len() < min || value.len() > max || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidDigitRange { field, min, max });
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> ValidationResult<()> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidEmail(field));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || value.contains(' ') {
        return Err(ValidationError::InvalidEmail(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn should_reject_blank_required_field() {
        assert_eq!(
            non_empty("name", "   "),
            Err(ValidationError::MissingField("name"))
        );
        assert!(non_empty("name", "Asha Rao").is_ok());
    }

    #[test]
    fn should_enforce_exact_digit_count() {
        assert!(digits("aadhaar_number", "123456789012", 12).is_ok());
        assert!(digits("aadhaar_number", "12345678901", 12).is_err());
        assert!(digits("aadhaar_number", "12345678901a", 12).is_err());
    }

    #[test]
    fn should_enforce_digit_range() {
        assert!(digit_range("phone_number", "9876543210", 10, 15).is_ok());
        assert!(digit_range("phone_number", "987654321", 10, 15).is_err());
        assert!(digit_range("phone_number", "98765432109876543", 10, 15).is_err());
    }

    #[test]
    fn should_validate_email_shape() {
        assert!(email("email", "dr.rao@clinic.example.org").is_ok());
        assert!(email("email", "not-an-email").is_err());
        assert!(email("email", "a@b").is_err());
    }
}
