// 📐 Boundary Validation - runs in the request layer, before the core
//
// The core assumes every payload it receives already passed these checks.
// Type and enum membership are enforced by deserialization; this module
// covers the constraints serde cannot express.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::{
    Address, AddressUpdate, Person, PersonUpdate, Scholarship, ScholarshipUpdate, Tuition,
    TuitionUpdate,
};
use crate::patch::Patch;

/// Fractional digits allowed on monetary amounts
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is not a valid UNI: {value}")]
    InvalidUni { field: &'static str, value: String },

    #[error("Field '{field}' is not a valid email address: {value}")]
    InvalidEmail { field: &'static str, value: String },

    #[error("Field '{field}' allows at most {max} decimal places, got {value}")]
    TooManyDecimalPlaces {
        field: &'static str,
        max: u32,
        value: Decimal,
    },
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

// ============================================================================
// FIELD CHECKS
// ============================================================================

fn uni_pattern() -> &'static Regex {
    static UNI: OnceLock<Regex> = OnceLock::new();
    // 2-3 lowercase letters followed by 1-4 digits
    UNI.get_or_init(|| Regex::new(r"^[a-z]{2,3}[0-9]{1,4}$").expect("static UNI pattern"))
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email pattern"))
}

pub fn check_uni(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if uni_pattern().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUni {
            field,
            value: value.to_string(),
        })
    }
}

pub fn check_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if email_pattern().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail {
            field,
            value: value.to_string(),
        })
    }
}

/// Trailing zeros don't count: "12.500" is accepted
pub fn check_amount(field: &'static str, value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() <= AMOUNT_DECIMAL_PLACES {
        Ok(())
    } else {
        Err(ValidationError::TooManyDecimalPlaces {
            field,
            max: AMOUNT_DECIMAL_PLACES,
            value: *value,
        })
    }
}

/// Run `check` only when the update actually sets the field
fn when_set<T, F>(patch: &Patch<T>, check: F) -> Result<(), ValidationError>
where
    F: FnOnce(&T) -> Result<(), ValidationError>,
{
    match patch {
        Patch::Set(value) => check(value),
        Patch::Absent => Ok(()),
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

impl Validate for Address {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for AddressUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<(), ValidationError> {
        check_uni("uni", &self.uni)?;
        check_email("email", &self.email)
    }
}

impl Validate for PersonUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        when_set(&self.uni, |uni| check_uni("uni", uni))?;
        when_set(&self.email, |email| check_email("email", email))
    }
}

impl Validate for Tuition {
    fn validate(&self) -> Result<(), ValidationError> {
        check_uni("student_uni", &self.student_uni)?;
        check_amount("amount", &self.amount)
    }
}

impl Validate for TuitionUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        when_set(&self.student_uni, |uni| check_uni("student_uni", uni))?;
        when_set(&self.amount, |amount| check_amount("amount", amount))
    }
}

impl Validate for Scholarship {
    fn validate(&self) -> Result<(), ValidationError> {
        check_amount("amount", &self.amount)
    }
}

impl Validate for ScholarshipUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        when_set(&self.amount, |amount| check_amount("amount", amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_uni_format() {
        assert!(check_uni("uni", "vv2418").is_ok());
        assert!(check_uni("uni", "xyz456").is_ok());
        assert!(check_uni("uni", "VV2418").is_err());
        assert!(check_uni("uni", "v2418").is_err());
        assert!(check_uni("uni", "vv24181").is_err());
        assert!(check_uni("uni", "").is_err());
    }

    #[test]
    fn test_email_format() {
        assert!(check_email("email", "vv2418@columbia.edu").is_ok());
        assert!(check_email("email", "not-an-email").is_err());
    }

    #[test]
    fn test_amount_precision() {
        let ok = Decimal::from_str("25000.00").unwrap();
        let trailing = Decimal::from_str("12.500").unwrap();
        let too_fine = Decimal::from_str("1.005").unwrap();

        assert!(check_amount("amount", &ok).is_ok());
        assert!(check_amount("amount", &trailing).is_ok());
        assert_eq!(
            check_amount("amount", &too_fine),
            Err(ValidationError::TooManyDecimalPlaces {
                field: "amount",
                max: 2,
                value: too_fine,
            })
        );
    }

    #[test]
    fn test_update_validation_only_checks_set_fields() {
        let update = TuitionUpdate::default();
        assert!(update.validate().is_ok());

        let update = TuitionUpdate {
            student_uni: Patch::Set("NOT A UNI".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update.validate(),
            Err(ValidationError::InvalidUni { field: "student_uni", .. })
        ));
    }
}
