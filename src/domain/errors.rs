//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),

    /// A required value was not supplied at all.
    MissingValue(&'static str),
}

impl ValidationError {
    /// Whether the value was absent rather than present but malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingValue(_))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain 10 digits: {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY: {}", date)
            }
            Self::MissingValue(field) => write!(f, "Missing value for {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            ValidationError::InvalidPhone("12".to_string()).to_string(),
            "Phone number must contain 10 digits: 12"
        );
        assert_eq!(
            ValidationError::MissingValue("phone").to_string(),
            "Missing value for phone"
        );
    }

    #[test]
    fn test_is_missing() {
        assert!(ValidationError::MissingValue("name").is_missing());
        assert!(!ValidationError::EmptyName.is_missing());
    }
}
