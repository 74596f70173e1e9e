//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date layout used for input, storage, and reports.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// The raw text is kept alongside the parsed calendar date, so the value
/// prints back exactly as it was entered while date arithmetic never has
/// to re-parse it.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2000");
/// assert!(Birthday::new("31.04.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Validation Rules
    ///
    /// - Two-digit day, two-digit month, four-digit year, separated by '.'
    /// - The day must exist in that month and year (no 31.04, no 29.02.2023)
    /// - The year is 0001 or later
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if either rule is broken.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self { raw, date }),
            _ => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, including the birth year.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
