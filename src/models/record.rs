//! Contact record: one person's name, phones, and birthday.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookResult, ContactBookError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// repeat; the birthday is optional and can be overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        self.push_phone(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone. Duplicates are kept.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove every phone equal to `phone`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// First phone whose value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `ContactBookError::PhoneNotFound` if no phone equals `old_phone`
    /// - a validation error if `new_phone` is not ten digits
    ///
    /// The record is unchanged on error.
    pub fn edit_phone(
        &mut self,
        old_phone: &str,
        new_phone: impl Into<String>,
    ) -> BookResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| ContactBookError::PhoneNotFound(old_phone.to_string()))?;

        *slot = Phone::new(new_phone)?;
        Ok(())
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: impl Into<String>) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phone: {}, birthdate: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}
