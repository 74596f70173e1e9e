//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, and birthdays. These value objects validate at
//! construction time, so an invalid field can never be represented.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

/// Unwrap a value that must be present at the input boundary.
///
/// # Errors
///
/// Returns `ValidationError::MissingValue` naming `field` when `value` is `None`.
pub fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    value.ok_or(ValidationError::MissingValue(field))
}
