//! Translation of errors into console messages.
//!
//! This is the only place that turns a [`ContactBookError`] into text for
//! the user. The core types never format messages for the console.

use super::parser::Command;
use crate::error::{ContactBookError, ErrorKind};

/// Command syntax reminder appended to input errors.
pub const USAGE: &str = "Error! if you want to:\n\
    add contact: you must input (\"add\" username phone).\n\
    change phone: you must input (\"change\" username old_phone new_phone).\n\
    get phone: you must input (\"phone\" username)\n\
    add-birthday: you must input (\"add-birthday\" username DD.MM.YYYY)\n\
    show-birthday: you must input (\"show-birthday\" username)\n\
    delete contact: you must input (\"delete\" username)\n\
    remove phone: you must input (\"remove-phone\" username phone)";

/// Message shown to the user when `command` fails with `err`.
pub fn render_error(command: Command, err: &ContactBookError) -> String {
    match err.kind() {
        ErrorKind::InvalidInput | ErrorKind::MalformedType => format!("{}.\n{}", err, USAGE),
        ErrorKind::NotFound => match err {
            ContactBookError::ContactNotFound(name) => match command {
                Command::ShowBirthday => format!("No contact found for '{}'.", name),
                Command::AddBirthday | Command::Delete => {
                    format!("Contact '{}' not found.", name)
                }
                _ => format!("Contact {} not found.", name),
            },
            ContactBookError::PhoneNotFound(phone) => {
                format!("Phone number {} not found.", phone)
            }
            other => other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_render_not_found() {
        assert_eq!(
            render_error(
                Command::Phone,
                &ContactBookError::ContactNotFound("Ghost".to_string())
            ),
            "Contact Ghost not found."
        );
        assert_eq!(
            render_error(
                Command::Change,
                &ContactBookError::PhoneNotFound("1111111111".to_string())
            ),
            "Phone number 1111111111 not found."
        );
    }

    #[test]
    fn test_render_unknown_contact_per_command() {
        let err = ContactBookError::ContactNotFound("Ghost".to_string());
        assert_eq!(
            render_error(Command::ShowBirthday, &err),
            "No contact found for 'Ghost'."
        );
        assert_eq!(
            render_error(Command::AddBirthday, &err),
            "Contact 'Ghost' not found."
        );
        assert_eq!(render_error(Command::Change, &err), "Contact Ghost not found.");
    }

    #[test]
    fn test_render_invalid_input_includes_usage() {
        let message = render_error(
            Command::Add,
            &ValidationError::InvalidPhone("12".to_string()).into(),
        );
        assert!(message.starts_with("Phone number must contain 10 digits: 12.\n"));
        assert!(message.ends_with(USAGE));
    }

    #[test]
    fn test_render_missing_value_includes_usage() {
        let message = render_error(
            Command::ShowBirthday,
            &ValidationError::MissingValue("name").into(),
        );
        assert!(message.starts_with("Missing value for name."));
        assert!(message.contains("add-birthday"));
    }
}
