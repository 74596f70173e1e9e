//! Command handlers.
//!
//! Each handler validates its arguments, applies the operation to the
//! address book, and returns the reply text. Errors are returned untouched
//! for [`render_error`](super::render_error) to translate.

use super::parser::Command;
use crate::domain::{required, Phone};
use crate::error::{BookResult, ContactBookError};
use crate::models::{AddressBook, ContactRecord};
use chrono::NaiveDate;

/// Shown by `all` when the book has no records.
pub const EMPTY_BOOK_HINT: &str = "No contacts available, you need to (add \"username\" \"phone\")";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line.
    Continue(String),
    /// Print the reply and end the session.
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }
}

/// Run one command against `book`.
///
/// `today` is only consulted by `birthdays`.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
) -> BookResult<Outcome> {
    tracing::debug!(command = command.name(), args = args.len(), "Dispatching command");

    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => add_contact(args, book)?,
        Command::Change => change_phone(args, book)?,
        Command::Phone => show_phones(args, book)?,
        Command::All => show_all(book),
        Command::AddBirthday => add_birthday(args, book)?,
        Command::ShowBirthday => show_birthday(args, book)?,
        Command::Birthdays => upcoming_birthdays(book, today),
        Command::Delete => delete_contact(args, book)?,
        Command::RemovePhone => remove_phone(args, book)?,
        Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
        Command::Unknown => "Invalid command.".to_string(),
    };

    Ok(Outcome::Continue(reply))
}

/// Pull exactly `N` positional arguments for `command`.
///
/// Too few arguments name the first missing field; too many are rejected outright.
fn take_args<const N: usize>(command: Command, args: &[String]) -> BookResult<[&str; N]> {
    let fields = command.fields();
    debug_assert_eq!(fields.len(), N);

    if args.len() > N {
        return Err(ContactBookError::WrongArgumentCount {
            command: command.name().to_string(),
            expected: N,
            actual: args.len(),
        });
    }

    let mut taken = [""; N];
    for (i, slot) in taken.iter_mut().enumerate() {
        *slot = required(args.get(i).map(String::as_str), fields[i])?;
    }
    Ok(taken)
}

fn contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut ContactRecord> {
    book.find_mut(name)
        .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
}

fn contact<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a ContactRecord> {
    book.find(name)
        .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
}

fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = take_args(Command::Add, args)?;
    // Check the phone before a new record is created for it.
    let phone = Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = ContactRecord::new(name)?;
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_phone(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] = take_args(Command::Change, args)?;
    contact_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok(format!("Phone number for '{}' changed.", name))
}

fn show_phones(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args(Command::Phone, args)?;
    let phones = contact(book, name)?
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phone number for '{}': {}", name, phones))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return EMPTY_BOOK_HINT.to_string();
    }

    book.iter()
        .map(|record| format!("{}: {}", record.name(), record))
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, birthday] = take_args(Command::AddBirthday, args)?;
    contact_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("Birthday added for '{}'.", name))
}

fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args(Command::ShowBirthday, args)?;
    Ok(match contact(book, name)?.birthday() {
        Some(birthday) => format!("Birthday for '{}': {}", name, birthday),
        None => format!(
            "No birthday found for '{}'. Please add a birthday using 'add-birthday' command.",
            name
        ),
    })
}

fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No upcoming birthdays".to_string();
    }

    upcoming
        .iter()
        .map(|b| format!("Upcoming birthday next week for '{}': {}", b.name, b.birthday))
        .collect::<Vec<_>>()
        .join("\n")
}

fn delete_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name] = take_args(Command::Delete, args)?;
    book.delete(name)?;
    Ok(format!("Contact '{}' deleted.", name))
}

fn remove_phone(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = take_args(Command::RemovePhone, args)?;
    contact_mut(book, name)?.remove_phone(phone);
    Ok(format!("Phone number removed for '{}'.", name))
}
