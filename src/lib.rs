//! Contact Book - a personal contact directory with birthday reminders.
//!
//! Stores names, phone numbers, and birthdays, and reports the contacts
//! whose birthday falls within the next seven days.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **services**: Upcoming birthday report and the clock it runs against
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving the address book
//! - **commands**: Console command parsing, dispatch, and error messages
//! - **session**: Interactive read-dispatch-reply loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{ConfigError, ContactBookError, ErrorKind, SessionError, StorageError};
pub use models::{AddressBook, ContactRecord};
pub use repositories::{BookRepository, JsonFileRepository};
pub use services::{Clock, FixedClock, SystemClock, UpcomingBirthday};
pub use session::Session;
