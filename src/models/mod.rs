//! Data model for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record.

pub mod book;
pub mod record;

pub use book::AddressBook;
pub use record::ContactRecord;
