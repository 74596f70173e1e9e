//! Address book: every contact record, keyed by name.

use super::record::ContactRecord;
use crate::error::{BookResult, ContactBookError};
use crate::services::birthdays::{self, UpcomingBirthday};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All contact records, keyed by their name.
///
/// Iteration follows the order in which names were first added. Adding a
/// record under an existing name replaces that entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::ContactNotFound` if there is no such record;
    /// the book is left untouched.
    pub fn delete(&mut self, name: &str) -> BookResult<ContactRecord> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
    }

    /// Contacts whose birthday falls within the coming week, counting `today`.
    ///
    /// See [`birthdays::upcoming_birthdays`] for the exact window rules.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.iter(), today)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Stored as a plain list of records; the key is always the record's own name.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<ContactRecord>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}
