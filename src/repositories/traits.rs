use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between sessions.
///
/// Provides abstraction over where and how the book is stored,
/// enabling different implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the saved book.
    ///
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the saved state with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
