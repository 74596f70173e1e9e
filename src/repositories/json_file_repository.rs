use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Address book repository backed by a single JSON file.
///
/// The file holds a JSON array of records in book order. Saves go to a
/// sibling `.tmp` file first and are then renamed over the target, so an
/// interrupted save never leaves a half-written book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "No saved address book, starting empty"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook =
            serde_json::from_str(&data).map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), records = book.len(), "Address book loaded");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(book).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_error(e))?;

        tracing::info!(path = %self.path.display(), records = book.len(), "Address book saved");
        Ok(())
    }
}
