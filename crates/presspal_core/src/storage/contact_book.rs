//! Contact book stored as a single JSON document.

use super::json_file::{read_json_file, write_json_file};
use super::{ContactBookStorage, StorageResult};
use crate::model::ContactBook;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonContactBookStorage {
    file_path: PathBuf,
}

impl JsonContactBookStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ContactBookStorage for JsonContactBookStorage {
    fn contact_book_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_contact_book(&self) -> StorageResult<Option<ContactBook>> {
        read_json_file(&self.file_path)
    }

    fn save_contact_book(&self, contact_book: &ContactBook) -> StorageResult<()> {
        write_json_file(&self.file_path, contact_book)
    }
}
