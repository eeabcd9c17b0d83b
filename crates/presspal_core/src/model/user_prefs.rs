//! User preferences persisted alongside the contact book.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTACT_BOOK_FILE: &str = "data/contactbook.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub contact_book_file_path: PathBuf,
}

impl UserPrefs {
    pub fn contact_book_file_path(&self) -> &Path {
        &self.contact_book_file_path
    }

    pub fn set_contact_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.contact_book_file_path = path.into();
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            contact_book_file_path: PathBuf::from(DEFAULT_CONTACT_BOOK_FILE),
        }
    }
}
