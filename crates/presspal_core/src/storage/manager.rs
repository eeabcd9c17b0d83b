//! Storage facade combining contact book and user prefs persistence.

use super::{
    ContactBookStorage, JsonContactBookStorage, JsonUserPrefsStorage, StorageResult,
    UserPrefsStorage,
};
use crate::model::{ContactBook, UserPrefs};
use std::path::Path;

/// Delegates each concern to its own file-backed storage.
#[derive(Debug, Clone)]
pub struct StorageManager<C = JsonContactBookStorage, U = JsonUserPrefsStorage> {
    contact_book_storage: C,
    user_prefs_storage: U,
}

impl<C: ContactBookStorage, U: UserPrefsStorage> StorageManager<C, U> {
    pub fn new(contact_book_storage: C, user_prefs_storage: U) -> Self {
        Self {
            contact_book_storage,
            user_prefs_storage,
        }
    }
}

impl<C: ContactBookStorage, U> ContactBookStorage for StorageManager<C, U> {
    fn contact_book_file_path(&self) -> &Path {
        self.contact_book_storage.contact_book_file_path()
    }

    fn read_contact_book(&self) -> StorageResult<Option<ContactBook>> {
        self.contact_book_storage.read_contact_book()
    }

    fn save_contact_book(&self, contact_book: &ContactBook) -> StorageResult<()> {
        self.contact_book_storage.save_contact_book(contact_book)
    }
}

impl<C, U: UserPrefsStorage> UserPrefsStorage for StorageManager<C, U> {
    fn user_prefs_file_path(&self) -> &Path {
        self.user_prefs_storage.user_prefs_file_path()
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        self.user_prefs_storage.read_user_prefs()
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        self.user_prefs_storage.save_user_prefs(user_prefs)
    }
}
