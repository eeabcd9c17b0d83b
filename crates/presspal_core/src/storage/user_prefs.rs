//! User preferences stored as a JSON document.

use super::json_file::{read_json_file, write_json_file};
use super::{StorageResult, UserPrefsStorage};
use crate::model::UserPrefs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonUserPrefsStorage {
    file_path: PathBuf,
}

impl JsonUserPrefsStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl UserPrefsStorage for JsonUserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>> {
        read_json_file(&self.file_path)
    }

    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()> {
        write_json_file(&self.file_path, user_prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::JsonUserPrefsStorage;
    use crate::model::UserPrefs;
    use crate::storage::UserPrefsStorage;

    #[test]
    fn save_then_read_restores_prefs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonUserPrefsStorage::new(dir.path().join("preferences.json"));

        let mut prefs = UserPrefs::default();
        prefs.set_contact_book_file_path("elsewhere/book.json");
        storage.save_user_prefs(&prefs).unwrap();

        assert_eq!(storage.read_user_prefs().unwrap(), Some(prefs));
    }

    #[test]
    fn saved_file_uses_snake_case_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        JsonUserPrefsStorage::new(&path)
            .save_user_prefs(&UserPrefs::default())
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["contact_book_file_path"], "data/contactbook.json");
    }
}
