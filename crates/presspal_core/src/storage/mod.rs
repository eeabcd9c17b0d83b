//! JSON file persistence for the contact book and user preferences.
//!
//! # Responsibility
//! - Define storage contracts used by the logic layer and startup code.
//! - Read and write whole-file JSON snapshots.
//!
//! # Invariants
//! - Reads validate every value; malformed files surface as `DataLoading`.
//! - Writes replace the target file atomically (temp file + rename).
//! - A missing file is not an error; reads return `Ok(None)`.

mod contact_book;
mod json_file;
mod manager;
mod user_prefs;

use crate::model::{ContactBook, UserPrefs};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub use contact_book::JsonContactBookStorage;
pub use json_file::{read_json_file, write_json_file};
pub use manager::StorageManager;
pub use user_prefs::JsonUserPrefsStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// File exists but its content could not be turned into model data.
    DataLoading { path: PathBuf, reason: String },
    /// File system failure while reading or writing.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataLoading { path, reason } => {
                write!(f, "could not load data from `{}`: {reason}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "could not access `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataLoading { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Persistence contract for contact book snapshots.
pub trait ContactBookStorage {
    fn contact_book_file_path(&self) -> &Path;
    fn read_contact_book(&self) -> StorageResult<Option<ContactBook>>;
    fn save_contact_book(&self, contact_book: &ContactBook) -> StorageResult<()>;
}

/// Persistence contract for user preferences.
pub trait UserPrefsStorage {
    fn user_prefs_file_path(&self) -> &Path;
    fn read_user_prefs(&self) -> StorageResult<Option<UserPrefs>>;
    fn save_user_prefs(&self, user_prefs: &UserPrefs) -> StorageResult<()>;
}

/// Combined storage API consumed by the logic layer.
pub trait Storage: ContactBookStorage + UserPrefsStorage {}

impl<T: ContactBookStorage + UserPrefsStorage> Storage for T {}
