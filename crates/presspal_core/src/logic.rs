//! Logic facade: text in, command result out.
//!
//! # Responsibility
//! - Run parser, command and storage save for each line of user input.
//! - Build the startup model from storage with lenient fallbacks.
//!
//! # Invariants
//! - Every successful command is followed by a contact book save.
//! - Parse and command failures never trigger a save.
//! - Logs carry the command word only, never argument text.

use crate::command::{CommandError, CommandResult, Listing};
use crate::model::{ContactBook, Interview, ModelManager, Person, UserPrefs};
use crate::parser::{ContactBookParser, ParseError};
use crate::storage::{ContactBookStorage, Storage, StorageError, UserPrefsStorage};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

/// Failure of one `execute` call.
#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Wires parser, model and storage together.
pub struct LogicManager<S: Storage> {
    model: ModelManager,
    storage: S,
    parser: ContactBookParser,
}

impl<S: Storage> LogicManager<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self {
            model,
            storage,
            parser: ContactBookParser,
        }
    }

    /// Parses and runs one line of input, then saves the contact book.
    ///
    /// # Errors
    /// - `Parse` when the text is not a valid command.
    /// - `Command` when the command is rejected, or when the save after a
    ///   successful command fails (`CommandError::Persist`).
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        let started_at = Instant::now();
        let command = self.parser.parse_command(command_text)?;
        let word = command.word();

        let result = match command.execute(&mut self.model) {
            Ok(result) => result,
            Err(err) => {
                info!(
                    "event=command_execute module=logic status=rejected command_word={} duration_ms={}",
                    word,
                    started_at.elapsed().as_millis()
                );
                return Err(err.into());
            }
        };

        self.storage
            .save_contact_book(self.model.contact_book())
            .map_err(CommandError::Persist)?;

        info!(
            "event=command_execute module=logic status=ok command_word={} duration_ms={}",
            word,
            started_at.elapsed().as_millis()
        );
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn contact_book(&self) -> &ContactBook {
        self.model.contact_book()
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }

    pub fn filtered_interview_list(&self) -> Vec<&Interview> {
        self.model.filtered_interview_list()
    }

    pub fn contact_book_file_path(&self) -> &Path {
        self.model.contact_book_file_path()
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Renders the displayed list selected by a command result.
    pub fn render_listing(&self, result: &CommandResult) -> Option<String> {
        result.listing.map(|listing| match listing {
            Listing::Persons => numbered(self.filtered_person_list()),
            Listing::Interviews => numbered(self.filtered_interview_list()),
        })
    }
}

fn numbered<T: Display>(items: Vec<&T>) -> String {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| format!("{}. {item}", position + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads user prefs, falling back to defaults when the file is missing or
/// unreadable.
pub fn load_user_prefs(storage: &impl UserPrefsStorage) -> UserPrefs {
    match storage.read_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!(
                "event=prefs_load module=logic status=missing path={}",
                storage.user_prefs_file_path().display()
            );
            UserPrefs::default()
        }
        Err(err) => {
            warn!(
                "event=prefs_load module=logic status=fallback error_code={} path={}",
                error_code(&err),
                storage.user_prefs_file_path().display()
            );
            UserPrefs::default()
        }
    }
}

/// Builds the startup model.
///
/// A missing contact book file starts an empty book. A malformed or
/// unreadable file is logged and also starts empty; the file itself is left
/// untouched until the next successful command saves over it.
pub fn init_model(storage: &impl ContactBookStorage, user_prefs: UserPrefs) -> ModelManager {
    let contact_book = match storage.read_contact_book() {
        Ok(Some(contact_book)) => contact_book,
        Ok(None) => {
            info!(
                "event=contact_book_load module=logic status=missing path={}",
                storage.contact_book_file_path().display()
            );
            ContactBook::new()
        }
        Err(err) => {
            warn!(
                "event=contact_book_load module=logic status=fallback error_code={} path={}",
                error_code(&err),
                storage.contact_book_file_path().display()
            );
            ContactBook::new()
        }
    };
    ModelManager::new(contact_book, user_prefs)
}

fn error_code(err: &StorageError) -> &'static str {
    match err {
        StorageError::DataLoading { .. } => "invalid_data",
        StorageError::Io { .. } => "io_failed",
    }
}
