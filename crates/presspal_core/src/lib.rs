//! Core domain logic for the PressPal contact book.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod index;
pub mod logging;
pub mod logic;
pub mod model;
pub mod parser;
pub mod storage;

pub use command::{Command, CommandError, CommandResult, Listing};
pub use index::Index;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use logic::{init_model, load_user_prefs, LogicError, LogicManager};
pub use model::{ContactBook, Interview, ModelManager, Person, UserPrefs};
pub use parser::{ContactBookParser, ParseError};
pub use storage::{
    ContactBookStorage, JsonContactBookStorage, JsonUserPrefsStorage, Storage, StorageError,
    StorageManager, UserPrefsStorage,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
