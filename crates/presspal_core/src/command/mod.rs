//! Executable commands.
//!
//! # Responsibility
//! - Represent every user command as a variant carrying validated input.
//! - Apply exactly one model mutation (or none) per execution.
//!
//! # Invariants
//! - All checks that can fail run before the model is touched, so a failed
//!   command leaves the model unchanged.

pub mod general;
pub mod interview;
pub mod person;

use crate::model::{ModelError, ModelManager};
use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use general::{ExitCommand, HelpCommand};
pub use interview::{AddInterviewCommand, DeleteInterviewCommand, ListInterviewsCommand};
pub use person::{
    AddCommand, ClearCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
    ListCommand, NameContainsKeywordsPredicate,
};

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_INTERVIEW_DISPLAYED_INDEX: &str =
    "The interview index provided is invalid";

/// Which displayed list the caller should re-render after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Persons,
    Interviews,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// User-facing feedback.
    pub feedback: String,
    /// Caller should show usage help.
    pub show_help: bool,
    /// Caller should shut down.
    pub exit: bool,
    pub listing: Option<Listing>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            listing: None,
        }
    }

    pub fn with_listing(feedback: impl Into<String>, listing: Listing) -> Self {
        Self {
            listing: Some(listing),
            ..Self::new(feedback)
        }
    }
}

/// Command rejected against the current model state.
#[derive(Debug)]
pub enum CommandError {
    DuplicatePerson,
    DuplicateInterview,
    InvalidPersonIndex,
    InvalidInterviewIndex,
    /// Model refused a mutation the command had already checked.
    Model(ModelError),
    /// The mutation succeeded in memory but could not be saved.
    Persist(StorageError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson => f.write_str(AddCommand::MESSAGE_DUPLICATE_PERSON),
            Self::DuplicateInterview => {
                f.write_str(AddInterviewCommand::MESSAGE_DUPLICATE_INTERVIEW)
            }
            Self::InvalidPersonIndex => f.write_str(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX),
            Self::InvalidInterviewIndex => f.write_str(MESSAGE_INVALID_INTERVIEW_DISPLAYED_INDEX),
            Self::Model(err) => write!(f, "{err}"),
            Self::Persist(err) => {
                write!(f, "Could not save data due to the following error: {err}")
            }
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::Persist(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::DuplicatePerson => Self::DuplicatePerson,
            ModelError::DuplicateInterview => Self::DuplicateInterview,
            other => Self::Model(other),
        }
    }
}

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Every command the parser can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    AddInterview(AddInterviewCommand),
    DeleteInterview(DeleteInterviewCommand),
    ListInterviews(ListInterviewsCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Delete(command) => command.execute(model),
            Self::Find(command) => command.execute(model),
            Self::List(command) => command.execute(model),
            Self::Clear(command) => command.execute(model),
            Self::AddInterview(command) => command.execute(model),
            Self::DeleteInterview(command) => command.execute(model),
            Self::ListInterviews(command) => command.execute(model),
            Self::Help(command) => command.execute(),
            Self::Exit(command) => command.execute(),
        }
    }

    /// Command word that selects this variant.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::AddInterview(_) => AddInterviewCommand::COMMAND_WORD,
            Self::DeleteInterview(_) => DeleteInterviewCommand::COMMAND_WORD,
            Self::ListInterviews(_) => ListInterviewsCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }
}
