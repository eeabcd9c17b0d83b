//! Command-line text parsing.
//!
//! # Responsibility
//! - Map a command word to its argument parser.
//! - Turn argument text into a fully validated `Command`.
//!
//! # Invariants
//! - Parsing is all-or-nothing: on any error no command is produced.
//! - Parsing never looks at model state; range checks against displayed
//!   lists happen at execution time.

pub mod interview;
pub mod person;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use crate::command::{
    AddCommand, AddInterviewCommand, ClearCommand, Command, DeleteCommand,
    DeleteInterviewCommand, EditCommand, ExitCommand, FindCommand, HelpCommand, ListCommand,
    ListInterviewsCommand,
};
use crate::model::FieldError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_INVALID_DATE_TIME: &str =
    "Date and time should be in the format yyyy-MM-dd and HH:mm, and must be a real calendar date and time";

pub type ParseResult<T> = Result<T, ParseError>;

/// Malformed command text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing required prefix or unexpected preamble; carries the usage text.
    InvalidCommandFormat { usage: &'static str },
    UnknownCommand,
    /// Singular prefixes that appeared more than once.
    DuplicatePrefixes(Vec<Prefix>),
    InvalidIndex,
    InvalidDateTime { date: String, time: String },
    InvalidField(FieldError),
    NoFieldEdited,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandFormat { usage } => {
                write!(f, "{MESSAGE_INVALID_COMMAND_FORMAT}{usage}")
            }
            Self::UnknownCommand => f.write_str(MESSAGE_UNKNOWN_COMMAND),
            Self::DuplicatePrefixes(prefixes) => {
                let joined = prefixes
                    .iter()
                    .map(Prefix::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "{MESSAGE_DUPLICATE_FIELDS}{joined}")
            }
            Self::InvalidIndex => f.write_str(MESSAGE_INVALID_INDEX),
            Self::InvalidDateTime { .. } => f.write_str(MESSAGE_INVALID_DATE_TIME),
            Self::InvalidField(err) => write!(f, "{err}"),
            Self::NoFieldEdited => f.write_str(EditCommand::MESSAGE_NOT_EDITED),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::InvalidField(value)
    }
}

/// Entry point that dispatches on the command word.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactBookParser;

impl ContactBookParser {
    /// Parses one line of user input into a command.
    ///
    /// # Errors
    /// - `InvalidCommandFormat` with the help usage for blank input.
    /// - `UnknownCommand` for an unrecognised command word.
    /// - Any error of the selected argument parser.
    pub fn parse_command(&self, input: &str) -> ParseResult<Command> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::InvalidCommandFormat {
                usage: HelpCommand::MESSAGE_USAGE,
            });
        }

        let (command_word, arguments) = match input.find(char::is_whitespace) {
            Some(split) => input.split_at(split),
            None => (input, ""),
        };

        let parsed = match command_word {
            AddCommand::COMMAND_WORD => person::parse_add(arguments).map(Command::Add),
            EditCommand::COMMAND_WORD => person::parse_edit(arguments).map(Command::Edit),
            DeleteCommand::COMMAND_WORD => person::parse_delete(arguments).map(Command::Delete),
            FindCommand::COMMAND_WORD => person::parse_find(arguments).map(Command::Find),
            ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
            ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
            AddInterviewCommand::COMMAND_WORD => {
                interview::parse_add_interview(arguments).map(Command::AddInterview)
            }
            DeleteInterviewCommand::COMMAND_WORD => {
                interview::parse_delete_interview(arguments).map(Command::DeleteInterview)
            }
            ListInterviewsCommand::COMMAND_WORD => {
                Ok(Command::ListInterviews(ListInterviewsCommand))
            }
            HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
            ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
            _ => Err(ParseError::UnknownCommand),
        };

        if let Err(err) = &parsed {
            debug!(
                "event=command_parse module=parser status=error command_word={} error_code={}",
                command_word,
                error_code(err)
            );
        }
        parsed
    }
}

fn error_code(err: &ParseError) -> &'static str {
    match err {
        ParseError::InvalidCommandFormat { .. } => "invalid_format",
        ParseError::UnknownCommand => "unknown_command",
        ParseError::DuplicatePrefixes(_) => "duplicate_prefixes",
        ParseError::InvalidIndex => "invalid_index",
        ParseError::InvalidDateTime { .. } => "invalid_date_time",
        ParseError::InvalidField(err) => err.field,
        ParseError::NoFieldEdited => "no_field_edited",
    }
}
