//! Commands that do not touch the model.

use crate::command::{
    AddCommand, AddInterviewCommand, ClearCommand, CommandOutcome, CommandResult, DeleteCommand,
    DeleteInterviewCommand, EditCommand, FindCommand, ListCommand, ListInterviewsCommand,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows program usage instructions.\nExample: help";

    /// Usage text of every command, in the order they are listed to users.
    pub fn usage_summary() -> String {
        [
            AddCommand::MESSAGE_USAGE,
            EditCommand::MESSAGE_USAGE,
            DeleteCommand::MESSAGE_USAGE,
            FindCommand::MESSAGE_USAGE,
            ListCommand::MESSAGE_USAGE,
            ClearCommand::MESSAGE_USAGE,
            AddInterviewCommand::MESSAGE_USAGE,
            DeleteInterviewCommand::MESSAGE_USAGE,
            ListInterviewsCommand::MESSAGE_USAGE,
            HelpCommand::MESSAGE_USAGE,
            ExitCommand::MESSAGE_USAGE,
        ]
        .join("\n\n")
    }

    pub fn execute(&self) -> CommandOutcome {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::new(Self::usage_summary())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\nExample: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str =
        "Exiting contact book as requested ...";

    pub fn execute(&self) -> CommandOutcome {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT)
        })
    }
}
