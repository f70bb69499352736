//! Command text parsing.
//!
//! # Responsibility
//! - Select the command by its first word.
//! - Turn prefixed arguments into typed commands.
//!
//! # Invariants
//! - Parsing never touches application state.
//! - Format problems carry the usage text of the selected command.
//! - Field constraint failures surface the field's constraint message, except
//!   for `increase`/`decrease` which report them as format problems.
//!
//! # See also
//! - `tokenizer` for prefix splitting rules.

mod record;
mod target;
pub mod tokenizer;

use crate::command::{
    AddCommand, ClearCommand, Command, DecreaseCommand, DeleteCommand, EditCommand, ExitCommand,
    FindCommand, HelpCommand, IncreaseCommand, ListCommand, RedoCommand, UndoCommand,
};
use crate::model::fields::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<word>\S+)(?P<args>.*)$").expect("valid command regex")
});

pub const MESSAGE_INVALID_FORMAT: &str = "Invalid command format! ";
pub const MESSAGE_NO_FIELDS_EDITED: &str = "At least one field to edit must be provided.";

pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to turn user text into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong, missing or repeated arguments for the selected command.
    InvalidFormat { usage: &'static str },
    /// First word is not a command; carries the whole input.
    UnknownCommand(String),
    Validation(FieldError),
    /// `edit` named a customer but no field to change.
    NoFieldsEdited,
}

impl ParseError {
    pub(crate) fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { usage } => write!(f, "{MESSAGE_INVALID_FORMAT}\n{usage}"),
            Self::UnknownCommand(raw) => write!(f, "Unknown command: {raw}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoFieldsEdited => write!(f, "{MESSAGE_NO_FIELDS_EDITED}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::Validation(value)
    }
}

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let trimmed = input.trim();
    let captures = COMMAND_RE
        .captures(trimmed)
        .ok_or(ParseError::invalid_format(HelpCommand::USAGE))?;
    let word = captures.name("word").map_or("", |m| m.as_str());
    let args = captures.name("args").map_or("", |m| m.as_str());

    match word {
        AddCommand::WORD => record::parse_add(args).map(Command::Add),
        EditCommand::WORD => record::parse_edit(args).map(Command::Edit),
        IncreaseCommand::WORD => target::parse_increase(args).map(Command::Increase),
        DecreaseCommand::WORD => target::parse_decrease(args).map(Command::Decrease),
        DeleteCommand::WORD => target::parse_delete(args).map(Command::Delete),
        FindCommand::WORD => target::parse_find(args).map(Command::Find),
        ListCommand::WORD => no_arguments(args, ListCommand::USAGE, ListCommand),
        ClearCommand::WORD => no_arguments(args, ClearCommand::USAGE, ClearCommand),
        UndoCommand::WORD => no_arguments(args, UndoCommand::USAGE, UndoCommand),
        RedoCommand::WORD => no_arguments(args, RedoCommand::USAGE, RedoCommand),
        HelpCommand::WORD => no_arguments(args, HelpCommand::USAGE, HelpCommand),
        ExitCommand::WORD => no_arguments(args, ExitCommand::USAGE, ExitCommand),
        _ => Err(ParseError::UnknownCommand(trimmed.to_string())),
    }
}

fn no_arguments<C>(args: &str, usage: &'static str, command: C) -> ParseResult<Command>
where
    C: Into<Command>,
{
    if !args.trim().is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    Ok(command.into())
}

macro_rules! into_command {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Command {
                fn from(value: $ty) -> Self {
                    Command::$variant(value)
                }
            }
        )*
    };
}

into_command!(
    List => ListCommand,
    Clear => ClearCommand,
    Undo => UndoCommand,
    Redo => RedoCommand,
    Help => HelpCommand,
    Exit => ExitCommand,
);
