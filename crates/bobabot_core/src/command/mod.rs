//! Executable commands over the application context.
//!
//! # Responsibility
//! - Define one command type per user operation.
//! - Validate business rules before mutating the registry.
//! - Commit every successful mutation to the snapshot history.
//!
//! # Invariants
//! - A failed command leaves the registry and history unchanged.
//! - Read-only commands (`list`, `find`, `help`, `exit`) never commit.
//! - `undo`/`redo` move the history cursor and never commit.

pub mod add;
pub mod basic;
pub mod delete;
pub mod edit;
pub mod find;
pub mod history;
pub mod reward;

use crate::model::fields::Reward;
use crate::model::registry::RegistryError;
use crate::model::versioned::HistoryError;
use crate::service::context::AppContext;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use add::AddCommand;
pub use basic::{ClearCommand, ExitCommand, HelpCommand, ListCommand};
pub use delete::{DeleteCommand, DeleteTarget};
pub use edit::{EditCommand, EditDescriptor};
pub use find::FindCommand;
pub use history::{RedoCommand, UndoCommand};
pub use reward::{DecreaseCommand, IncreaseCommand};

pub const MESSAGE_INVALID_CUSTOMER: &str = "The person information provided is invalid";
pub const MESSAGE_INVALID_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_DUPLICATE_CUSTOMER: &str = "This customer already exists in bobaBot";

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Feedback returned to the front end after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// Front end should show usage help.
    pub show_help: bool,
    /// Front end should shut down.
    pub exit: bool,
}

impl CommandResult {
    /// Plain feedback with no front-end side effects.
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

/// Business-rule failure raised while executing a parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Identifier or target matched no customer.
    CustomerNotFound,
    /// Display index is outside the current filtered view.
    InvalidIndex(usize),
    /// Result would collide with another customer's phone or email.
    DuplicateCustomer,
    NoPreviousState,
    NoNextState,
    /// Increase would push the balance beyond the supported maximum.
    RewardOverflow,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CustomerNotFound => write!(f, "{MESSAGE_INVALID_CUSTOMER}"),
            Self::InvalidIndex(_) => write!(f, "{MESSAGE_INVALID_INDEX}"),
            Self::DuplicateCustomer => write!(f, "{MESSAGE_DUPLICATE_CUSTOMER}"),
            Self::NoPreviousState => write!(f, "{}", HistoryError::NoPreviousState),
            Self::NoNextState => write!(f, "{}", HistoryError::NoNextState),
            Self::RewardOverflow => write!(
                f,
                "Reward points cannot exceed {} after an increase",
                Reward::MAX_POINTS
            ),
        }
    }
}

impl Error for CommandError {}

impl From<RegistryError> for CommandError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::NotFound => Self::CustomerNotFound,
            RegistryError::DuplicateEntry => Self::DuplicateCustomer,
        }
    }
}

impl From<HistoryError> for CommandError {
    fn from(value: HistoryError) -> Self {
        match value {
            HistoryError::NoPreviousState => Self::NoPreviousState,
            HistoryError::NoNextState => Self::NoNextState,
        }
    }
}

/// Parsed user command ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Increase(IncreaseCommand),
    Decrease(DecreaseCommand),
    Find(FindCommand),
    Delete(DeleteCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Command word that selected this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::WORD,
            Self::Edit(_) => EditCommand::WORD,
            Self::Increase(_) => IncreaseCommand::WORD,
            Self::Decrease(_) => DecreaseCommand::WORD,
            Self::Find(_) => FindCommand::WORD,
            Self::Delete(_) => DeleteCommand::WORD,
            Self::List(_) => ListCommand::WORD,
            Self::Clear(_) => ClearCommand::WORD,
            Self::Undo(_) => UndoCommand::WORD,
            Self::Redo(_) => RedoCommand::WORD,
            Self::Help(_) => HelpCommand::WORD,
            Self::Exit(_) => ExitCommand::WORD,
        }
    }

    /// Whether a successful run may change the registry and must be saved.
    pub fn changes_data(&self) -> bool {
        !matches!(
            self,
            Self::Find(_) | Self::List(_) | Self::Help(_) | Self::Exit(_)
        )
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        match self {
            Self::Add(command) => command.execute(ctx),
            Self::Edit(command) => command.execute(ctx),
            Self::Increase(command) => command.execute(ctx),
            Self::Decrease(command) => command.execute(ctx),
            Self::Find(command) => command.execute(ctx),
            Self::Delete(command) => command.execute(ctx),
            Self::List(command) => command.execute(ctx),
            Self::Clear(command) => command.execute(ctx),
            Self::Undo(command) => command.execute(ctx),
            Self::Redo(command) => command.execute(ctx),
            Self::Help(command) => command.execute(ctx),
            Self::Exit(command) => command.execute(ctx),
        }
    }
}

/// Usage text of every command, one block per command.
pub fn usage_overview() -> String {
    [
        AddCommand::USAGE,
        EditCommand::USAGE,
        IncreaseCommand::USAGE,
        DecreaseCommand::USAGE,
        FindCommand::USAGE,
        DeleteCommand::USAGE,
        ListCommand::USAGE,
        ClearCommand::USAGE,
        UndoCommand::USAGE,
        RedoCommand::USAGE,
        HelpCommand::USAGE,
        ExitCommand::USAGE,
    ]
    .join("\n\n")
}
