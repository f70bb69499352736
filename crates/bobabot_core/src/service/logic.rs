//! Command execution entry point for front ends.
//!
//! # Responsibility
//! - Bootstrap the application context from storage.
//! - Run parse -> execute -> save for each line of user input.
//!
//! # Invariants
//! - The history's initial snapshot is the registry produced at startup.
//! - Data is saved after every successful command that may change it.
//! - A save failure is reported but the in-memory change is kept.

use crate::command::{CommandError, CommandResult};
use crate::model::customer::Customer;
use crate::model::registry::CustomerRegistry;
use crate::model::sample::sample_registry;
use crate::model::versioned::DEFAULT_HISTORY_CAPACITY;
use crate::parser::{parse_command, ParseError};
use crate::service::context::AppContext;
use crate::storage::{CustomerStore, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub const MESSAGE_SAVE_FAILED: &str = "Could not save data to file: ";
pub const MESSAGE_CORRUPT_DATA: &str =
    "Data file not in the correct format. Starting with an empty bobaBot.";

pub type LogicResult<T> = Result<T, LogicError>;

#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
    /// Saving after a successful command failed.
    Storage(StorageError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{MESSAGE_SAVE_FAILED}{err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
            Self::Storage(err) => Some(err),
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

impl From<StorageError> for LogicError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owns the application context and its backing store.
pub struct LogicManager<S: CustomerStore> {
    context: AppContext,
    store: S,
    startup_warning: Option<String>,
}

impl<S: CustomerStore> LogicManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_history_capacity(store, DEFAULT_HISTORY_CAPACITY)
    }

    /// Loads the registry from `store`.
    ///
    /// A missing data file seeds the sample customers. An unreadable or
    /// invalid file starts empty and records a startup warning.
    pub fn with_history_capacity(store: S, capacity: usize) -> Self {
        let (registry, startup_warning) = match store.load() {
            Ok(Some(registry)) => (registry, None),
            Ok(None) => {
                info!("event=startup_load module=logic status=ok source=sample");
                (sample_registry(), None)
            }
            Err(err) => {
                warn!(
                    "event=startup_load module=logic status=degraded source=empty path={}",
                    store.path().display()
                );
                (
                    CustomerRegistry::new(),
                    Some(format!("{MESSAGE_CORRUPT_DATA} ({err})")),
                )
            }
        };

        Self {
            context: AppContext::with_history_capacity(registry, capacity),
            store,
            startup_warning,
        }
    }

    /// Parses and runs one command, then saves when data may have changed.
    ///
    /// # Errors
    /// - `Parse` / `Command` leave all state unchanged.
    /// - `Storage` means the command took effect in memory but was not saved.
    pub fn execute(&mut self, input: &str) -> LogicResult<CommandResult> {
        let command = match parse_command(input) {
            Ok(command) => command,
            Err(err) => {
                info!(
                    "event=command_execute module=logic status=rejected stage=parse error_code={}",
                    parse_error_code(&err)
                );
                return Err(err.into());
            }
        };

        let started_at = Instant::now();
        let word = command.word();
        let result = match command.execute(&mut self.context) {
            Ok(result) => result,
            Err(err) => {
                info!(
                    "event=command_execute module=logic status=rejected stage=execute command={} error_code={}",
                    word,
                    command_error_code(&err)
                );
                return Err(err.into());
            }
        };

        if command.changes_data() {
            self.store.save(self.context.registry())?;
        }
        info!(
            "event=command_execute module=logic status=ok command={} duration_ms={} count={}",
            word,
            started_at.elapsed().as_millis(),
            self.context.registry().len()
        );
        Ok(result)
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn registry(&self) -> &CustomerRegistry {
        self.context.registry()
    }

    /// Customers the front end should currently display.
    pub fn filtered_customers(&self) -> Vec<&Customer> {
        self.context.filtered_customers()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Message for the user when startup data could not be loaded.
    pub fn startup_warning(&self) -> Option<&str> {
        self.startup_warning.as_deref()
    }
}

fn parse_error_code(err: &ParseError) -> &'static str {
    match err {
        ParseError::InvalidFormat { .. } => "invalid_format",
        ParseError::UnknownCommand(_) => "unknown_command",
        ParseError::Validation(_) => "invalid_field",
        ParseError::NoFieldsEdited => "no_fields_edited",
    }
}

fn command_error_code(err: &CommandError) -> &'static str {
    match err {
        CommandError::CustomerNotFound => "customer_not_found",
        CommandError::InvalidIndex(_) => "invalid_index",
        CommandError::DuplicateCustomer => "duplicate_customer",
        CommandError::NoPreviousState => "no_previous_state",
        CommandError::NoNextState => "no_next_state",
        CommandError::RewardOverflow => "reward_overflow",
    }
}
