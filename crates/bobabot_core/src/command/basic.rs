//! Argument-free commands.

use super::{CommandOutcome, CommandResult};
use crate::service::context::{AppContext, CustomerFilter};

/// Shows every customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const WORD: &'static str = "list";
    pub const USAGE: &'static str = "list: Shows a list of all customers.\nExample: list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all customers";

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        ctx.update_filter(CustomerFilter::All);
        Ok(CommandResult::message(Self::MESSAGE_SUCCESS))
    }
}

/// Removes every customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const WORD: &'static str = "clear";
    pub const USAGE: &'static str = "clear: Deletes all customers.\nExample: clear";
    pub const MESSAGE_SUCCESS: &'static str = "bobaBot has been cleared!";

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        ctx.clear_customers();
        ctx.update_filter(CustomerFilter::All);
        ctx.commit();
        Ok(CommandResult::message(Self::MESSAGE_SUCCESS))
    }
}

/// Asks the front end to show usage help.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";
    pub const MESSAGE_SUCCESS: &'static str = "Opened help window.";

    pub fn execute(&self, _ctx: &mut AppContext) -> CommandOutcome {
        Ok(CommandResult {
            feedback: Self::MESSAGE_SUCCESS.to_string(),
            show_help: true,
            exit: false,
        })
    }
}

/// Asks the front end to shut down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const WORD: &'static str = "exit";
    pub const USAGE: &'static str = "exit: Exits the program.\nExample: exit";
    pub const MESSAGE_SUCCESS: &'static str = "Exiting bobaBot as requested ...";

    pub fn execute(&self, _ctx: &mut AppContext) -> CommandOutcome {
        Ok(CommandResult {
            feedback: Self::MESSAGE_SUCCESS.to_string(),
            show_help: false,
            exit: true,
        })
    }
}
