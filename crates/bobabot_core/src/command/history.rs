use super::{CommandOutcome, CommandResult};
use crate::service::context::{AppContext, CustomerFilter};

/// Restores the state before the last committed change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub const WORD: &'static str = "undo";
    pub const USAGE: &'static str = "undo: Reverts bobaBot to the state before the previous \
change.\nExample: undo";

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        ctx.undo()?;
        ctx.update_filter(CustomerFilter::All);
        Ok(CommandResult::message("Undo successful"))
    }
}

/// Re-applies the most recently undone change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub const WORD: &'static str = "redo";
    pub const USAGE: &'static str = "redo: Restores the change most recently reverted by \
undo.\nExample: redo";

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        ctx.redo()?;
        ctx.update_filter(CustomerFilter::All);
        Ok(CommandResult::message("Redo successful"))
    }
}
