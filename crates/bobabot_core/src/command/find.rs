use super::{CommandOutcome, CommandResult};
use crate::service::context::{AppContext, CustomerFilter};

/// Narrows the visible customers to name keyword matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: CustomerFilter,
}

impl FindCommand {
    pub const WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds all customers whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    pub fn new(filter: CustomerFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &CustomerFilter {
        &self.filter
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        ctx.update_filter(self.filter.clone());
        let shown = ctx.filtered_customers().len();
        Ok(CommandResult::message(format!("{shown} customers listed!")))
    }
}
