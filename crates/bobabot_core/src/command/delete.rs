use super::{CommandError, CommandOutcome, CommandResult};
use crate::model::customer::CustomerIdentifier;
use crate::service::context::AppContext;

/// How `delete` selects its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// Customer registered under a phone number or email.
    Identifier(CustomerIdentifier),
    /// 1-based position in the currently displayed list.
    Index(usize),
}

/// Removes one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target: DeleteTarget,
}

impl DeleteCommand {
    pub const WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the customer identified by the phone \
number or email address used to register for membership, or by the index number shown \
in the displayed customer list.\n\
Parameters: p/PHONE or e/EMAIL or INDEX (must be a positive integer)\n\
Example: delete p/98765432";

    pub fn new(target: DeleteTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &DeleteTarget {
        &self.target
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        let target = match &self.target {
            DeleteTarget::Identifier(identifier) => ctx
                .find_customer(identifier)
                .map_err(|_| CommandError::CustomerNotFound)?
                .clone(),
            DeleteTarget::Index(index) => {
                let shown = ctx.filtered_customers();
                index
                    .checked_sub(1)
                    .and_then(|zero_based| shown.get(zero_based))
                    .map(|customer| (*customer).clone())
                    .ok_or(CommandError::InvalidIndex(*index))?
            }
        };

        let removed = ctx.delete_customer(&target)?;
        ctx.commit();
        Ok(CommandResult::message(format!("Deleted Customer: {removed}")))
    }
}
