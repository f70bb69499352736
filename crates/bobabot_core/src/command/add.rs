use super::{CommandError, CommandOutcome, CommandResult};
use crate::model::customer::Customer;
use crate::service::context::AppContext;

/// Registers a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    customer: Customer,
}

impl AddCommand {
    pub const WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a customer to bobaBot. \
Parameters: n/NAME p/PHONE e/EMAIL b/BIRTHDAY_MONTH r/REWARD [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com b/1 r/5000 t/GOLD t/MEMBER";

    pub fn new(customer: Customer) -> Self {
        Self { customer }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        if ctx.has_customer(&self.customer) {
            return Err(CommandError::DuplicateCustomer);
        }
        ctx.add_customer(self.customer.clone())?;
        ctx.commit();
        Ok(CommandResult::message(format!(
            "New customer added: {}",
            self.customer
        )))
    }
}
