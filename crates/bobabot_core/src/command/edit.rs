//! Partial customer update addressed by phone or email.

use super::{CommandError, CommandOutcome, CommandResult};
use crate::model::customer::{Customer, CustomerIdentifier};
use crate::model::fields::{BirthdayMonth, Email, Name, Phone, Reward, Tag};
use crate::service::context::{AppContext, CustomerFilter};
use std::collections::BTreeSet;

/// Fields to overwrite on an existing customer.
///
/// `None` keeps the existing value. `tags: Some(..)` replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub birthday_month: Option<BirthdayMonth>,
    pub reward: Option<Reward>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.birthday_month.is_some()
            || self.reward.is_some()
            || self.tags.is_some()
    }

    /// Merges the set fields onto `customer`.
    pub fn apply_to(&self, customer: &Customer) -> Customer {
        Customer::new(
            self.name.clone().unwrap_or_else(|| customer.name().clone()),
            self.phone.clone().unwrap_or_else(|| customer.phone().clone()),
            self.email.clone().unwrap_or_else(|| customer.email().clone()),
            self.birthday_month.unwrap_or(customer.birthday_month()),
            self.reward.unwrap_or(customer.reward()),
            self.tags.clone().unwrap_or_else(|| customer.tags().clone()),
        )
    }
}

/// Edits the customer registered under a phone number or email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    identifier: CustomerIdentifier,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub const WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the details of the customer identified \
by the phone number or email address used to register for membership. \
Existing values will be overwritten by the input values.\n\
Parameters: p/PHONE or e/EMAIL, then \
[n/NAME] [p/PHONE] [e/EMAIL] [b/BIRTHDAY_MONTH] [r/REWARD] [t/TAG]...\n\
Example: edit p/98349032 p/91234567 e/johndoe@example.com";

    pub fn new(identifier: CustomerIdentifier, descriptor: EditDescriptor) -> Self {
        Self {
            identifier,
            descriptor,
        }
    }

    pub fn identifier(&self) -> &CustomerIdentifier {
        &self.identifier
    }

    pub fn descriptor(&self) -> &EditDescriptor {
        &self.descriptor
    }

    /// Applies the descriptor and commits.
    ///
    /// An empty descriptor succeeds and reports the unchanged customer; the
    /// history stores nothing because the state did not change.
    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        let target = ctx
            .find_customer(&self.identifier)
            .map_err(|_| CommandError::CustomerNotFound)?
            .clone();
        let edited = self.descriptor.apply_to(&target);

        ctx.set_customer(&target, edited.clone())?;
        ctx.update_filter(CustomerFilter::All);
        ctx.commit();
        Ok(CommandResult::message(format!("Edited Customer: {edited}")))
    }
}
