//! Reward point adjustments.
//!
//! Both commands compute the new balance, then reuse the edit pathway so that
//! lookup, replacement and commit behave exactly like `edit r/..`.

use super::{CommandError, CommandOutcome, EditCommand, EditDescriptor};
use crate::model::customer::CustomerIdentifier;
use crate::model::fields::Reward;
use crate::service::context::AppContext;

/// Adds reward points to a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncreaseCommand {
    identifier: CustomerIdentifier,
    amount: u32,
}

impl IncreaseCommand {
    pub const WORD: &'static str = "increase";
    pub const USAGE: &'static str = "increase: Increases the reward points of the customer \
identified by the phone number or email address used to register for membership.\n\
Parameters: AMOUNT (non-negative integer) p/PHONE or e/EMAIL\n\
Example: increase 100 p/98765432";

    pub fn new(identifier: CustomerIdentifier, amount: u32) -> Self {
        Self { identifier, amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        let current = ctx
            .current_reward(&self.identifier)
            .map_err(|_| CommandError::CustomerNotFound)?;
        let updated = current
            .checked_add(self.amount)
            .ok_or(CommandError::RewardOverflow)?;
        apply_reward(ctx, &self.identifier, updated)
    }
}

/// Removes reward points from a customer, stopping at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecreaseCommand {
    identifier: CustomerIdentifier,
    amount: u32,
}

impl DecreaseCommand {
    pub const WORD: &'static str = "decrease";
    pub const USAGE: &'static str = "decrease: Decreases the reward points of the customer \
identified by the phone number or email address used to register for membership. \
The balance never drops below 0.\n\
Parameters: AMOUNT (non-negative integer) p/PHONE or e/EMAIL\n\
Example: decrease 100 e/johnd@example.com";

    pub fn new(identifier: CustomerIdentifier, amount: u32) -> Self {
        Self { identifier, amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn execute(&self, ctx: &mut AppContext) -> CommandOutcome {
        let current = ctx
            .current_reward(&self.identifier)
            .map_err(|_| CommandError::CustomerNotFound)?;
        apply_reward(ctx, &self.identifier, current.saturating_sub(self.amount))
    }
}

fn apply_reward(
    ctx: &mut AppContext,
    identifier: &CustomerIdentifier,
    reward: Reward,
) -> CommandOutcome {
    let descriptor = EditDescriptor {
        reward: Some(reward),
        ..EditDescriptor::default()
    };
    EditCommand::new(identifier.clone(), descriptor).execute(ctx)
}
