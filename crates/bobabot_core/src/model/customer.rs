//! Customer record and identity rules.
//!
//! # Responsibility
//! - Define the canonical customer record tracked by the registry.
//! - Keep identity comparison separate from full-field comparison.
//!
//! # Invariants
//! - Two customers share identity when their phone OR email matches.
//! - `identical` compares every field, tags included.

use crate::model::fields::{BirthdayMonth, Email, Name, Phone, Reward, Tag};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Canonical customer record.
///
/// Tags are kept in a sorted set so that rendering and snapshots are
/// deterministic; the set itself carries no ordering meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: Name,
    phone: Phone,
    email: Email,
    birthday_month: BirthdayMonth,
    reward: Reward,
    tags: BTreeSet<Tag>,
}

impl Customer {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        birthday_month: BirthdayMonth,
        reward: Reward,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            birthday_month,
            reward,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn birthday_month(&self) -> BirthdayMonth {
        self.birthday_month
    }

    pub fn reward(&self) -> Reward {
        self.reward
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns a copy of this customer with a different reward balance.
    pub fn with_reward(&self, reward: Reward) -> Self {
        Self {
            reward,
            ..self.clone()
        }
    }

    /// Identity comparison used for uniqueness: phone OR email match.
    pub fn same_identity(&self, other: &Customer) -> bool {
        self.phone == other.phone || self.email == other.email
    }

    /// Full-field comparison used for exact lookup and removal.
    pub fn identical(&self, other: &Customer) -> bool {
        self == other
    }

    /// Returns whether this customer is addressed by `identifier`.
    pub fn matches(&self, identifier: &CustomerIdentifier) -> bool {
        match identifier {
            CustomerIdentifier::Phone(phone) => &self.phone == phone,
            CustomerIdentifier::Email(email) => &self.email == email,
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Birthday Month: {}; Reward: {}",
            self.name,
            self.phone,
            self.email,
            self.birthday_month,
            self.reward.display_value()
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

/// Lookup key accepted by identifier-based commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerIdentifier {
    Phone(Phone),
    Email(Email),
}

impl Display for CustomerIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phone(phone) => write!(f, "phone {phone}"),
            Self::Email(email) => write!(f, "email {email}"),
        }
    }
}
