//! Uniqueness-enforcing customer collection.
//!
//! # Responsibility
//! - Hold customers in insertion order for display.
//! - Enforce identity uniqueness on add, edit and bulk replace.
//!
//! # Invariants
//! - No two stored customers share identity (phone OR email).
//! - Edits keep the edited customer at its original position.
//! - Removal and edit targets are located by full-field equality.

use crate::model::customer::{Customer, CustomerIdentifier};
use crate::model::fields::{Email, Phone, Reward};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Target customer, identifier or index has no match.
    NotFound,
    /// Operation would store two customers with the same identity.
    DuplicateEntry,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "customer not found"),
            Self::DuplicateEntry => write!(f, "customer identity already exists"),
        }
    }
}

impl Error for RegistryError {}

/// Ordered customer registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `customers`, rejecting identity collisions.
    pub fn from_customers(customers: Vec<Customer>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.replace_all(customers)?;
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn as_slice(&self) -> &[Customer] {
        &self.customers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.customers.get(index)
    }

    /// Returns true when any stored customer shares identity with `customer`.
    pub fn contains(&self, customer: &Customer) -> bool {
        self.customers
            .iter()
            .any(|existing| existing.same_identity(customer))
    }

    /// Appends a customer whose identity is not yet stored.
    pub fn add(&mut self, customer: Customer) -> RegistryResult<()> {
        if self.contains(&customer) {
            return Err(RegistryError::DuplicateEntry);
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may keep the identity of `target` but must not collide with
    /// any other stored customer.
    pub fn set_customer(&mut self, target: &Customer, edited: Customer) -> RegistryResult<()> {
        let index = self
            .position_of(target)
            .ok_or(RegistryError::NotFound)?;

        let collides = self
            .customers
            .iter()
            .enumerate()
            .any(|(other, existing)| other != index && existing.same_identity(&edited));
        if collides {
            return Err(RegistryError::DuplicateEntry);
        }

        self.customers[index] = edited;
        Ok(())
    }

    /// Removes the customer with exactly the same fields as `customer`.
    pub fn remove(&mut self, customer: &Customer) -> RegistryResult<Customer> {
        let index = self
            .position_of(customer)
            .ok_or(RegistryError::NotFound)?;
        Ok(self.customers.remove(index))
    }

    /// Index of the customer registered with `phone`.
    pub fn find_by_phone(&self, phone: &Phone) -> RegistryResult<usize> {
        self.customers
            .iter()
            .position(|customer| customer.phone() == phone)
            .ok_or(RegistryError::NotFound)
    }

    /// Index of the customer registered with `email`.
    pub fn find_by_email(&self, email: &Email) -> RegistryResult<usize> {
        self.customers
            .iter()
            .position(|customer| customer.email() == email)
            .ok_or(RegistryError::NotFound)
    }

    /// Index of the customer addressed by `identifier`.
    pub fn find(&self, identifier: &CustomerIdentifier) -> RegistryResult<usize> {
        match identifier {
            CustomerIdentifier::Phone(phone) => self.find_by_phone(phone),
            CustomerIdentifier::Email(email) => self.find_by_email(email),
        }
    }

    /// Current reward balance of the customer addressed by `identifier`.
    pub fn current_reward(&self, identifier: &CustomerIdentifier) -> RegistryResult<Reward> {
        let index = self.find(identifier)?;
        Ok(self.customers[index].reward())
    }

    /// Replaces all customers; the input must be identity-unique.
    ///
    /// On failure the registry is left unchanged.
    pub fn replace_all(&mut self, customers: Vec<Customer>) -> RegistryResult<()> {
        if !customers_are_unique(&customers) {
            return Err(RegistryError::DuplicateEntry);
        }
        self.customers = customers;
        Ok(())
    }

    /// Resets contents to a copy of `other`, which is unique by construction.
    pub fn reset_from(&mut self, other: &CustomerRegistry) {
        self.customers = other.customers.clone();
    }

    /// Removes every customer.
    pub fn clear(&mut self) {
        self.customers.clear();
    }

    fn position_of(&self, target: &Customer) -> Option<usize> {
        self.customers
            .iter()
            .position(|existing| existing.identical(target))
    }
}

fn customers_are_unique(customers: &[Customer]) -> bool {
    for (index, customer) in customers.iter().enumerate() {
        if customers[index + 1..]
            .iter()
            .any(|other| customer.same_identity(other))
        {
            return false;
        }
    }
    true
}

impl Display for CustomerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} customers", self.customers.len())
    }
}
