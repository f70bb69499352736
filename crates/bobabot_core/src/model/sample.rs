//! Sample customers used to seed a fresh installation.

use crate::model::customer::Customer;
use crate::model::fields::{BirthdayMonth, Email, FieldError, Name, Phone, Reward, Tag};
use crate::model::registry::CustomerRegistry;
use std::collections::BTreeSet;

const SAMPLE_ROWS: &[(&str, &str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "1", "4200", &["friends"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "3", "6900", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "5", "12345", &["neighbours"]),
    ("David Li", "91031282", "lidavid@example.com", "6", "0", &["family"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "12", "4000", &["classmates"]),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "9", "5700", &["colleagues"]),
];

/// Returns the built-in sample customers in display order.
pub fn sample_customers() -> Vec<Customer> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|row| sample_customer(row).ok())
        .collect()
}

/// Returns a registry populated with [`sample_customers`].
pub fn sample_registry() -> CustomerRegistry {
    let mut registry = CustomerRegistry::new();
    for customer in sample_customers() {
        // Sample rows have distinct phones and emails.
        let _ = registry.add(customer);
    }
    registry
}

fn sample_customer(
    (name, phone, email, month, reward, tags): &(&str, &str, &str, &str, &str, &[&str]),
) -> Result<Customer, FieldError> {
    let tags = tags
        .iter()
        .map(|tag| Tag::parse(tag))
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(Customer::new(
        Name::parse(name)?,
        Phone::parse(phone)?,
        Email::parse(email)?,
        BirthdayMonth::parse(month)?,
        Reward::parse(reward)?,
        tags,
    ))
}
