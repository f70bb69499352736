use bobabot_core::model::sample::sample_customers;
use bobabot_core::{
    BirthdayMonth, Customer, CustomerIdentifier, CustomerRegistry, Email, Name, Phone,
    RegistryError, Reward,
};
use std::collections::BTreeSet;

fn customer(name: &str, phone: &str, email: &str) -> Customer {
    Customer::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        BirthdayMonth::parse("1").unwrap(),
        Reward::parse("100").unwrap(),
        BTreeSet::new(),
    )
}

fn phone(raw: &str) -> CustomerIdentifier {
    CustomerIdentifier::Phone(Phone::parse(raw).unwrap())
}

#[test]
fn add_then_contains() {
    let mut registry = CustomerRegistry::new();
    for sample in sample_customers() {
        registry.add(sample.clone()).unwrap();
        assert!(registry.contains(&sample));
    }
    assert_eq!(registry.len(), 6);
}

#[test]
fn add_rejects_identity_collision_and_leaves_registry_unchanged() {
    let mut registry = CustomerRegistry::new();
    let alex = customer("Alex", "87438807", "alex@example.com");
    registry.add(alex.clone()).unwrap();

    let same_email = customer("Other", "11111111", "alex@example.com");
    assert_eq!(registry.add(same_email).unwrap_err(), RegistryError::DuplicateEntry);
    assert_eq!(registry.as_slice(), &[alex]);
}

#[test]
fn set_customer_preserves_position() {
    let mut registry = CustomerRegistry::from_customers(vec![
        customer("Ann", "111", "ann@example.com"),
        customer("Bob", "222", "bob@example.com"),
        customer("Cat", "333", "cat@example.com"),
    ])
    .unwrap();
    let bob = registry.get(1).unwrap().clone();
    let renamed = customer("Robert", "222", "bob@example.com");

    registry.set_customer(&bob, renamed.clone()).unwrap();
    assert_eq!(registry.get(1), Some(&renamed));
    assert_eq!(registry.len(), 3);
}

#[test]
fn set_customer_may_keep_own_identity_but_not_take_another() {
    let ann = customer("Ann", "111", "ann@example.com");
    let bob = customer("Bob", "222", "bob@example.com");
    let mut registry = CustomerRegistry::from_customers(vec![ann.clone(), bob]).unwrap();

    let new_email_same_phone = customer("Ann", "111", "ann.new@example.com");
    registry
        .set_customer(&ann, new_email_same_phone.clone())
        .unwrap();

    let stolen_phone = customer("Ann", "222", "ann.new@example.com");
    assert_eq!(
        registry
            .set_customer(&new_email_same_phone, stolen_phone)
            .unwrap_err(),
        RegistryError::DuplicateEntry
    );
}

#[test]
fn set_customer_and_remove_require_exact_target() {
    let ann = customer("Ann", "111", "ann@example.com");
    let mut registry = CustomerRegistry::from_customers(vec![ann.clone()]).unwrap();
    let lookalike = customer("Annie", "111", "ann@example.com");

    assert_eq!(
        registry.set_customer(&lookalike, ann.clone()).unwrap_err(),
        RegistryError::NotFound
    );
    assert_eq!(registry.remove(&lookalike).unwrap_err(), RegistryError::NotFound);
    assert_eq!(registry.remove(&ann).unwrap(), ann);
    assert!(registry.is_empty());
}

#[test]
fn find_by_phone_and_email() {
    let registry = CustomerRegistry::from_customers(vec![
        customer("Ann", "111", "ann@example.com"),
        customer("Bob", "222", "bob@example.com"),
    ])
    .unwrap();

    assert_eq!(registry.find_by_phone(&Phone::parse("222").unwrap()).unwrap(), 1);
    assert_eq!(
        registry
            .find_by_email(&Email::parse("ann@example.com").unwrap())
            .unwrap(),
        0
    );
    assert_eq!(registry.find(&phone("999")).unwrap_err(), RegistryError::NotFound);
    assert_eq!(registry.current_reward(&phone("111")).unwrap().points(), 100);
}

#[test]
fn replace_all_rejects_duplicates_without_change() {
    let ann = customer("Ann", "111", "ann@example.com");
    let mut registry = CustomerRegistry::from_customers(vec![ann.clone()]).unwrap();

    let clash = vec![
        customer("Bob", "222", "bob@example.com"),
        customer("Bobby", "222", "bobby@example.com"),
    ];
    assert_eq!(registry.replace_all(clash).unwrap_err(), RegistryError::DuplicateEntry);
    assert_eq!(registry.as_slice(), &[ann]);

    registry
        .replace_all(vec![customer("Cat", "333", "cat@example.com")])
        .unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(0).unwrap().name().as_str(), "Cat");
}
