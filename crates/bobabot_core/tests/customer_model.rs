use bobabot_core::model::fields::{
    BIRTHDAY_MONTH_CONSTRAINTS, PHONE_CONSTRAINTS, REWARD_CONSTRAINTS,
};
use bobabot_core::{
    BirthdayMonth, Customer, CustomerIdentifier, Email, FieldError, Name, Phone, Reward, Tag,
};
use std::collections::BTreeSet;

fn customer(name: &str, phone: &str, email: &str, tags: &[&str]) -> Customer {
    Customer::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        BirthdayMonth::parse("5").unwrap(),
        Reward::parse("4200").unwrap(),
        tags.iter().map(|tag| Tag::parse(tag).unwrap()).collect(),
    )
}

#[test]
fn field_errors_display_their_constraint() {
    assert_eq!(
        Phone::parse("12").unwrap_err().to_string(),
        PHONE_CONSTRAINTS
    );
    assert_eq!(
        BirthdayMonth::parse("two").unwrap_err().to_string(),
        BIRTHDAY_MONTH_CONSTRAINTS
    );
    assert_eq!(Reward::parse("-1").unwrap_err().to_string(), REWARD_CONSTRAINTS);
    assert_eq!(FieldError::Tag.constraint(), "Tags names should be alphanumeric");
}

#[test]
fn reward_keeps_canonical_form() {
    let reward = Reward::parse("000120").unwrap();
    assert_eq!(reward.points(), 120);
    assert_eq!(reward.to_string(), "120");
    assert_eq!(reward.display_value(), "\u{1F381} 120");
}

#[test]
fn identity_matches_on_phone_or_email() {
    let alex = customer("Alex Yeoh", "87438807", "alexyeoh@example.com", &[]);
    let same_phone = customer("Someone Else", "87438807", "other@example.com", &[]);
    let same_email = customer("Someone Else", "11111111", "alexyeoh@example.com", &[]);
    let stranger = customer("Alex Yeoh", "22222222", "stranger@example.com", &[]);

    assert!(alex.same_identity(&same_phone));
    assert!(alex.same_identity(&same_email));
    assert!(!alex.same_identity(&stranger));
    assert!(!alex.identical(&same_phone));
    assert!(alex.identical(&alex.clone()));
}

#[test]
fn identical_compares_tags_as_a_set() {
    let first = customer("Ann", "12345", "ann@example.com", &["gold", "vip"]);
    let second = customer("Ann", "12345", "ann@example.com", &["vip", "gold"]);
    let untagged = customer("Ann", "12345", "ann@example.com", &[]);

    assert!(first.identical(&second));
    assert!(!first.identical(&untagged));
}

#[test]
fn display_lists_all_fields_and_tags() {
    let alex = customer("Alex Yeoh", "87438807", "alexyeoh@example.com", &["friends"]);
    assert_eq!(
        alex.to_string(),
        "Alex Yeoh; Phone: 87438807; Email: alexyeoh@example.com; Birthday Month: 5; \
Reward: \u{1F381} 4200; Tags: [friends]"
    );

    let untagged = customer("Bo", "123", "bo@example.com", &[]);
    assert!(!untagged.to_string().contains("Tags"));
}

#[test]
fn with_reward_changes_only_the_balance() {
    let alex = customer("Alex Yeoh", "87438807", "alexyeoh@example.com", &["friends"]);
    let richer = alex.with_reward(Reward::from_points(4300).unwrap());

    assert_eq!(richer.reward().points(), 4300);
    assert_eq!(richer.name(), alex.name());
    assert_eq!(richer.tags(), alex.tags());
    assert!(richer.same_identity(&alex));
}

#[test]
fn identifier_matches_customer_fields() {
    let alex = customer("Alex Yeoh", "87438807", "alexyeoh@example.com", &[]);
    assert!(alex.matches(&CustomerIdentifier::Phone(Phone::parse("87438807").unwrap())));
    assert!(alex.matches(&CustomerIdentifier::Email(
        Email::parse("alexyeoh@example.com").unwrap()
    )));
    assert!(!alex.matches(&CustomerIdentifier::Phone(Phone::parse("000").unwrap())));
    assert_eq!(alex.tags(), &BTreeSet::new());
}
