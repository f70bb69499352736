//! Parsers for commands that carry customer fields (`add`, `edit`).

use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, ALL_PREFIXES, PREFIX_BIRTHDAY_MONTH, PREFIX_EMAIL,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_REWARD, PREFIX_TAG,
};
use super::{ParseError, ParseResult};
use crate::command::{AddCommand, EditCommand, EditDescriptor};
use crate::model::customer::{Customer, CustomerIdentifier};
use crate::model::fields::{BirthdayMonth, Email, Name, Phone, Reward, Tag};
use std::collections::BTreeSet;

const SINGLE_VALUE_PREFIXES: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_BIRTHDAY_MONTH,
    PREFIX_REWARD,
];

/// `add n/NAME p/PHONE e/EMAIL b/MONTH r/REWARD [t/TAG]...`
pub(super) fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(args, &ALL_PREFIXES);
    let all_required = SINGLE_VALUE_PREFIXES
        .iter()
        .all(|prefix| map.contains(*prefix));
    if !all_required || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(AddCommand::USAGE));
    }
    if map.has_duplicates(&SINGLE_VALUE_PREFIXES) {
        return Err(ParseError::invalid_format(AddCommand::USAGE));
    }

    let single = |prefix: Prefix| map.value(prefix).unwrap_or_default();
    let customer = Customer::new(
        Name::parse(single(PREFIX_NAME))?,
        Phone::parse(single(PREFIX_PHONE))?,
        Email::parse(single(PREFIX_EMAIL))?,
        BirthdayMonth::parse(single(PREFIX_BIRTHDAY_MONTH))?,
        Reward::parse(single(PREFIX_REWARD))?,
        parse_tags(map.values(PREFIX_TAG))?,
    );
    Ok(AddCommand::new(customer))
}

/// `edit p/PHONE|e/EMAIL [n/..] [p/..] [e/..] [b/..] [r/..] [t/..]...`
///
/// The first flag names the customer; every later flag is a change.
pub(super) fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(args, &ALL_PREFIXES);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(EditCommand::USAGE));
    }

    let identifier = match map.entries().first() {
        Some((prefix, value)) if *prefix == PREFIX_PHONE => {
            CustomerIdentifier::Phone(Phone::parse(value)?)
        }
        Some((prefix, value)) if *prefix == PREFIX_EMAIL => {
            CustomerIdentifier::Email(Email::parse(value)?)
        }
        _ => return Err(ParseError::invalid_format(EditCommand::USAGE)),
    };

    let changes = map.without_first();
    if changes.has_duplicates(&SINGLE_VALUE_PREFIXES) {
        return Err(ParseError::invalid_format(EditCommand::USAGE));
    }
    let descriptor = edit_descriptor(&changes)?;
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldsEdited);
    }
    Ok(EditCommand::new(identifier, descriptor))
}

fn edit_descriptor(changes: &ArgumentMultimap) -> ParseResult<EditDescriptor> {
    let tags = match changes.values(PREFIX_TAG).as_slice() {
        [] => None,
        // A lone empty `t/` clears every tag.
        [""] => Some(BTreeSet::new()),
        values => Some(parse_tags(values.to_vec())?),
    };
    Ok(EditDescriptor {
        name: changes.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: changes.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: changes.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        birthday_month: changes
            .value(PREFIX_BIRTHDAY_MONTH)
            .map(BirthdayMonth::parse)
            .transpose()?,
        reward: changes.value(PREFIX_REWARD).map(Reward::parse).transpose()?,
        tags,
    })
}

fn parse_tags(values: Vec<&str>) -> ParseResult<BTreeSet<Tag>> {
    values
        .into_iter()
        .map(|value| Tag::parse(value).map_err(ParseError::from))
        .collect()
}
