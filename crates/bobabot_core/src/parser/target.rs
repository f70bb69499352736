//! Parsers for commands that address existing customers.

use super::tokenizer::{tokenize, Prefix, PREFIX_EMAIL, PREFIX_PHONE};
use super::{ParseError, ParseResult};
use crate::command::{DecreaseCommand, DeleteCommand, DeleteTarget, FindCommand, IncreaseCommand};
use crate::model::customer::CustomerIdentifier;
use crate::model::fields::{Email, Phone, Reward};
use crate::service::context::CustomerFilter;

const IDENTIFIER_PREFIXES: [Prefix; 2] = [PREFIX_PHONE, PREFIX_EMAIL];

/// `increase AMOUNT p/PHONE|e/EMAIL`
pub(super) fn parse_increase(args: &str) -> ParseResult<IncreaseCommand> {
    let (identifier, amount) = reward_arguments(args, IncreaseCommand::USAGE)?;
    Ok(IncreaseCommand::new(identifier, amount))
}

/// `decrease AMOUNT p/PHONE|e/EMAIL`
pub(super) fn parse_decrease(args: &str) -> ParseResult<DecreaseCommand> {
    let (identifier, amount) = reward_arguments(args, DecreaseCommand::USAGE)?;
    Ok(DecreaseCommand::new(identifier, amount))
}

/// `delete p/PHONE|e/EMAIL` or `delete INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    let map = tokenize(args, &IDENTIFIER_PREFIXES);
    let target = match map.entries() {
        [] => parse_index(map.preamble())
            .map(DeleteTarget::Index)
            .ok_or(ParseError::invalid_format(DeleteCommand::USAGE))?,
        [(prefix, value)] if map.preamble().is_empty() => {
            DeleteTarget::Identifier(parse_identifier(*prefix, value, DeleteCommand::USAGE)?)
        }
        _ => return Err(ParseError::invalid_format(DeleteCommand::USAGE)),
    };
    Ok(DeleteCommand::new(target))
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub(super) fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<&str> = args.split_whitespace().collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(FindCommand::USAGE));
    }
    Ok(FindCommand::new(CustomerFilter::name_keywords(keywords)))
}

/// Identifier and amount for `increase`/`decrease`.
///
/// The amount is the preamble. With an empty preamble the last word of the
/// identifier value is taken instead, so `p/87438807 100` also works. Every
/// failure, field constraints included, is reported as a format problem.
fn reward_arguments(args: &str, usage: &'static str) -> ParseResult<(CustomerIdentifier, u32)> {
    let invalid = || ParseError::invalid_format(usage);
    let map = tokenize(args, &IDENTIFIER_PREFIXES);
    let [(prefix, value)] = map.entries() else {
        return Err(invalid());
    };

    let (identifier_text, amount_text) = if map.preamble().is_empty() {
        value
            .rsplit_once(char::is_whitespace)
            .map(|(identifier, amount)| (identifier.trim_end(), amount))
            .ok_or_else(invalid)?
    } else {
        (value.as_str(), map.preamble())
    };

    let amount = parse_amount(amount_text).ok_or_else(invalid)?;
    let identifier = parse_identifier(*prefix, identifier_text, usage).map_err(|_| invalid())?;
    Ok((identifier, amount))
}

fn parse_identifier(
    prefix: Prefix,
    value: &str,
    usage: &'static str,
) -> ParseResult<CustomerIdentifier> {
    if prefix == PREFIX_PHONE {
        Ok(CustomerIdentifier::Phone(Phone::parse(value)?))
    } else if prefix == PREFIX_EMAIL {
        Ok(CustomerIdentifier::Email(Email::parse(value)?))
    } else {
        Err(ParseError::invalid_format(usage))
    }
}

/// Non-negative point count within the reward range.
fn parse_amount(text: &str) -> Option<u32> {
    let amount: i64 = text.parse().ok()?;
    u32::try_from(amount)
        .ok()
        .filter(|amount| *amount <= Reward::MAX_POINTS)
}

/// Positive 1-based display index.
fn parse_index(text: &str) -> Option<usize> {
    text.parse::<usize>().ok().filter(|index| *index > 0)
}
