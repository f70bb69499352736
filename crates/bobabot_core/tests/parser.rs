use bobabot_core::command::{
    AddCommand, DecreaseCommand, DeleteCommand, DeleteTarget, EditCommand, FindCommand,
    IncreaseCommand, ListCommand, UndoCommand,
};
use bobabot_core::model::fields::{EMAIL_CONSTRAINTS, NAME_CONSTRAINTS, PHONE_CONSTRAINTS};
use bobabot_core::{
    parse_command, Command, CustomerFilter, CustomerIdentifier, FieldError, ParseError, Phone,
};

fn phone(raw: &str) -> CustomerIdentifier {
    CustomerIdentifier::Phone(Phone::parse(raw).unwrap())
}

fn invalid_format(usage: &'static str) -> ParseError {
    ParseError::InvalidFormat { usage }
}

#[test]
fn add_builds_full_customer() {
    let input = "add n/Alex Yeoh p/87438807 e/alexyeoh@example.com b/1 r/4200 t/friends t/vip";
    let command = parse_command(input).unwrap();
    let Command::Add(add) = command else {
        panic!("expected add command");
    };
    let customer = add.customer();
    assert_eq!(customer.name().as_str(), "Alex Yeoh");
    assert_eq!(customer.phone().as_str(), "87438807");
    assert_eq!(customer.birthday_month().month(), 1);
    assert_eq!(customer.reward().points(), 4200);
    assert_eq!(customer.tags().len(), 2);
}

#[test]
fn add_accepts_fields_in_any_order() {
    let command = parse_command("add r/0 b/12 e/ann@example.com p/123 n/Ann").unwrap();
    assert!(matches!(command, Command::Add(_)));
}

#[test]
fn add_requires_every_field_once() {
    assert_eq!(
        parse_command("add n/Ann p/123 e/ann@example.com b/1").unwrap_err(),
        invalid_format(AddCommand::USAGE)
    );
    assert_eq!(
        parse_command("add n/Ann n/Bo p/123 e/ann@example.com b/1 r/0").unwrap_err(),
        invalid_format(AddCommand::USAGE)
    );
    assert_eq!(
        parse_command("add extra n/Ann p/123 e/ann@example.com b/1 r/0").unwrap_err(),
        invalid_format(AddCommand::USAGE)
    );
}

#[test]
fn add_surfaces_field_constraints() {
    let err = parse_command("add n/R@chel p/123 e/r@example.com b/1 r/0").unwrap_err();
    assert_eq!(err, ParseError::Validation(FieldError::Name));
    assert_eq!(err.to_string(), NAME_CONSTRAINTS);

    let err = parse_command("add n/Ann p/12 e/ann@example.com b/1 r/0").unwrap_err();
    assert_eq!(err.to_string(), PHONE_CONSTRAINTS);

    let err = parse_command("add n/Ann p/123 e/example.com b/1 r/0").unwrap_err();
    assert_eq!(err.to_string(), EMAIL_CONSTRAINTS);

    let err = parse_command("add n/Ann p/123 e/ann@example.com b/1 r/0 t/#friend").unwrap_err();
    assert_eq!(err, ParseError::Validation(FieldError::Tag));
}

#[test]
fn invalid_format_message_carries_usage() {
    let err = parse_command("add").unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Invalid command format! \n{}", AddCommand::USAGE)
    );
}

#[test]
fn edit_uses_first_flag_as_identifier() {
    let command = parse_command("edit p/87438807 p/91234567 n/Alex Tan").unwrap();
    let Command::Edit(edit) = command else {
        panic!("expected edit command");
    };
    assert_eq!(edit.identifier(), &phone("87438807"));
    let descriptor = edit.descriptor();
    assert_eq!(descriptor.phone.as_ref().unwrap().as_str(), "91234567");
    assert_eq!(descriptor.name.as_ref().unwrap().as_str(), "Alex Tan");
    assert!(descriptor.email.is_none());
    assert!(descriptor.tags.is_none());
}

#[test]
fn edit_lone_empty_tag_clears_tags() {
    let Command::Edit(edit) = parse_command("edit e/ann@example.com t/").unwrap() else {
        panic!("expected edit command");
    };
    assert_eq!(edit.descriptor().tags.as_ref().map(|tags| tags.len()), Some(0));
}

#[test]
fn edit_rejects_missing_identifier_and_empty_changes() {
    assert_eq!(
        parse_command("edit n/Bob p/87438807").unwrap_err(),
        invalid_format(EditCommand::USAGE)
    );
    assert_eq!(
        parse_command("edit 1 n/Bob").unwrap_err(),
        invalid_format(EditCommand::USAGE)
    );
    let err = parse_command("edit p/87438807").unwrap_err();
    assert_eq!(err, ParseError::NoFieldsEdited);
    assert_eq!(err.to_string(), "At least one field to edit must be provided.");
}

#[test]
fn edit_bad_value_surfaces_constraint() {
    assert_eq!(
        parse_command("edit p/87438807 b/13").unwrap_err(),
        ParseError::Validation(FieldError::BirthdayMonth)
    );
}

#[test]
fn increase_reads_amount_from_preamble_or_trailing_token() {
    let expected = Command::Increase(IncreaseCommand::new(phone("87438807"), 100));
    assert_eq!(parse_command("increase 100 p/87438807").unwrap(), expected);
    assert_eq!(parse_command("increase p/87438807 100").unwrap(), expected);
}

#[test]
fn decrease_accepts_email_identifier() {
    let Command::Decrease(decrease) = parse_command("decrease 5 e/alexyeoh@example.com").unwrap()
    else {
        panic!("expected decrease command");
    };
    assert_eq!(decrease.amount(), 5);
}

#[test]
fn reward_commands_report_every_problem_as_format_error() {
    for input in [
        "increase p/87438807",
        "increase -5 p/87438807",
        "increase five p/87438807",
        "increase 5",
        "increase 5 p/87438807 e/alexyeoh@example.com",
        "increase 5 p/87438807 p/12345678",
        "increase 5 p/12",
        "increase 2147483648 p/87438807",
    ] {
        assert_eq!(
            parse_command(input).unwrap_err(),
            invalid_format(IncreaseCommand::USAGE),
            "{input}"
        );
    }
    assert_eq!(
        parse_command("decrease 5 e/not-an-email").unwrap_err(),
        invalid_format(DecreaseCommand::USAGE)
    );
}

#[test]
fn delete_by_identifier_or_index() {
    assert_eq!(
        parse_command("delete p/87438807").unwrap(),
        Command::Delete(DeleteCommand::new(DeleteTarget::Identifier(phone("87438807"))))
    );
    assert_eq!(
        parse_command("delete 2").unwrap(),
        Command::Delete(DeleteCommand::new(DeleteTarget::Index(2)))
    );
    for input in ["delete", "delete 0", "delete x", "delete 1 p/87438807"] {
        assert_eq!(
            parse_command(input).unwrap_err(),
            invalid_format(DeleteCommand::USAGE),
            "{input}"
        );
    }
}

#[test]
fn find_collects_keywords() {
    assert_eq!(
        parse_command("find alex  bernice").unwrap(),
        Command::Find(FindCommand::new(CustomerFilter::name_keywords([
            "alex", "bernice"
        ])))
    );
    assert_eq!(
        parse_command("find   ").unwrap_err(),
        invalid_format(FindCommand::USAGE)
    );
}

#[test]
fn argument_free_commands_reject_arguments() {
    assert!(matches!(parse_command("list").unwrap(), Command::List(_)));
    assert!(matches!(parse_command("  undo  ").unwrap(), Command::Undo(_)));
    assert_eq!(
        parse_command("list 3").unwrap_err(),
        invalid_format(ListCommand::USAGE)
    );
    assert_eq!(
        parse_command("undo now").unwrap_err(),
        invalid_format(UndoCommand::USAGE)
    );
}

#[test]
fn unknown_command_echoes_raw_input() {
    let err = parse_command("fly n/Ann").unwrap_err();
    assert_eq!(err, ParseError::UnknownCommand("fly n/Ann".to_string()));
    assert_eq!(err.to_string(), "Unknown command: fly n/Ann");
}
