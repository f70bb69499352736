use bobabot_core::model::sample::sample_registry;
use bobabot_core::storage::{JsonAdaptedCustomer, JsonSerializableRegistry};
use bobabot_core::{CustomerRegistry, CustomerStore, JsonCustomerStore, StorageError};
use std::fs;

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().join("nested").join("bobabot.json"));
    let registry = sample_registry();

    store.save(&registry).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, registry);
    assert!(!dir.path().join("nested").join("bobabot.json.tmp").exists());
}

#[test]
fn saved_file_uses_expected_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bobabot.json");
    JsonCustomerStore::new(&path).save(&sample_registry()).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value["persons"][0];
    assert_eq!(first["name"], "Alex Yeoh");
    assert_eq!(first["phone"], "87438807");
    assert_eq!(first["birthdayMonth"], "1");
    assert_eq!(first["reward"], "4200");
    assert_eq!(first["tags"][0], "friends");
}

#[test]
fn save_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonCustomerStore::new(dir.path().join("bobabot.json"));
    store.save(&sample_registry()).unwrap();
    store.save(&CustomerRegistry::new()).unwrap();

    assert!(store.load().unwrap().unwrap().is_empty());
}

#[test]
fn malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bobabot.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonCustomerStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}

#[test]
fn invalid_field_reports_constraint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bobabot.json");
    fs::write(
        &path,
        r#"{"persons":[{"name":"Ann","phone":"+651234","email":"ann@example.com",
            "birthdayMonth":"1","reward":"0","tags":[]}]}"#,
    )
    .unwrap();

    let err = JsonCustomerStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::IllegalValue(_)));
    assert!(err.to_string().starts_with("Phone numbers should only contain numbers"));
}

#[test]
fn duplicate_persons_are_rejected() {
    let serialized = JsonSerializableRegistry {
        persons: vec![adapted("Ann", "111"), adapted("Annie", "111")],
    };
    let err = serialized.to_model().unwrap_err();
    assert_eq!(err.to_string(), "Persons list contains duplicate person(s).");
}

#[test]
fn missing_field_is_named() {
    let mut customer = adapted("Ann", "111");
    customer.reward = None;
    assert_eq!(
        customer.to_model().unwrap_err().to_string(),
        "Person's Reward field is missing!"
    );

    let mut customer = adapted("Ann", "111");
    customer.name = None;
    assert_eq!(
        customer.to_model().unwrap_err().to_string(),
        "Person's Name field is missing!"
    );
}

#[test]
fn legacy_tagged_key_is_accepted() {
    let customer: JsonAdaptedCustomer = serde_json::from_str(
        r#"{"name":"Ann","phone":"111","email":"ann@example.com",
            "birthdayMonth":"2","reward":"10","tagged":["gold"]}"#,
    )
    .unwrap();
    assert_eq!(customer.to_model().unwrap().tags().len(), 1);
}

fn adapted(name: &str, phone: &str) -> JsonAdaptedCustomer {
    JsonAdaptedCustomer {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        birthday_month: Some("4".to_string()),
        reward: Some("10".to_string()),
        tags: Vec::new(),
    }
}
