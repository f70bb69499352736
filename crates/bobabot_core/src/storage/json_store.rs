//! JSON file implementation of [`CustomerStore`].
//!
//! On-disk shape:
//!
//! ```json
//! { "persons": [ { "name": "Alex Yeoh", "phone": "87438807",
//!   "email": "alexyeoh@example.com", "birthdayMonth": "1",
//!   "reward": "4200", "tags": ["friends"] } ] }
//! ```

use super::{CustomerStore, StorageError, StorageResult, MESSAGE_DUPLICATE_PERSONS};
use crate::model::customer::Customer;
use crate::model::fields::{BirthdayMonth, Email, FieldError, Name, Phone, Reward, Tag};
use crate::model::registry::CustomerRegistry;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Serialized form of one customer; every field is checked on conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedCustomer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birthday_month: Option<String>,
    pub reward: Option<String>,
    #[serde(default, alias = "tagged")]
    pub tags: Vec<String>,
}

impl JsonAdaptedCustomer {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: Some(customer.name().to_string()),
            phone: Some(customer.phone().to_string()),
            email: Some(customer.email().to_string()),
            birthday_month: Some(customer.birthday_month().to_string()),
            reward: Some(customer.reward().points().to_string()),
            tags: customer.tags().iter().map(ToString::to_string).collect(),
        }
    }

    /// Converts back into a model customer.
    ///
    /// # Errors
    /// - `IllegalValue` naming the first missing or invalid field.
    pub fn to_model(&self) -> StorageResult<Customer> {
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(illegal)?;

        Ok(Customer::new(
            required(&self.name, "Name", Name::parse)?,
            required(&self.phone, "Phone", Phone::parse)?,
            required(&self.email, "Email", Email::parse)?,
            required(&self.birthday_month, "BirthdayMonth", BirthdayMonth::parse)?,
            required(&self.reward, "Reward", Reward::parse)?,
            tags,
        ))
    }
}

/// Serialized form of the whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableRegistry {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedCustomer>,
}

impl JsonSerializableRegistry {
    pub fn from_registry(registry: &CustomerRegistry) -> Self {
        Self {
            persons: registry
                .iter()
                .map(JsonAdaptedCustomer::from_customer)
                .collect(),
        }
    }

    /// # Errors
    /// - `IllegalValue` for an invalid customer or duplicate identities.
    pub fn to_model(&self) -> StorageResult<CustomerRegistry> {
        let customers = self
            .persons
            .iter()
            .map(JsonAdaptedCustomer::to_model)
            .collect::<StorageResult<Vec<_>>>()?;
        CustomerRegistry::from_customers(customers)
            .map_err(|_| StorageError::IllegalValue(MESSAGE_DUPLICATE_PERSONS.to_string()))
    }
}

/// Stores the registry as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonCustomerStore {
    path: PathBuf,
}

impl JsonCustomerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("bobabot.json"));
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn read(&self) -> StorageResult<Option<CustomerRegistry>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let serialized: JsonSerializableRegistry = serde_json::from_str(&raw)?;
        serialized.to_model().map(Some)
    }

    fn write(&self, registry: &CustomerRegistry) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let serialized = JsonSerializableRegistry::from_registry(registry);
        let payload = serde_json::to_string_pretty(&serialized)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, payload).map_err(|source| StorageError::Io {
            path: temp_path.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(source));
        }
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CustomerStore for JsonCustomerStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<Option<CustomerRegistry>> {
        let started_at = Instant::now();
        info!("event=storage_load module=storage status=start");
        match self.read() {
            Ok(loaded) => {
                info!(
                    "event=storage_load module=storage status=ok duration_ms={} found={} count={}",
                    started_at.elapsed().as_millis(),
                    loaded.is_some(),
                    loaded.as_ref().map_or(0, CustomerRegistry::len)
                );
                Ok(loaded)
            }
            Err(err) => {
                error!(
                    "event=storage_load module=storage status=error duration_ms={} error_code={}",
                    started_at.elapsed().as_millis(),
                    error_code(&err)
                );
                Err(err)
            }
        }
    }

    fn save(&self, registry: &CustomerRegistry) -> StorageResult<()> {
        let started_at = Instant::now();
        match self.write(registry) {
            Ok(()) => {
                info!(
                    "event=storage_save module=storage status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    registry.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=storage_save module=storage status=error duration_ms={} error_code={}",
                    started_at.elapsed().as_millis(),
                    error_code(&err)
                );
                Err(err)
            }
        }
    }
}

fn required<T>(
    value: &Option<String>,
    field: &str,
    parse: impl Fn(&str) -> Result<T, FieldError>,
) -> StorageResult<T> {
    let raw = value
        .as_deref()
        .ok_or_else(|| StorageError::IllegalValue(format!("Person's {field} field is missing!")))?;
    parse(raw).map_err(illegal)
}

fn illegal(err: FieldError) -> StorageError {
    StorageError::IllegalValue(err.to_string())
}

fn error_code(err: &StorageError) -> &'static str {
    match err {
        StorageError::Io { .. } => "storage_io_failed",
        StorageError::Json(_) => "storage_json_invalid",
        StorageError::IllegalValue(_) => "storage_illegal_value",
    }
}
