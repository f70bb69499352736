//! Customer data persistence.
//!
//! # Responsibility
//! - Define the load/save contract used by the logic manager.
//! - Keep the on-disk JSON format out of the model layer.
//!
//! # Invariants
//! - `load` returns `Ok(None)` only when the data file does not exist.
//! - Loaded data is validated field by field before it reaches the model.
//! - A failed `save` never leaves a truncated data file behind.

mod json_store;

pub use json_store::{JsonAdaptedCustomer, JsonCustomerStore, JsonSerializableRegistry};

use crate::model::registry::CustomerRegistry;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const MESSAGE_DUPLICATE_PERSONS: &str = "Persons list contains duplicate person(s).";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// Stored data parsed as JSON but violates a model constraint.
    IllegalValue(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json(err) => write!(f, "{err}"),
            Self::IllegalValue(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::IllegalValue(_) => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Load/save contract for the customer registry.
pub trait CustomerStore {
    /// Location of the backing data file.
    fn path(&self) -> &Path;

    /// Reads the stored registry; `None` when nothing has been saved yet.
    fn load(&self) -> StorageResult<Option<CustomerRegistry>>;

    /// Replaces the stored registry with `registry`.
    fn save(&self, registry: &CustomerRegistry) -> StorageResult<()>;
}
