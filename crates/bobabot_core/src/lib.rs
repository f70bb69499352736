//! Core domain logic for bobaBot, a customer loyalty tracker.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod storage;

pub use command::{usage_overview, Command, CommandError, CommandResult};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerIdentifier};
pub use model::fields::{BirthdayMonth, Email, FieldError, Name, Phone, Reward, Tag};
pub use model::registry::{CustomerRegistry, RegistryError};
pub use model::versioned::{HistoryError, VersionedRegistry};
pub use parser::{parse_command, ParseError};
pub use service::context::{AppContext, CustomerFilter};
pub use service::logic::{LogicError, LogicManager};
pub use storage::{CustomerStore, JsonCustomerStore, StorageError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
