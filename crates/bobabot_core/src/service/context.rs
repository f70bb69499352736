//! Application context owning all mutable customer state.
//!
//! # Responsibility
//! - Own the working registry, its snapshot history and the active filter.
//! - Expose the registry operations commands are allowed to perform.
//! - Compute the filtered read-model on demand.
//!
//! # Invariants
//! - The history's initial snapshot is the registry the context started with.
//! - Registry changes become undoable only after an explicit `commit`.
//! - Filtered views are recomputed from the registry, never cached.

use crate::model::customer::{Customer, CustomerIdentifier};
use crate::model::fields::Reward;
use crate::model::registry::{CustomerRegistry, RegistryResult};
use crate::model::versioned::{HistoryError, VersionedRegistry, DEFAULT_HISTORY_CAPACITY};

/// Predicate selecting which customers the read-model shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CustomerFilter {
    /// Every customer.
    #[default]
    All,
    /// Customers with a name word equal (case-insensitively) to any keyword.
    NameKeywords(Vec<String>),
}

impl CustomerFilter {
    /// Builds a keyword filter; keywords are matched case-insensitively.
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NameKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => keywords.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                customer
                    .name()
                    .words()
                    .any(|word| word.to_lowercase() == keyword)
            }),
        }
    }
}

/// Mutable application state handed to every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    registry: CustomerRegistry,
    history: VersionedRegistry,
    filter: CustomerFilter,
}

impl AppContext {
    /// Creates a context over `registry` with the default history capacity.
    pub fn new(registry: CustomerRegistry) -> Self {
        Self::with_history_capacity(registry, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(registry: CustomerRegistry, capacity: usize) -> Self {
        let history = VersionedRegistry::with_capacity(&registry, capacity);
        Self {
            registry,
            history,
            filter: CustomerFilter::All,
        }
    }

    pub fn registry(&self) -> &CustomerRegistry {
        &self.registry
    }

    pub fn history(&self) -> &VersionedRegistry {
        &self.history
    }

    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.registry.contains(customer)
    }

    pub fn add_customer(&mut self, customer: Customer) -> RegistryResult<()> {
        self.registry.add(customer)?;
        self.filter = CustomerFilter::All;
        Ok(())
    }

    pub fn set_customer(&mut self, target: &Customer, edited: Customer) -> RegistryResult<()> {
        self.registry.set_customer(target, edited)
    }

    pub fn delete_customer(&mut self, target: &Customer) -> RegistryResult<Customer> {
        self.registry.remove(target)
    }

    /// Replaces the registry with an empty one.
    pub fn clear_customers(&mut self) {
        self.registry.clear();
    }

    /// Looks up the customer addressed by `identifier` in the full registry.
    pub fn find_customer(&self, identifier: &CustomerIdentifier) -> RegistryResult<&Customer> {
        let index = self.registry.find(identifier)?;
        // `find` only returns in-range indices.
        Ok(&self.registry.as_slice()[index])
    }

    pub fn current_reward(&self, identifier: &CustomerIdentifier) -> RegistryResult<Reward> {
        self.registry.current_reward(identifier)
    }

    pub fn filter(&self) -> &CustomerFilter {
        &self.filter
    }

    pub fn update_filter(&mut self, filter: CustomerFilter) {
        self.filter = filter;
    }

    /// Customers accepted by the active filter, in registry order.
    pub fn filtered_customers(&self) -> Vec<&Customer> {
        self.filtered_view(&self.filter)
    }

    /// Customers accepted by `filter`, in registry order.
    pub fn filtered_view(&self, filter: &CustomerFilter) -> Vec<&Customer> {
        self.registry
            .iter()
            .filter(|customer| filter.matches(customer))
            .collect()
    }

    /// Stores the current registry as an undoable state.
    pub fn commit(&mut self) {
        self.history.commit(&self.registry);
    }

    pub fn undo(&mut self) -> Result<(), HistoryError> {
        self.history.undo(&mut self.registry)
    }

    pub fn redo(&mut self) -> Result<(), HistoryError> {
        self.history.redo(&mut self.registry)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(CustomerRegistry::new())
    }
}
